//! Named commands for hosts that register commands by string name.
//!
//! Arguments arrive as a JSON object, as key bindings and menus supply them.

use crate::syntest::align::align_syntax_test;
use crate::syntest::error::CommandError;
use crate::syntest::highlight::{update_highlight, HighlightSettings};
use crate::syntest::host::SyntaxTestView;
use crate::syntest::suggest::{suggest_syntax_test, DEFAULT_CHARACTER};
use serde::Deserialize;
use serde_json::Value;

pub const COMMAND_ALIGN: &str = "align_syntax_test";
pub const COMMAND_SUGGEST: &str = "suggest_syntax_test";
pub const COMMAND_HIGHLIGHT: &str = "highlight_syntax_test";

#[derive(Debug, Deserialize)]
struct SuggestArgs {
    #[serde(default)]
    character: Option<String>,
}

/// Run the command called `command` against `view`.
///
/// `arguments` may be `null` or an object; only `suggest_syntax_test` reads
/// it, taking an optional single-character `character` field.
pub fn execute_command<V: SyntaxTestView + ?Sized>(
    view: &mut V,
    settings: &HighlightSettings,
    command: &str,
    arguments: &Value,
) -> Result<(), CommandError> {
    match command {
        COMMAND_ALIGN => {
            align_syntax_test(view);
        }
        COMMAND_SUGGEST => {
            let character = suggest_character(arguments)?;
            suggest_syntax_test(view, character);
        }
        COMMAND_HIGHLIGHT => update_highlight(view, settings),
        _ => return Err(CommandError::UnknownCommand(command.to_string())),
    }
    Ok(())
}

fn suggest_character(arguments: &Value) -> Result<char, CommandError> {
    if arguments.is_null() {
        return Ok(DEFAULT_CHARACTER);
    }
    let args = SuggestArgs::deserialize(arguments).map_err(|source| {
        CommandError::InvalidArguments {
            command: COMMAND_SUGGEST.to_string(),
            source,
        }
    })?;
    match args.character {
        None => Ok(DEFAULT_CHARACTER),
        Some(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(character), None) => Ok(character),
                _ => Err(CommandError::InvalidCharacter(text)),
            }
        }
    }
}
