use thiserror::Error;

/// Highlight styles that do not resolve to a known style flag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Unknown highlight style: {0}")]
    UnknownStyle(String),
}

/// Failures of the named command surface.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments for {command}: {source}")]
    InvalidArguments {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a single character, got {0:?}")]
    InvalidCharacter(String),
}
