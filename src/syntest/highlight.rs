//! Highlight Projector
//!
//! Marks the columns of the tested line that the assertion under the cursor
//! refers to. Recomputed from scratch on every selection change; a run that
//! was scheduled before a newer selection change simply gets overwritten by
//! the next one.

use crate::syntest::error::StyleError;
use crate::syntest::grammar::is_caret_run;
use crate::syntest::host::{Region, RegionPainter, TextView};
use crate::syntest::walker::collect_assertion_run;
use std::ops::{BitOr, BitOrAssign};
use syntest_config::HighlightConfig;

/// Key of the highlight region in the host.
pub const HIGHLIGHT_KEY: &str = "current_syntax_test";

/// Region drawing flags understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleFlags(u32);

impl StyleFlags {
    pub const NONE: StyleFlags = StyleFlags(0);
    pub const DRAW_EMPTY: StyleFlags = StyleFlags(1);
    pub const HIDE_ON_MINIMAP: StyleFlags = StyleFlags(2);
    pub const DRAW_EMPTY_AS_OVERWRITE: StyleFlags = StyleFlags(4);
    pub const PERSISTENT: StyleFlags = StyleFlags(16);
    pub const DRAW_NO_FILL: StyleFlags = StyleFlags(32);
    pub const HIDDEN: StyleFlags = StyleFlags(128);
    pub const DRAW_NO_OUTLINE: StyleFlags = StyleFlags(256);
    pub const DRAW_SOLID_UNDERLINE: StyleFlags = StyleFlags(512);
    pub const DRAW_STIPPLED_UNDERLINE: StyleFlags = StyleFlags(1024);
    pub const DRAW_SQUIGGLY_UNDERLINE: StyleFlags = StyleFlags(2048);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: StyleFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Look up a style by its setting name, e.g. `DRAW_NO_FILL`.
    pub fn from_name(name: &str) -> Option<StyleFlags> {
        STYLE_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, flags)| *flags)
    }

    /// Combine style names, rejecting any that are unknown.
    pub fn from_names<I, S>(names: I) -> Result<StyleFlags, StyleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(StyleFlags::NONE, |acc, name| {
            let name = name.as_ref();
            StyleFlags::from_name(name)
                .map(|flags| acc | flags)
                .ok_or_else(|| StyleError::UnknownStyle(name.to_string()))
        })
    }
}

impl BitOr for StyleFlags {
    type Output = StyleFlags;

    fn bitor(self, rhs: StyleFlags) -> StyleFlags {
        StyleFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for StyleFlags {
    fn bitor_assign(&mut self, rhs: StyleFlags) {
        self.0 |= rhs.0;
    }
}

/// Every style name accepted in the settings.
pub const STYLE_NAMES: &[(&str, StyleFlags)] = &[
    ("DRAW_EMPTY", StyleFlags::DRAW_EMPTY),
    ("HIDE_ON_MINIMAP", StyleFlags::HIDE_ON_MINIMAP),
    ("DRAW_EMPTY_AS_OVERWRITE", StyleFlags::DRAW_EMPTY_AS_OVERWRITE),
    ("PERSISTENT", StyleFlags::PERSISTENT),
    ("DRAW_NO_FILL", StyleFlags::DRAW_NO_FILL),
    ("HIDDEN", StyleFlags::HIDDEN),
    ("DRAW_NO_OUTLINE", StyleFlags::DRAW_NO_OUTLINE),
    ("DRAW_SOLID_UNDERLINE", StyleFlags::DRAW_SOLID_UNDERLINE),
    ("DRAW_STIPPLED_UNDERLINE", StyleFlags::DRAW_STIPPLED_UNDERLINE),
    ("DRAW_SQUIGGLY_UNDERLINE", StyleFlags::DRAW_SQUIGGLY_UNDERLINE),
];

/// Resolved highlight settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSettings {
    pub scope: String,
    pub flags: StyleFlags,
}

impl HighlightSettings {
    pub fn from_config(config: &HighlightConfig) -> Result<Self, StyleError> {
        Ok(Self {
            scope: config.scope.clone(),
            flags: StyleFlags::from_names(&config.styles)?,
        })
    }
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            scope: "text".to_string(),
            flags: StyleFlags::DRAW_NO_FILL,
        }
    }
}

/// Region of the tested line covered by the assertion under the cursor.
///
/// A selection made of carets only narrows the region to the selected
/// columns. A `<-` assertion covers the single column it points at.
pub fn highlight_region<V: TextView + ?Sized>(view: &V) -> Option<Region> {
    let cursor = view.selection();
    let only_cursor = !cursor.is_empty() && is_caret_run(&view.substr(cursor));

    let run = collect_assertion_run(view, cursor.start)?;
    let colrange = run.nearest()?.colrange()?;

    let (start, end) = if only_cursor {
        (view.rowcol(cursor.start).1, view.rowcol(cursor.end).1)
    } else if colrange.is_empty() {
        (colrange.start, colrange.start + 1)
    } else {
        (colrange.start, colrange.end)
    };
    let line = run.tested_line;
    Some(Region::new(line.start + start, line.start + end))
}

/// Redraw, or clear, the highlight for the current selection.
pub fn update_highlight<V>(view: &mut V, settings: &HighlightSettings)
where
    V: TextView + RegionPainter + ?Sized,
{
    match highlight_region(view) {
        Some(region) => {
            tracing::trace!(?region, "highlighting assertion");
            view.add_regions(HIGHLIGHT_KEY, &[region], &settings.scope, settings.flags);
        }
        None => view.erase_regions(HIGHLIGHT_KEY),
    }
}
