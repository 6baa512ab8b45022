//! Host Editor Capabilities
//!
//! The helpers never own a buffer. Everything they read or change goes through
//! the traits below, which a host editor implements over its own view type.
//!
//! Positions are absolute character offsets into the document, and columns
//! are character offsets from the start of a line. A line region never
//! includes its trailing newline, so `line.end` is the position of the newline
//! character (or the end of the document on the last line).

use crate::syntest::highlight::StyleFlags;
use std::path::Path;

/// A half-open span of document positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    /// Create a region, ordering the endpoints.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// An empty region at `pos`, i.e. a bare cursor.
    pub fn point(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Read access to the document and its primary selection.
pub trait TextView {
    /// Path the document was saved under, if any.
    fn file_name(&self) -> Option<&Path>;

    /// Region of the line containing `pos`, without the trailing newline.
    /// Positions past the end of the document resolve to the last line.
    fn line(&self, pos: usize) -> Region;

    fn substr(&self, region: Region) -> String;

    /// Zero-based `(row, column)` of `pos`.
    fn rowcol(&self, pos: usize) -> (usize, usize);

    /// The primary selection.
    fn selection(&self) -> Region;
}

/// Scope information computed by the host's syntax engine.
///
/// Scope names are opaque space-separated stacks of dot-delimited scopes,
/// e.g. `source.example meta.function.example entity.name.function.example`.
pub trait ScopeSource {
    fn scope_name(&self, pos: usize) -> String;

    /// Match specificity of `selector` against `scope_name`; zero means no match.
    fn score_selector(&self, scope_name: &str, selector: &str) -> u32;
}

/// Mutating access used by the commands.
///
/// Edits shift the selection the way the host normally does; commands that
/// care about the selection afterwards set it explicitly.
pub trait EditView: TextView {
    fn insert(&mut self, pos: usize, text: &str);

    fn erase(&mut self, region: Region);

    fn replace(&mut self, region: Region, text: &str) {
        self.erase(region);
        self.insert(region.start, text);
    }

    fn set_selection(&mut self, region: Region);
}

/// Named highlight regions drawn by the host.
pub trait RegionPainter {
    fn add_regions(&mut self, key: &str, regions: &[Region], scope: &str, flags: StyleFlags);

    fn erase_regions(&mut self, key: &str);
}

/// Everything the command surface needs from one view.
pub trait SyntaxTestView: EditView + ScopeSource + RegionPainter {}

impl<T: EditView + ScopeSource + RegionPainter + ?Sized> SyntaxTestView for T {}
