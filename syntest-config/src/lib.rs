//! Settings loader for the syntax test helpers.
//!
//! `defaults/syntest.default.toml` is embedded into every consumer so that the
//! documented defaults and runtime behavior stay in sync. Hosts layer their
//! user settings on top of those defaults via [`Loader`] before deserializing
//! into [`SyntestConfig`].
//!
//! Settings are read-only once built. Style names are kept as plain strings
//! here; they are validated against the style flag table when the highlight
//! settings are resolved.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/syntest.default.toml");

/// Top-level settings consumed by the syntax test helpers.
#[derive(Debug, Clone, Deserialize)]
pub struct SyntestConfig {
    pub highlight: HighlightConfig,
}

/// Controls how the assertion under the cursor is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HighlightConfig {
    /// Scope the host uses to pick the highlight color.
    pub scope: String,
    /// Region style flag names, e.g. `DRAW_NO_FILL`.
    pub styles: Vec<String>,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a settings file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional settings file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `highlight.scope`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting settings.
    pub fn build(self) -> Result<SyntestConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SyntestConfig, ConfigError> {
    Loader::new().build()
}
