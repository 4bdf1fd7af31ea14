//! Preset options and theme configuration.
//!
//! Configuration is a JSON document with camelCase keys. Every field is
//! optional:
//!
//! ```json
//! {
//!   "attributifyPseudo": false,
//!   "theme": { "transformRules": { ":": "-c-", "[": "-fl-", "]": "-fr-" } }
//! }
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Options that change the selector text emitted by the variant set.
///
/// None of them change which tokens are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresetOptions {
    /// Render relation bases as attribute selectors (`[group=""]`) instead
    /// of classes (`.group`).
    pub attributify_pseudo: bool,
}

/// Theme values the matchers read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    /// Rules for undoing an earlier class-name encoding pass.
    pub transform_rules: TransformRules,
}

/// Complete configuration file contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Preset options, read from the top level of the document.
    #[serde(flatten)]
    pub options: PresetOptions,
    /// Theme section.
    pub theme: Theme,
}

/// Map from an original character sequence to the text that replaced it
/// when class names were encoded for a restricted target (for example
/// `":"` to `"-c-"`).
///
/// Rules keep the order they were declared in, and restoring walks them in
/// that order. When one encoded text contains another, the rule declared
/// first wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct TransformRules(IndexMap<String, String>);

impl TransformRules {
    /// Build rules from `(original, encoded)` pairs.
    pub fn new<I, K, V>(rules: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            rules
                .into_iter()
                .map(|(original, encoded)| (original.into(), encoded.into()))
                .collect(),
        )
    }

    /// `true` when no rule is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Undo the encoding on `token`.
    ///
    /// Borrows the input when nothing was replaced.
    #[must_use]
    pub fn restore<'a>(&self, token: &'a str) -> Cow<'a, str> {
        let mut restored = Cow::Borrowed(token);
        for (original, encoded) in &self.0 {
            if encoded.is_empty() || !restored.contains(encoded.as_str()) {
                continue;
            }
            restored = Cow::Owned(restored.replace(encoded.as_str(), original));
        }
        restored
    }
}

/// Error raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The file is not a valid configuration document.
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        /// Path that was read.
        path: PathBuf,
        /// Underlying JSON failure.
        source: serde_json::Error,
    },

    /// An in-memory document is not a valid configuration.
    #[error("invalid config: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl Config {
    /// Parse configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the text is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Load configuration from a JSON file.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not a valid configuration.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
