//! Conversion settings and the optional TOML file layer.
//!
//! `SlugConfig` is the in-memory form with compiled-in defaults;
//! `ConfigFile` adds the on-disk `[slug]` and `[morph]` sections used by
//! the CLI.

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_MAX_LENGTH: usize = 50;
pub const DEFAULT_SEPARATOR: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Conversion settings, resolved once at converter construction.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Maximum slug length in bytes; 0 disables truncation.
    pub max_length: usize,
    /// Word separator, a single ASCII punctuation character.
    pub separator: String,
    /// Segment words with a morphological analyzer before transliterating.
    pub use_morphology: bool,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            separator: DEFAULT_SEPARATOR.to_string(),
            use_morphology: true,
        }
    }
}

impl SlugConfig {
    /// Check field values, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut chars = self.separator.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(invalid_separator("must not be empty")),
            (Some(_), Some(_)) => Err(invalid_separator("must be a single character")),
            (Some(c), None) if !c.is_ascii_punctuation() => Err(invalid_separator(
                "must be an ASCII punctuation character",
            )),
            _ => Ok(()),
        }
    }
}

fn invalid_separator(reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: "separator".to_string(),
        reason: reason.to_string(),
    }
}

/// On-disk configuration for the CLI.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub slug: SlugConfig,
    pub morph: MorphSection,
}

/// `[morph]` section: where to find the analyzer dictionary.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MorphSection {
    pub dict: Option<PathBuf>,
}

/// Parse and validate a configuration file.
pub fn parse_config_toml(toml_str: &str) -> Result<ConfigFile, ConfigError> {
    let file: ConfigFile =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    file.slug.validate()?;
    Ok(file)
}
