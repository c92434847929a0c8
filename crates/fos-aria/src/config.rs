//! Knowledge Base Configuration

use std::path::PathBuf;
use std::str::FromStr;

use crate::outline::Shortcut;
use crate::AriaError;

/// Environment variable naming a JSON role table
pub const ENV_TABLE: &str = "FOS_ARIA_TABLE";
/// Environment variable selecting the validation mode
pub const ENV_VALIDATION: &str = "FOS_ARIA_VALIDATION";
/// Environment variable overriding the outline shortcut
pub const ENV_SHORTCUT: &str = "FOS_ARIA_SHORTCUT";

/// What to do with validation findings when a table is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Skip validation
    Off,
    /// Log findings and keep the table
    #[default]
    Warn,
    /// Refuse tables with errors
    Strict,
}

impl FromStr for ValidationMode {
    type Err = AriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "strict" => Ok(Self::Strict),
            _ => Err(AriaError::InvalidConfig {
                key: ENV_VALIDATION.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Knowledge base configuration options
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Validation of the loaded table
    pub validation: ValidationMode,

    /// Key combination that opens the landmark outline
    pub shortcut: Shortcut,

    /// JSON role table replacing the built-in one
    pub table_path: Option<PathBuf>,
}

impl Config {
    /// Defaults overridden by `FOS_ARIA_*` environment variables
    pub fn from_env() -> Result<Self, AriaError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AriaError> {
        let mut config = Self::default();
        if let Some(mode) = lookup(ENV_VALIDATION) {
            config.validation = mode.parse()?;
        }
        if let Some(shortcut) = lookup(ENV_SHORTCUT) {
            config.shortcut = shortcut.parse()?;
        }
        if let Some(path) = lookup(ENV_TABLE).filter(|p| !p.is_empty()) {
            config.table_path = Some(PathBuf::from(path));
        }
        Ok(config)
    }
}
