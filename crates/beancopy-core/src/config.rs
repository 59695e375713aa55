//! Mapper configuration
//!
//! Configuration is layered: built-in defaults, then an optional file (TOML
//! or JSON, picked by extension), then environment overrides.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Environment variable toggling the same-name pass
pub const ENV_COPY_SAME_NAME: &str = "BEANCOPY_COPY_SAME_NAME";

/// Environment variable selecting the [`MismatchPolicy`]
pub const ENV_ON_MISMATCH: &str = "BEANCOPY_ON_MISMATCH";

/// What to do when an explicit mapping joins two non-bridgeable field types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Fail the mapping call
    #[default]
    Error,
    /// Leave the target field as it is and log a warning
    Skip,
}

impl fmt::Display for MismatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchPolicy::Error => write!(f, "error"),
            MismatchPolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for MismatchPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(MismatchPolicy::Error),
            "skip" => Ok(MismatchPolicy::Skip),
            other => Err(Error::Configuration {
                message: format!("Invalid mismatch policy: {} (expected error or skip)", other),
                source: None,
            }),
        }
    }
}

/// Options controlling a [`BeanCopier`](crate::BeanCopier)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Run the same-name pass before annotated overrides
    pub copy_same_name: bool,

    /// Handling of non-bridgeable type mismatches in annotated fields
    pub on_mismatch: MismatchPolicy,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            copy_same_name: true,
            on_mismatch: MismatchPolicy::Error,
        }
    }
}

impl MapperConfig {
    /// Defaults with the same-name pass switched on or off
    pub fn with_same_name_copy(copy_same_name: bool) -> Self {
        Self {
            copy_same_name,
            ..Self::default()
        }
    }

    pub fn on_mismatch(mut self, policy: MismatchPolicy) -> Self {
        self.on_mismatch = policy;
        self
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a `.toml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(Error::Configuration {
                message: format!("Unsupported config file format: {}", path.display()),
                source: None,
            }),
        }
    }

    /// Apply environment overrides on top of the current values
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with(|key| std::env::var(key).ok())
    }

    fn merge_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_COPY_SAME_NAME) {
            self.copy_same_name = parse_bool(&value).ok_or_else(|| Error::Configuration {
                message: format!("Invalid {} value: {}", ENV_COPY_SAME_NAME, value),
                source: None,
            })?;
        }

        if let Some(value) = lookup(ENV_ON_MISMATCH) {
            self.on_mismatch = value.parse()?;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
