use std::path::Path;

use serde::{Deserialize, Serialize};
use wordforge_core::{CharsetSpec, SafetyPolicy};

use super::atomic::write_bytes_atomic;
use super::{WorkspaceError, WorkspaceResult};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "wordforge.toml";

/// Defaults for every command, loaded from `wordforge.toml`.
///
/// Every section and key is optional; missing ones keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub charset: CharsetSpec,
    pub exhaustive: ExhaustiveDefaults,
    pub random: RandomDefaults,
    pub policy: SafetyPolicy,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhaustiveDefaults {
    pub max_length: usize,
}

impl Default for ExhaustiveDefaults {
    fn default() -> Self {
        Self { max_length: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomDefaults {
    pub count: u64,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for RandomDefaults {
    fn default() -> Self {
        Self {
            count: 1000,
            min_length: 4,
            max_length: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Load settings from `path`, or from [`DEFAULT_CONFIG_PATH`] when no path is
/// given. An explicit path must exist; the implicit one may be missing.
pub fn load_settings(path: Option<&Path>) -> WorkspaceResult<Settings> {
    let path = match path {
        Some(path) => path,
        None => {
            let implicit = Path::new(DEFAULT_CONFIG_PATH);
            if !implicit.exists() {
                return Ok(Settings::default());
            }
            implicit
        }
    };

    let content = std::fs::read_to_string(path).map_err(|err| {
        WorkspaceError::Invalid(format!("cannot read config {}: {err}", path.display()))
    })?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> WorkspaceResult<Settings> {
    Ok(toml::from_str(content)?)
}

pub fn save_settings(path: &Path, settings: &Settings) -> WorkspaceResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())
}
