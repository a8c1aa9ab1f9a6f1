mod atomic;
mod settings;

pub use settings::{DEFAULT_CONFIG_PATH, Settings, load_settings, save_settings};

use std::io;

use thiserror::Error;

/// Errors raised while reading or writing the config file.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("invalid workspace state: {0}")]
    Invalid(String),
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
