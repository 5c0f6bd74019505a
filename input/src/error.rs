//! Error types for the input subsystem

use std::path::PathBuf;

/// Errors raised while polling or bringing up input devices.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The platform asked the process to quit (window closed)
    #[error("quit requested by platform")]
    QuitRequested,

    /// Gamepad backend could not be initialized
    #[error("gamepad backend unavailable: {0}")]
    Gamepad(String),
}

/// Errors raised while reading, writing or binding input configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No config variable with this name
    #[error("unknown config variable '{0}'")]
    UnknownVariable(String),

    /// Value not valid for the named variable
    #[error("invalid value {value} for config variable '{name}'")]
    InvalidValue { name: String, value: i32 },

    /// Platform config directory could not be determined
    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse input config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize input config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
