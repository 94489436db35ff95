use std::fmt;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while locating, reading or parsing a configuration file.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No configuration file at the given path (or in any searched location).
    FileNotFound(String),

    /// The file exists but could not be read.
    ReadError(String),

    /// A line is neither blank, a comment, nor `key=value`.
    Parse { line: usize, content: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read configuration file: {}", msg)
            }
            ConfigError::Parse { line, content } => {
                write!(f, "Invalid configuration line {}: '{}'", line, content)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
