//! # Config Loader
//!
//! Locates, reads and tokenizes `key=value` configuration files.
//!
//! ```no_run
//! use config_loader::{Properties, find_and_load};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let content = find_and_load("app.conf", "MEET_CONFIG")?;
//!     let properties = Properties::parse(&content)?;
//!
//!     if let Some(server) = properties.get("default_server_url") {
//!         println!("default server: {}", server);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ConfigError, Result};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a configuration file into a string without interpreting it.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))
}

/// Searches for `filename` in the usual places.
///
/// Order:
/// 1. The path held by the `env_var` environment variable
/// 2. `./config/{filename}`
/// 3. `./{filename}`
pub fn find_config_file(filename: &str, env_var: &str) -> Result<PathBuf> {
    if let Ok(path) = env::var(env_var) {
        let path_buf = PathBuf::from(&path);
        if path_buf.exists() {
            return Ok(path_buf);
        }
    }

    let config_dir = PathBuf::from("./config").join(filename);
    if config_dir.exists() {
        return Ok(config_dir);
    }

    let current_dir = PathBuf::from("./").join(filename);
    if current_dir.exists() {
        return Ok(current_dir);
    }

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found. Searched: ${}, ./config/{}, ./{}",
        filename, env_var, filename, filename
    )))
}

/// [`find_config_file`] followed by [`load_config_file`].
pub fn find_and_load(filename: &str, env_var: &str) -> Result<String> {
    let path = find_config_file(filename, env_var)?;
    load_config_file(path)
}

/// Ordered `key=value` pairs from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    /// Parses `key=value` lines. Blank lines and `#` comments are skipped;
    /// keys and values are trimmed. Line numbers in errors are 1-based.
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Parse {
                    line: index + 1,
                    content: line.to_string(),
                });
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::Parse {
                    line: index + 1,
                    content: line.to_string(),
                });
            }

            entries.push((key.to_string(), value.trim().to_string()));
        }

        Ok(Self { entries })
    }

    /// Last value written for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
