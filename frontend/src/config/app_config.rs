//! Application Configuration
//!
//! Default server, logging, language and onboarding settings, read from
//! `app.conf` through `config_loader`.

use crate::i18n::Language;
use config_loader::{ConfigError, Properties};
use logging::LogLevel;
use std::path::PathBuf;

/// Config file name searched by [`AppConfig::load`].
pub const CONFIG_FILE: &str = "app.conf";
/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "MEET_CONFIG";

/// Application configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Server used when the user types a bare room name
    pub default_server_url: String,
    /// Path to the log file
    pub log_path: PathBuf,
    /// Logging level
    pub log_level: LogLevel,
    /// UI language
    pub language: Language,
    /// Whether guided tours may be shown at all
    pub onboarding_enabled: bool,
    /// Where completed tours are remembered; `None` keeps them in memory only
    pub onboarding_state_path: Option<PathBuf>,
    /// Refuse to join when both welcome fields are empty
    pub reject_empty_details: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_server_url: "https://meet.jit.si".to_string(),
            log_path: PathBuf::from("frontend.log"),
            log_level: LogLevel::Info,
            language: Language::En,
            onboarding_enabled: true,
            onboarding_state_path: Some(PathBuf::from("onboarding.state")),
            reject_empty_details: false,
        }
    }
}

impl AppConfig {
    /// Builds a configuration from parsed properties.
    ///
    /// Returns the configuration plus notes about ignored or malformed keys,
    /// to be logged once the logger exists.
    pub fn from_properties(properties: &Properties) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut notes = Vec::new();

        for (key, value) in properties.iter() {
            match key {
                "default_server_url" => {
                    config.default_server_url = value.trim_end_matches('/').to_string();
                }
                "log_path" => config.log_path = PathBuf::from(value),
                "log_level" => config.log_level = value.parse().unwrap_or_default(),
                "language" => match value.parse() {
                    Ok(language) => config.language = language,
                    Err(e) => notes.push(e),
                },
                "onboarding_enabled" => match parse_bool(value) {
                    Some(enabled) => config.onboarding_enabled = enabled,
                    None => notes.push(format!("Invalid boolean for '{}': '{}'", key, value)),
                },
                "onboarding_state_path" => {
                    config.onboarding_state_path =
                        (!value.is_empty()).then(|| PathBuf::from(value));
                }
                "reject_empty_details" => match parse_bool(value) {
                    Some(reject) => config.reject_empty_details = reject,
                    None => notes.push(format!("Invalid boolean for '{}': '{}'", key, value)),
                },
                _ => notes.push(format!("Unknown configuration key '{}' ignored", key)),
            }
        }

        (config, notes)
    }

    /// Loads configuration from `$MEET_CONFIG`, `./config/app.conf` or
    /// `./app.conf`, falling back to defaults when none exists.
    pub fn load() -> (Self, Vec<String>) {
        let content = match config_loader::find_and_load(CONFIG_FILE, CONFIG_ENV_VAR) {
            Ok(content) => content,
            Err(ConfigError::FileNotFound(_)) => {
                return (
                    Self::default(),
                    vec!["No configuration file found, using defaults".to_string()],
                );
            }
            Err(e) => return (Self::default(), vec![e.to_string()]),
        };

        match Properties::parse(&content) {
            Ok(properties) => Self::from_properties(&properties),
            Err(e) => (Self::default(), vec![e.to_string()]),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(content: &str) -> (AppConfig, Vec<String>) {
        AppConfig::from_properties(&Properties::parse(content).unwrap())
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_server_url, "https://meet.jit.si");
        assert_eq!(config.log_path, PathBuf::from("frontend.log"));
        assert!(config.onboarding_enabled);
        assert!(!config.reject_empty_details);
    }

    #[test]
    fn test_load_from_content() {
        let (config, notes) = config_from(
            "\
            # Test config\n\
            default_server_url=https://meet.example.org/\n\
            log_path=/tmp/meet.log\n\
            log_level=Debug\n\
            language=de\n\
            onboarding_enabled=no\n\
            onboarding_state_path=\n\
            reject_empty_details=true\n\
        ",
        );

        assert!(notes.is_empty());
        assert_eq!(config.default_server_url, "https://meet.example.org");
        assert_eq!(config.log_path, PathBuf::from("/tmp/meet.log"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.language, Language::De);
        assert!(!config.onboarding_enabled);
        assert_eq!(config.onboarding_state_path, None);
        assert!(config.reject_empty_details);
    }

    #[test]
    fn test_unknown_and_invalid_keys_are_reported() {
        let (config, notes) = config_from("server_address=1.2.3.4\nonboarding_enabled=maybe\n");

        assert_eq!(notes.len(), 2);
        assert!(notes[0].contains("server_address"));
        assert!(notes[1].contains("onboarding_enabled"));
        assert!(config.onboarding_enabled);
    }

    #[test]
    fn test_parse_bool_variants() {
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("sure"), None);
    }
}
