//! Localized UI strings.

use std::str::FromStr;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    De,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "de" | "german" | "deutsch" => Ok(Language::De),
            other => Err(format!("Unsupported language '{}'", other)),
        }
    }
}

/// Resolves message keys for one language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Translation for `key`, or the key itself when none exists.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.language {
            Language::En => EN,
            Language::De => DE,
        };

        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
            .unwrap_or(key)
    }
}

const EN: &[(&str, &str)] = &[
    ("appTitle", "Meet"),
    ("go", "GO"),
    ("home", "Home"),
    ("leave", "Leave"),
    ("conferenceRoom", "Room"),
    ("conferenceServer", "Server"),
    ("onboardingNext", "Next"),
    ("onboardingSkip", "Skip"),
    ("onboardingConferenceUrlTitle", "Join a meeting"),
    (
        "onboardingConferenceUrlBody",
        "Enter the name of the room you want to join, or paste a full meeting URL.",
    ),
];

const DE: &[(&str, &str)] = &[
    ("appTitle", "Meet"),
    ("go", "LOS"),
    ("home", "Start"),
    ("leave", "Verlassen"),
    ("conferenceRoom", "Raum"),
    ("conferenceServer", "Server"),
    ("onboardingNext", "Weiter"),
    ("onboardingSkip", "Überspringen"),
    ("onboardingConferenceUrlTitle", "Einem Meeting beitreten"),
    (
        "onboardingConferenceUrlBody",
        "Gib den Namen des Raums ein oder füge eine vollständige Meeting-URL ein.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_is_localized() {
        assert_eq!(Translator::new(Language::En).t("go"), "GO");
        assert_eq!(Translator::new(Language::De).t("go"), "LOS");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(Translator::default().t("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("DE".parse::<Language>(), Ok(Language::De));
        assert_eq!(" en ".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_tables_cover_same_keys() {
        for (key, _) in EN {
            assert!(DE.iter().any(|(k, _)| k == key), "missing de key {}", key);
        }
        assert_eq!(EN.len(), DE.len());
    }
}
