//! User-facing text in French and English.
//!
//! Strings are looked up by key in a per-language `Catalog`. A key missing
//! from the catalog renders as the key itself, and `#` in a template is
//! replaced by the supplied argument. The language can be swapped at any
//! time; nothing caches rendered text.

mod catalog;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::ScoreError;

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    /// The other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" | "french" | "français" => Ok(Language::Fr),
            "en" | "english" | "anglais" => Ok(Language::En),
            other => Err(format!("unsupported language '{other}' (expected fr or en)")),
        }
    }
}

/// String table for one language.
#[derive(Clone, Debug)]
pub struct Catalog {
    language: Language,
    entries: FxHashMap<&'static str, &'static str>,
}

impl Catalog {
    #[must_use]
    pub fn new(language: Language) -> Self {
        let table = match language {
            Language::Fr => catalog::FR,
            Language::En => catalog::EN,
        };
        Self {
            language,
            entries: table.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a key. Unknown keys render as themselves.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.entries.get(key).copied().unwrap_or(key)
    }

    /// Look up a template and substitute `#` with `arg`.
    #[must_use]
    pub fn t_with(&self, key: &str, arg: impl std::fmt::Display) -> String {
        self.t(key).replace('#', &arg.to_string())
    }

    /// Translate a validation error into a warning message.
    #[must_use]
    pub fn error_message(&self, err: &ScoreError) -> String {
        match err {
            ScoreError::NotEnoughPlayers { min, .. } => self.t_with("warn_players", min),
            ScoreError::TooManyPlayers { max, .. } => self.t_with("warn_too_many", max),
            ScoreError::DuplicateName(name) => self.t_with("warn_duplicate", name),
            ScoreError::InvalidDealer { index, .. } => {
                self.t_with("warn_dealer", index.wrapping_add(1))
            }
            ScoreError::InvalidCaller { index, .. } => {
                self.t_with("warn_caller", index.wrapping_add(1))
            }
            ScoreError::InvalidLimit => self.t("warn_limit").to_string(),
            ScoreError::SumMismatch { sum, .. } => self.t_with("warn_math", sum),
            ScoreError::MissingColor => self.t("warn_dice").to_string(),
            ScoreError::AutoCompleteBlanks(_) => self.t("warn_auto").to_string(),
            ScoreError::AutoCompleteRange { needed } => self.t_with("warn_auto_range", needed),
            ScoreError::ScoreCount { expected, .. } => self.t_with("warn_count", expected),
            ScoreError::UnknownRound(round) => self.t_with("warn_round", round),
            ScoreError::WrongPhase { .. } => self.t("warn_phase").to_string(),
            ScoreError::FinishTooEarly { required, .. } => self.t_with("warn_finish", required),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_fallback() {
        let fr = Catalog::new(Language::Fr);
        let en = Catalog::new(Language::En);

        assert_eq!(fr.t("game_over"), "Partie Terminée");
        assert_eq!(en.t("game_over"), "Game Over");
        assert_eq!(en.t("no_such_key"), "no_such_key");
        assert_eq!(en.t("validate"), "validate");
    }

    #[test]
    fn test_placeholder_substitution() {
        let en = Catalog::new(Language::En);
        assert_eq!(en.t_with("winner", "Ann"), "🏆 Winner: Ann !");
        assert_eq!(en.t_with("warn_math", 240), "Total is 240 (Expected 250).");
    }

    #[test]
    fn test_catalogs_have_the_same_keys() {
        let fr: Vec<_> = catalog::FR.iter().map(|(k, _)| *k).collect();
        let en: Vec<_> = catalog::EN.iter().map(|(k, _)| *k).collect();
        for key in &fr {
            assert!(en.contains(key), "missing English text for {key}");
        }
        for key in &en {
            assert!(fr.contains(key), "missing French text for {key}");
        }
    }

    #[test]
    fn test_toggle_and_parse() {
        assert_eq!(Language::Fr.toggled(), Language::En);
        assert_eq!(Language::En.toggled(), Language::Fr);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::Fr);
    }

    #[test]
    fn test_error_messages_are_translated() {
        let fr = Catalog::new(Language::Fr);
        let msg = fr.error_message(&ScoreError::NotEnoughPlayers { min: 3, got: 1 });
        assert_eq!(msg, "Il faut au moins 3 joueurs !");

        let en = Catalog::new(Language::En);
        let msg = en.error_message(&ScoreError::SumMismatch {
            sum: 260,
            expected: 250,
        });
        assert_eq!(msg, "Total is 260 (Expected 250).");
    }
}
