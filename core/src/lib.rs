//! libintent-core
//!
//! Offline pattern-matching intent recognition. An utterance (recognized
//! text plus a locale tag) is tokenized, matched against the compiled
//! patterns of the applied models, and the best match is returned with
//! its extracted entities.
//!
//! Public API:
//! - `IntentRecognizer` - apply models, `recognize_once(text)`
//! - `PatternModel` - programmatic builder and JSON loader
//! - `IntentResult` / `RankedIntent` - winner plus ranked alternates
//! - `EntityDef` / `ListMode` - entity catalog definitions
//! - `Config` - tuning knobs with TOML load/save
//!
//! Locale-specific numeral tables live in the `libnumerals` crate.

use serde::{Deserialize, Serialize};

pub mod entity;
pub mod error;
pub mod locale;
pub mod matcher;
pub mod model;
pub mod pattern;
pub mod rank;
pub mod recognizer;
pub mod result;
pub mod tokenizer;

pub use entity::{EntityCatalog, EntityDef, ListEntry, ListMode};
pub use error::IntentError;
pub use locale::Locale;
pub use matcher::{MatchOutcome, Matcher, SlotBinding};
pub use model::{EntityDecl, EntityKind, IntentDecl, PatternModel};
pub use pattern::PatternAtom;
pub use rank::MatchScore;
pub use recognizer::IntentRecognizer;
pub use result::{IntentResult, RankedIntent};
pub use tokenizer::{tokenize, TextKind, Token, TokenKind};

/// Tuning knobs for matching and ranking.
///
/// Everything here has a sensible default; models and patterns carry the
/// actual recognition behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on the ranked alternates surfaced in
    /// `IntentResult::detailed`.
    pub max_alternates: usize,
    /// Longest token span tried when binding a prebuilt integer slot.
    pub max_integer_span: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_alternates: 5,
            max_integer_span: 12,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_and_toml() {
        let config = Config::default();
        assert_eq!(config.max_alternates, 5);
        let text = config.to_toml_string().unwrap();
        let back = Config::from_toml_str(&text).unwrap();
        assert_eq!(back.max_integer_span, config.max_integer_span);
        // Partial documents fall back to defaults.
        let partial = Config::from_toml_str("max_alternates = 9").unwrap();
        assert_eq!(partial.max_alternates, 9);
        assert_eq!(partial.max_integer_span, 12);
    }

    #[test]
    fn normalize_trims_and_recomposes() {
        assert_eq!(utils::normalize("  cafe\u{0301} "), "café");
    }
}
