//! Locale tags.
//!
//! Tags are BCP-47-like ("en-US", "zh-cn", "fr_FR"); only the primary
//! subtag and the region are kept, which is all the tokenizer and the
//! numeral tables consult.

use serde::{Deserialize, Serialize};
use std::fmt;

use libnumerals::LocaleFamily;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    lang: String,
    region: String,
}

impl Locale {
    /// Parse a locale tag, keeping primary subtag + region.
    pub fn parse(tag: &str) -> Self {
        let normalized = tag.trim().to_ascii_lowercase();
        let mut parts = normalized.split(['-', '_']).filter(|p| !p.is_empty());
        let lang = parts.next().unwrap_or("en").to_string();
        let region = parts.next().unwrap_or_default().to_string();
        Locale { lang, region }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Whether this locale tokenizes per codepoint (Han/kana scripts).
    pub fn is_cjk(&self) -> bool {
        matches!(self.lang.as_str(), "zh" | "ja")
    }

    /// The numeral table family, when one is supplied.
    pub fn family(&self) -> Option<LocaleFamily> {
        LocaleFamily::detect(&self.lang)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            lang: "en".to_string(),
            region: "us".to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.region.is_empty() {
            write!(f, "{}", self.lang)
        } else {
            write!(f, "{}-{}", self.lang, self.region)
        }
    }
}
