//! libnumerals
//!
//! Locale numeral tables and spelled-number parsing for the intent
//! matching core. A `PrebuiltInteger` entity slot hands a span of
//! utterance tokens to [`parse_integer`], which either produces the
//! canonical signed decimal string or rejects the span.
//!
//! Supplied locale families: English, Spanish, French, Chinese, Japanese.
//! Detection consults only the primary language subtag; an unsupported
//! family is a hard `None` rather than a silent fallback to English.
//!
//! Public API:
//! - `LocaleFamily` - supported table families and tag detection
//! - `parse_integer` - span of tokens -> canonical decimal string

pub mod cjk;
pub mod en;
pub mod es;
pub mod fr;
pub mod latin;

pub use latin::WordClass;

/// Numeral table families with supplied locale data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleFamily {
    En,
    Es,
    Fr,
    Zh,
    Ja,
}

impl LocaleFamily {
    /// Detect the family from a primary language subtag ("en", "zh", ...).
    pub fn detect(lang: &str) -> Option<Self> {
        match lang.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            "fr" => Some(Self::Fr),
            "zh" => Some(Self::Zh),
            "ja" => Some(Self::Ja),
            _ => None,
        }
    }
}

/// Parse a span of utterance tokens as a locale integer.
///
/// Latin locales are parsed token-wise; CJK locales concatenate the span
/// (their tokens are single codepoints) and run the Han positional parse.
/// Returns the canonical decimal string, or `None` when any token in the
/// span is not part of a number.
pub fn parse_integer(tokens: &[&str], family: LocaleFamily) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    match family {
        LocaleFamily::En => latin::parse(tokens, &en::TABLE),
        LocaleFamily::Es => latin::parse(tokens, &es::TABLE),
        LocaleFamily::Fr => latin::parse(tokens, &fr::TABLE),
        LocaleFamily::Zh => cjk::parse_zh(&tokens.concat()),
        LocaleFamily::Ja => cjk::parse_ja(&tokens.concat()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_families() {
        assert_eq!(LocaleFamily::detect("en"), Some(LocaleFamily::En));
        assert_eq!(LocaleFamily::detect("ZH"), Some(LocaleFamily::Zh));
        assert_eq!(LocaleFamily::detect("de"), None);
    }

    #[test]
    fn dispatches_per_family() {
        assert_eq!(
            parse_integer(&["one", "hundred", "and", "thirty", "eight"], LocaleFamily::En)
                .as_deref(),
            Some("138")
        );
        assert_eq!(
            parse_integer(&["一", "百", "三", "十", "八"], LocaleFamily::Zh).as_deref(),
            Some("138")
        );
        assert_eq!(parse_integer(&[], LocaleFamily::En), None);
    }
}
