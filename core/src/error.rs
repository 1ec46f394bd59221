//! Error taxonomy for pattern compilation and model loading.
//!
//! All errors surface synchronously from compile/load/apply calls. A
//! recognize call against an applied model never fails; a non-match is an
//! empty result, not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntentError {
    /// Unbalanced braces/brackets/parens, `|` outside a group, an empty
    /// alternative, or an unterminated slot name.
    #[error("malformed pattern `{phrase}`: {reason}")]
    MalformedPattern { phrase: String, reason: String },

    /// Malformed model JSON or an entity declaration with an unknown type.
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// A prebuilt integer entity was declared under a locale without
    /// numeral tables.
    #[error("locale `{0}` has no numeral tables")]
    InvalidLocale(String),
}

impl IntentError {
    pub(crate) fn malformed(phrase: &str, reason: impl Into<String>) -> Self {
        IntentError::MalformedPattern {
            phrase: phrase.to_string(),
            reason: reason.into(),
        }
    }
}
