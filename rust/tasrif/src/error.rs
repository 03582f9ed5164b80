//! Error types for the conjugation core.

use thiserror::Error;

/// Errors raised while building roots and morpheme tables.
///
/// Conjugation itself never fails: a combination without a surface form is
/// reported as [`crate::Inflection::Unattested`], and unknown person labels
/// fall back to the table defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TasrifError {
    /// The root source did not supply exactly five characters.
    #[error("root '{root}' must have exactly 5 characters, found {length}")]
    InvalidRoot { root: String, length: usize },

    /// A table omits one of the keys every conjugation may ask for.
    #[error("{table} table has no entry for {key}")]
    MissingTableEntry { table: String, key: String },

    /// An integer code does not name any value of a grammatical feature.
    #[error("unknown {feature} code {code}")]
    UnknownCode { feature: &'static str, code: u8 },

    /// A desinence context that is not exactly as long as the stem tails
    /// it is compared against, so it could never be selected.
    #[error("desinence context '{context}' must have {expected} segments, found {length}")]
    ContextLength {
        context: String,
        expected: usize,
        length: usize,
    },

    /// The past tense never takes a final desinence.
    #[error("the past tense cannot carry a final desinence")]
    PastDesinence,
}
