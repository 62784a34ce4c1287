use thiserror::Error;

use crate::phonotactics::Violation;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unrecognized attribute '{0}'")]
    UnrecognizedAttribute(String),
    #[error("'{word}' conflicts with '{previous}'")]
    ConflictingAttribute {
        word: String,
        previous: &'static str,
    },
    #[error("unrecognized phoneme '{0}'")]
    UnknownPhoneme(String),
    #[error("no sound is sonorous enough to form a nucleus")]
    NoNucleusFound,
    #[error("more than one nucleus found; the sequence spans several syllables")]
    MultipleNucleus,
    #[error("a glide cannot be the nucleus of a syllable")]
    GlideCannotBeNucleus,
    #[error("phonotactic violation at position {position}: {reason}")]
    PhonotacticViolation {
        position: usize,
        #[source]
        reason: Violation,
    },
    #[error("invalid syllable pattern: {0}")]
    InvalidPattern(String),
    #[error("/{symbol}/ is not a {expected}")]
    InventoryMismatch {
        symbol: String,
        expected: &'static str,
    },
}
