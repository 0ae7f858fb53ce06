//! Error types.
//!
//! Errors only come out of configuration and provider validation.
//! Once a `CardGenerator` exists, generating cards cannot fail.

use crate::cards::Rarity;

/// Errors raised while building a generator or its provider.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// The name pool has no entries to pick from.
    #[error("name pool is empty")]
    EmptyNamePool,

    /// Every rarity weight in the table is zero.
    #[error("rarity table has no positive weight")]
    ZeroWeights,

    /// A stat range has `min > max`.
    #[error("invalid {stat} range for {rarity}: {min}..={max}")]
    InvalidStatRange {
        rarity: Rarity,
        stat: &'static str,
        min: u32,
        max: u32,
    },

    /// Any other configuration problem.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type used throughout the crate.
pub type CardResult<T> = Result<T, CardError>;
