/*
 * module: error
 */

use std::fmt;
use thiserror::Error;

// Where a state array came from, reported in every state-integrity error:
//   Option   => supplied through `Options` at construction
//   Argument => supplied to `set_state()` on a live generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Option,
    Argument,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Option => write!(f, "option"),
            Provenance::Argument => write!(f, "argument"),
        }
    }
}

// One variant per state array invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("`state` array has insufficient length. Expected at least: {expected}. Actual: {actual}.")]
    InsufficientLength { expected: usize, actual: usize },

    #[error("`state` array has an incompatible schema version. Expected: {expected}. Actual: {actual}.")]
    Version { expected: u32, actual: u32 },

    #[error("`state` array has an incompatible number of sections. Expected: {expected}. Actual: {actual}.")]
    SectionCount { expected: u32, actual: u32 },

    #[error("`state` array has an incompatible state length. Expected: {expected}. Actual: {actual}.")]
    StateLength { expected: u32, actual: u32 },

    #[error("`state` array has an incompatible section length. Expected: {expected}. Actual: {actual}.")]
    OtherLength { expected: u32, actual: u32 },

    #[error("`state` array length is incompatible with seed section length. Expected: {expected}. Actual: {actual}.")]
    SeedLength { expected: usize, actual: u32 },
}

#[derive(Debug, Error)]
pub enum Mt19937Error {
    #[error(
        "invalid option. `seed` option must be either a nonnegative integer less than or equal to the maximum \
         unsigned 32-bit integer or an array containing such integers. Option: `{0}`."
    )]
    InvalidSeed(String),

    #[error("invalid option. `seed` array must contain at least one element.")]
    EmptySeed,

    #[error("invalid {provenance}. {source}")]
    InvalidState { provenance: Provenance, source: StateError },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("invalid PRNG JSON: {0}")]
    InvalidJson(String),

    #[error("Entropy: {0}")]
    Entropy(#[from] rand::Error),
}

impl Mt19937Error {
    pub(crate) fn state(provenance: Provenance) -> impl FnOnce(StateError) -> Self {
        move |source| Mt19937Error::InvalidState { provenance, source }
    }
}
