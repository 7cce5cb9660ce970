//! Structural error taxonomy.
//!
//! Only malformed input is an error here. "The system has no unique
//! solution" and friends are expected outcomes and travel as enum variants
//! of the engine results instead.

use thiserror::Error;

/// Errors raised before any elimination runs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// The input grid is empty or its rows have unequal lengths.
    #[error("matrix must be rectangular and non-empty")]
    MalformedMatrix,

    /// Matrix/vector or vector/vector sizes do not line up.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}
