//! Error taxonomy for the GA engine (spec.md §7).

use thiserror::Error;

/// The four error kinds a GA run can surface at its public boundary.
///
/// `Interrupted` (spec.md §7) is deliberately absent: cancellation returns
/// the current best [`crate::solution::Solution`] without an error, the way
/// `GeneticAlgorithm::run_cancellable` already does in the teacher's corpus.
#[derive(Debug, Error)]
pub enum GaError {
    #[error("malformed formula: {0}")]
    MalformedFormula(String),

    #[error("configuration out of range: {0}")]
    ConfigOutOfRange(String),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error(transparent)]
    Builder(#[from] GeneticAlgorithmBuilderError),
}

/// Wraps the error produced by the `derive_builder`-generated builder,
/// translating field-level validation failures into [`GaError`] variants.
#[derive(Debug, Error)]
pub enum GeneticAlgorithmBuilderError {
    #[error("uninitialized field: {0}")]
    UninitializedField(&'static str),

    #[error("validation error: {0}")]
    ValidationError(String),
}

impl From<derive_builder::UninitializedFieldError> for GeneticAlgorithmBuilderError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        GeneticAlgorithmBuilderError::UninitializedField(e.field_name())
    }
}

impl From<String> for GeneticAlgorithmBuilderError {
    fn from(s: String) -> Self {
        GeneticAlgorithmBuilderError::ValidationError(s)
    }
}
