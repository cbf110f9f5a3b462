//! Error types shared by fractions, term sequences and continued fractions

/// Errors raised by exact arithmetic
///
/// The enum is `Clone` so that a term sequence can replay the failure of its
/// producer to every reader that reaches the same position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The divisor of a division or reciprocal is exactly zero
    #[error("division by zero")]
    DivisionByZero,

    /// Attempt to remove or rewrite a term that was already produced
    #[error("cannot remove terms from a continued fraction expansion")]
    UnsupportedMutation,

    /// The bihomographic transducer consumed too many input terms without
    /// being able to emit an output term
    #[error("no term could be emitted after {ingestions} ingested terms")]
    NonTerminatingExpansion { ingestions: usize },

    /// A continued fraction was built from an empty list of terms
    #[error("at least one term is required")]
    EmptyExpansion,

    /// A term after the first one is not strictly positive
    #[error("term {index} must be positive")]
    NonCanonicalTerm { index: usize },
}

/// Result type for exact arithmetic
pub type Result<T> = std::result::Result<T, Error>;
