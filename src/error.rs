use thiserror::Error;

/// Top-level error type for the minkos offset kernel.
#[derive(Debug, Error)]
pub enum MinkosError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

/// Caller-contract violations, reported before any output is produced.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("approximation error bound must be positive, got {0}")]
    ErrorBoundNotPositive(f64),

    #[error("offset radius must be positive")]
    RadiusNotPositive,

    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("zero-length polygon edge at index {0}")]
    ZeroLengthEdge(usize),

    #[error("polygon has zero area")]
    DegeneratePolygon,
}

/// Unrecoverable numeric faults.
///
/// The computation is deterministic, so a retry would reproduce the same
/// fault; it indicates either a violated caller invariant (a non-simple
/// polygon) or an internal defect.
#[derive(Debug, Error)]
pub enum ConsistencyError {
    #[error("tangent lines at consecutive offset points are parallel")]
    ParallelTangents,

    #[error("length refinement did not reach its error bound within {iterations} iterations")]
    SqrtNonConvergence { iterations: u32 },

    #[error("length approximation left the representable range")]
    NonFiniteApproximation,

    #[error("convolution cycle produced no curves")]
    EmptyCycle,
}

/// Convenience type alias for results using [`MinkosError`].
pub type Result<T> = std::result::Result<T, MinkosError>;
