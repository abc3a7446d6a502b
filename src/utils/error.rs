use std::fmt::{self, Display, Formatter};

/// An error raised when a selection primitive rejects its input.
///
/// All validation happens at component entry; no component coerces or truncates malformed
/// input silently. The primitives are deterministic pure functions, so there is nothing to
/// retry: recovery is the caller's decision.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SelectionError {
    /// A parameter is outside of the supported range, e.g. zero divisions, a dimension
    /// below two or an empty input collection.
    InvalidParameter(String),
    /// Objective vectors disagree on their dimension within one call, or the reference
    /// point dimension does not match the candidate dimension.
    DimensionMismatch(String),
    /// The extreme point geometry defines no usable hyperplane and the range fallback is
    /// itself ill-defined.
    DegenerateGeometry(String),
}

/// A type alias for result type with `SelectionError`.
pub type SelectionResult<T> = Result<T, SelectionError>;

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidParameter(message) => write!(f, "invalid parameter: {message}"),
            SelectionError::DimensionMismatch(message) => write!(f, "dimension mismatch: {message}"),
            SelectionError::DegenerateGeometry(message) => write!(f, "degenerate geometry: {message}"),
        }
    }
}

impl std::error::Error for SelectionError {}
