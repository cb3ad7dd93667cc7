use thiserror::Error;

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors from the geometry primitives.
///
/// An empty-after-cleaning geometry is recoverable by policy: extraction
/// stages drop the offending feature and log a count, while precondition
/// checks treat it as fatal.
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    #[error("geometry is empty or collapsed after cleaning ({context})")]
    Empty { context: String },

    #[error("line buffer width must be positive, got {distance}")]
    NonPositiveWidth { distance: f64 },
}

impl GeometryError {
    pub(crate) fn empty(context: impl Into<String>) -> Self {
        GeometryError::Empty {
            context: context.into(),
        }
    }
}
