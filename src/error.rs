use thiserror::Error;

/// Result type alias for operations that may fail with [`MaskShapeError`].
pub type MaskShapeResult<T> = std::result::Result<T, MaskShapeError>;

/// Error types that can occur while building a mask or extracting a shape.
///
/// Invalid masks are rejected up front, before any tracing happens; a mask
/// with no foreground is not an error and is reported through the returned
/// polygon and the diagnostic sink instead.
#[derive(Debug, Error)]
pub enum MaskShapeError {
    /// Mask has a zero-sized dimension.
    #[error("mask must have at least one row and one column, got {rows}x{cols}")]
    EmptyMask { rows: usize, cols: usize },
    /// Raw buffer length does not match the requested dimensions.
    #[error("invalid mask shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
