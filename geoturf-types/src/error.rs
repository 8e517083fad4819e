//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoJsonError {
    /// A position does not have exactly two components.
    #[error("coordinate must contain exactly 2 components, got {len}")]
    MalformedCoordinate {
        /// Number of components in the rejected position.
        len: usize,
    },
    /// Coordinates of a geometry violate the shape of its kind.
    #[error("invalid input geometry: {0}")]
    InvalidGeometry(String),
    /// `geometry.type` of a feature is not one of the supported kinds.
    #[error("unsupported geometry type: {0}")]
    UnsupportedKind(String),
    /// Feature `id` member is neither a string nor a number.
    #[error("feature id must be a string or a number")]
    InvalidId,
}
