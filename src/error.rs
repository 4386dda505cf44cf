//! Error types for sightline operations.

use thiserror::Error;

/// Errors raised when a caller hands the library invalid input.
///
/// The per-frame visibility recompute never fails; these are reported by
/// constructors and setters only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SightError {
    /// A required argument was missing or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An obstacle has fewer than three vertices.
    #[error("obstacle {index} has {vertices} vertices, at least 3 are required")]
    DegenerateObstacle {
        /// Position of the obstacle in the supplied list.
        index: usize,
        /// Number of vertices it actually has.
        vertices: usize,
    },

    /// A coordinate or dimension is NaN or infinite.
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    /// Configuration values are out of range or could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
