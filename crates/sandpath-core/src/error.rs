//! Error handling for sandpath.
//!
//! Only configuration mistakes abort a conversion. Everything else the
//! pipeline can encounter — empty input, an unreachable point budget,
//! an unreachable stitch — degrades to a value the caller can inspect
//! (`truncated`, an empty connector, an empty result).

use thiserror::Error;

/// Fatal conversion errors.
///
/// Raised at the entry point before any pipeline stage runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The Douglas-Peucker tolerance must be positive.
    #[error("invalid epsilon {value}: tolerance must be positive")]
    InvalidEpsilon {
        /// The rejected tolerance value.
        value: f64,
    },

    /// The global point budget must be positive.
    #[error("invalid point budget {value}: max_points must be positive")]
    InvalidPointBudget {
        /// The rejected budget value.
        value: usize,
    },
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
