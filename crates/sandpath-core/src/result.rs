//! The value returned by a conversion.

use serde::{Deserialize, Serialize};

use crate::geom::{Point, PolarPoint};

/// Everything a conversion produces.
///
/// `truncated` and `final_epsilon` must be surfaced to end users:
/// silent truncation changes drawing fidelity, and the achieved
/// tolerance tells the user how aggressively their image was reduced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConversionResult {
    /// The final ordered Cartesian point sequence, connectors included.
    pub ordered_points: Vec<Point>,
    /// The same sequence in continuous polar coordinates.
    pub polar_points: Vec<PolarPoint>,
    /// The serialized output in the requested format.
    pub encoded_text: String,
    /// True when the point budget forced a hard truncation.
    pub truncated: bool,
    /// The Douglas-Peucker tolerance the adaptive loop settled on.
    pub final_epsilon: f64,
}

impl ConversionResult {
    /// An empty result, as returned for empty input.
    #[must_use]
    pub fn empty(final_epsilon: f64) -> Self {
        Self {
            final_epsilon,
            ..Self::default()
        }
    }
}
