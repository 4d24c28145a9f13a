//! Conversion configuration and tuning parameters.
//!
//! Every numeric constant that shapes the converter's behavior lives
//! here as a named field with a documented default, so tuning and
//! regression testing never chase magic numbers through the pipeline.

use serde::{Deserialize, Serialize};

/// Which boundaries the external contour tracer should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RetrievalMode {
    /// Outer silhouette boundaries only.
    #[default]
    ExternalOnly,
    /// All boundaries, including interior holes.
    All,
}

/// Output text representation for the encoded polar path.
///
/// The encodings are bit-exact contracts: downstream firmware parses
/// them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Format 0: `{r,theta}` integer pairs, theta wrapped into
    /// [0, 3600) tenths of a degree, comma-joined.
    #[default]
    ThetaRho,
    /// Format 1: radius and wrapped theta each quantized to [0, 255],
    /// same bracketed pair layout.
    QuantizedBytes,
    /// Format 2: one `"<theta_radians> <radius_normalized>"` line per
    /// point, 5 decimal places, theta continuous (not wrapped) with a
    /// fixed −90° rotation. Long segments are subdivided first.
    ContinuousLines,
    /// Format 3: radius and wrapped theta quantized to 8 bits and
    /// rendered bit-by-bit as spaces and tabs.
    ///
    /// Whitespace-significant and easily corrupted by any editor or
    /// transport that trims trailing whitespace. Handle with care.
    WhitespaceBits,
}

impl OutputFormat {
    /// Numeric format selector used by callers and the CLI.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::ThetaRho => 0,
            Self::QuantizedBytes => 1,
            Self::ContinuousLines => 2,
            Self::WhitespaceBits => 3,
        }
    }

    /// Parse a numeric format selector.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::ThetaRho),
            1 => Some(Self::QuantizedBytes),
            2 => Some(Self::ContinuousLines),
            3 => Some(Self::WhitespaceBits),
            _ => None,
        }
    }
}

/// Tuning knobs for the conversion pipeline.
///
/// Defaults reproduce the converter's long-standing behavior; changing
/// them changes observable output, so regression tests pin several of
/// these values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// How many globally nearest nodes each graph node connects to
    /// with jump edges during path stitching.
    pub neighbor_fanout: usize,
    /// Bounding-box IoU above which a later contour is discarded as a
    /// near-duplicate of an earlier one.
    pub iou_threshold: f64,
    /// Hard cap on epsilon-adjustment iterations in the simplifier.
    /// Guarantees termination; hitting it triggers budget truncation.
    pub max_epsilon_iterations: u32,
    /// Epsilon increment when the point excess is small (≤ 20).
    pub epsilon_step_small: f64,
    /// Epsilon increment when the point excess is large (> 100).
    pub epsilon_step_large: f64,
    /// Upper bound of the interpolated epsilon increment.
    pub epsilon_step_max: f64,
    /// Multiplier on epsilon giving the segment-subdivision distance
    /// threshold for [`OutputFormat::ContinuousLines`].
    pub subdivision_factor: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            neighbor_fanout: 10,
            iou_threshold: 0.5,
            max_epsilon_iterations: 100,
            epsilon_step_small: 0.1,
            epsilon_step_large: 0.5,
            epsilon_step_max: 0.6,
            subdivision_factor: 5.0,
        }
    }
}

/// Parameters for one conversion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Initial Douglas-Peucker tolerance in pixels. Must be positive.
    pub epsilon: f64,
    /// Global point budget shared across all contours. Must be positive.
    pub max_points: usize,
    /// Which boundaries the external tracer reports.
    pub retrieval_mode: RetrievalMode,
    /// Treat every contour as a loop and re-anchor its starting vertex.
    pub is_loop: bool,
    /// Route transitions through already-drawn geometry via the stitch
    /// graph instead of jumping straight between contours.
    pub minimize_jumps: bool,
    /// Output text encoding.
    pub output_format: OutputFormat,
    /// Pipeline tuning knobs.
    pub tuning: Tuning,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.5,
            max_points: 300,
            retrieval_mode: RetrievalMode::default(),
            is_loop: false,
            minimize_jumps: true,
            output_format: OutputFormat::default(),
            tuning: Tuning::default(),
        }
    }
}
