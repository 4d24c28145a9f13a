//! Input contract for the external boundary tracer.
//!
//! The converter never performs pixel-level image analysis. Callers
//! supply contours through [`ContourSource`], typically backed by an
//! edge-detection primitive running over a raster image.

use crate::config::RetrievalMode;
use crate::geom::Contour;

/// Produces the raw contours a conversion starts from.
pub trait ContourSource {
    /// Report traced boundaries for the requested mode.
    fn detect_contours(&self, mode: RetrievalMode) -> Vec<Contour>;
}

/// A [`ContourSource`] over pre-traced contour sets.
///
/// Used by the CLI (which reads contours from JSON) and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticContours {
    external: Vec<Contour>,
    all: Vec<Contour>,
}

impl StaticContours {
    /// Create a source with distinct external-only and all-boundary sets.
    #[must_use]
    pub const fn new(external: Vec<Contour>, all: Vec<Contour>) -> Self {
        Self { external, all }
    }

    /// Create a source that reports the same contours for both modes.
    #[must_use]
    pub fn uniform(contours: Vec<Contour>) -> Self {
        Self {
            external: contours.clone(),
            all: contours,
        }
    }
}

impl ContourSource for StaticContours {
    fn detect_contours(&self, mode: RetrievalMode) -> Vec<Contour> {
        match mode {
            RetrievalMode::ExternalOnly => self.external.clone(),
            RetrievalMode::All => self.all.clone(),
        }
    }
}
