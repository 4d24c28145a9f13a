//! Caller-held debug trace over the most recent conversion result.
//!
//! Replaces module-level mutable trace state with an explicit value:
//! each snapshot owns its contours and its cursor, so concurrent
//! conversions and tests cannot interfere with one another.

use crate::geom::Contour;

/// A replayable snapshot of the contour set a conversion drew from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceSnapshot {
    contours: Vec<Contour>,
    position: usize,
}

impl TraceSnapshot {
    /// Snapshot a contour set with the cursor at the start.
    #[must_use]
    pub const fn new(contours: Vec<Contour>) -> Self {
        Self {
            contours,
            position: 0,
        }
    }

    /// All contours in the snapshot.
    #[must_use]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Current cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of contours not yet visited.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.contours.len() - self.position
    }

    /// Advance the cursor and return the next contour, if any.
    pub fn next_contour(&mut self) -> Option<&Contour> {
        let contour = self.contours.get(self.position)?;
        self.position += 1;
        Some(contour)
    }

    /// Rewind the cursor to the start.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}
