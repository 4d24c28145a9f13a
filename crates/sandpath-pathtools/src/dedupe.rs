//! Near-duplicate contour removal.
//!
//! Edge detectors commonly trace both sides of a stroke, producing two
//! contours a pixel or two apart. Comparing axis-aligned bounding boxes
//! by intersection-over-union catches these cheaply; the later contour
//! is discarded in favor of the first kept match. O(n²) over the
//! contour count, which stays in the tens for this converter.

use sandpath_core::{Aabb, Contour};
use tracing::debug;

/// Drop contours whose bounding box overlaps an earlier kept contour's
/// box with IoU above `threshold`.
#[must_use = "returns the deduplicated contours"]
pub fn dedupe_contours(contours: Vec<Contour>, threshold: f64) -> Vec<Contour> {
    let mut kept: Vec<Contour> = Vec::with_capacity(contours.len());
    let mut kept_boxes: Vec<Option<Aabb>> = Vec::with_capacity(contours.len());
    let mut dropped = 0usize;

    for contour in contours {
        let aabb = contour.bounding_box();
        let duplicate = match aabb {
            Some(ref b) => kept_boxes
                .iter()
                .flatten()
                .any(|kept_box| kept_box.iou(b) > threshold),
            None => false,
        };

        if duplicate {
            dropped += 1;
        } else {
            kept.push(contour);
            kept_boxes.push(aabb);
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = kept.len(), "removed near-duplicate contours");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandpath_core::Point;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Contour {
        Contour::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
            Point::new(x0, y0),
        ])
    }

    #[test]
    fn identical_boxes_deduped() {
        let result = dedupe_contours(vec![rect(0.0, 0.0, 10.0, 10.0), rect(0.0, 0.0, 10.0, 10.0)], 0.5);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn near_duplicate_deduped() {
        // Offset by one pixel out of ten: IoU ≈ 0.82, above threshold.
        let result = dedupe_contours(
            vec![rect(0.0, 0.0, 10.0, 10.0), rect(1.0, 0.0, 11.0, 10.0)],
            0.5,
        );
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn disjoint_contours_kept() {
        let result = dedupe_contours(
            vec![rect(0.0, 0.0, 10.0, 10.0), rect(50.0, 50.0, 60.0, 60.0)],
            0.5,
        );
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn earlier_contour_wins() {
        let first = rect(0.0, 0.0, 10.0, 10.0);
        let result = dedupe_contours(vec![first.clone(), rect(0.5, 0.0, 10.5, 10.0)], 0.5);
        assert_eq!(result, vec![first]);
    }

    #[test]
    fn duplicate_of_a_dropped_contour_is_still_checked_against_kept() {
        // Three stacked near-duplicates: only the first survives.
        let result = dedupe_contours(
            vec![
                rect(0.0, 0.0, 10.0, 10.0),
                rect(0.5, 0.0, 10.5, 10.0),
                rect(1.0, 0.0, 11.0, 10.0),
            ],
            0.5,
        );
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn empty_input() {
        assert!(dedupe_contours(Vec::new(), 0.5).is_empty());
    }
}
