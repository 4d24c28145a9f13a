//! Loop start normalization.
//!
//! A closed contour can be entered at any vertex. Rotating the point
//! sequence so traversal starts at the vertex nearest a reference
//! location (the previous contour's exit point while touring, the
//! centroid otherwise) trims wasted travel before the loop begins.

use sandpath_core::{Contour, Point};

/// Rotate a closed contour so traversal starts at the vertex nearest
/// `reference`, then re-close the loop.
///
/// Open contours and degenerate loops are returned unchanged. Closure
/// is preserved: a contour that enters closed leaves closed.
#[must_use = "returns the rotated contour"]
pub fn rotate_loop_start(contour: &Contour, reference: Point) -> Contour {
    if !contour.is_closed() || contour.len() < 4 {
        return contour.clone();
    }

    // Work on the open ring: drop the duplicated closing point.
    let ring = &contour.points()[..contour.len() - 1];

    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (i, p) in ring.iter().enumerate() {
        let d = p.distance_squared(reference);
        if d < best_dist {
            best_dist = d;
            best_idx = i;
        }
    }

    if best_idx == 0 {
        return contour.clone();
    }

    let mut rotated: Vec<Point> = Vec::with_capacity(ring.len() + 1);
    rotated.extend_from_slice(&ring[best_idx..]);
    rotated.extend_from_slice(&ring[..best_idx]);
    rotated.push(ring[best_idx]);

    // Rotation can surface duplicates that the closing point was hiding.
    Contour::new(rotated)
}

/// Rotate a closed contour to start at the vertex nearest its centroid.
///
/// Used when no previous exit point exists (the first contour of a
/// tour, or standalone loop mode).
#[must_use = "returns the rotated contour"]
pub fn rotate_loop_to_centroid(contour: &Contour) -> Contour {
    rotate_loop_start(contour, contour.centroid())
}
