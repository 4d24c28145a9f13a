//! Contour simplification under a global point budget.
//!
//! Each contour is reduced with the Ramer-Douglas-Peucker algorithm at
//! the current tolerance. If the total point count across all contours
//! still exceeds the budget, the tolerance is raised by a piecewise
//! rule and the pass repeats, up to a hard iteration cap. Hitting the
//! cap flattens everything into one contour truncated to exactly the
//! budget, with the truncation flag set for the caller.

use sandpath_core::{Contour, Point, Tuning};
use tracing::{debug, warn};

/// Outcome of the adaptive simplification loop.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyOutcome {
    /// Simplified contours, or a single flattened contour when truncated.
    pub contours: Vec<Contour>,
    /// The tolerance the loop settled on.
    pub final_epsilon: f64,
    /// True when the iteration cap forced a hard truncation.
    pub truncated: bool,
}

/// Simplify a single contour with Ramer-Douglas-Peucker.
///
/// Points within `epsilon` of the line between their neighbors are
/// removed. Contours with fewer than 3 points are returned unchanged.
#[must_use = "returns the simplified contour"]
pub fn simplify_contour(contour: &Contour, epsilon: f64) -> Contour {
    let points = contour.points();
    if points.len() < 3 {
        return contour.clone();
    }

    let mut kept = vec![false; points.len()];
    kept[0] = true;
    kept[points.len() - 1] = true;

    rdp_recurse(points, 0, points.len() - 1, epsilon, &mut kept);

    let simplified: Vec<Point> = points
        .iter()
        .zip(&kept)
        .filter(|&(_, k)| *k)
        .map(|(&p, _)| p)
        .collect();

    // A closed contour reduced to nothing but its duplicated endpoints
    // would violate the consecutive-duplicate invariant.
    Contour::new(simplified)
}

/// Simplify all contours under a shared point budget.
///
/// Raises epsilon between passes by a piecewise rule keyed on how far
/// the total point count overshoots `max_points`:
/// excess > 100 → large step; excess ≤ 20 → small step; otherwise the
/// step is interpolated linearly between the small step and
/// `epsilon_step_max` by `(excess − 20) / 80`.
#[must_use = "returns the simplified contours and the achieved epsilon"]
pub fn simplify_within_budget(
    contours: &[Contour],
    epsilon: f64,
    max_points: usize,
    tuning: &Tuning,
) -> SimplifyOutcome {
    let mut eps = epsilon;
    let mut simplified: Vec<Contour> = Vec::new();

    for iteration in 0..tuning.max_epsilon_iterations {
        simplified = contours
            .iter()
            .map(|c| simplify_contour(c, eps))
            .collect();

        let total: usize = simplified.iter().map(Contour::len).sum();
        if total <= max_points {
            debug!(
                iteration,
                final_epsilon = eps,
                total_points = total,
                "point budget met"
            );
            return SimplifyOutcome {
                contours: simplified,
                final_epsilon: eps,
                truncated: false,
            };
        }

        let excess = total - max_points;
        eps += epsilon_step(excess, tuning);
    }

    // Budget unreachable within the cap: flatten, collapse seams, cut.
    let mut flattened: Vec<Point> = Vec::new();
    for contour in &simplified {
        for &p in contour.points() {
            // Contours sharing endpoints would otherwise leave
            // duplicates at the seams.
            if flattened.last() != Some(&p) {
                flattened.push(p);
            }
        }
    }

    // Seam collapse can land the flattened sequence under the budget
    // on its own; only an actual cut counts as truncation.
    let truncated = flattened.len() > max_points;
    if truncated {
        warn!(
            final_epsilon = eps,
            max_points, "iteration cap reached, truncating to budget"
        );
        flattened.truncate(max_points);
    }

    SimplifyOutcome {
        contours: vec![Contour::from_clean(flattened)],
        final_epsilon: eps,
        truncated,
    }
}

/// Piecewise epsilon increment keyed on the point-count excess.
fn epsilon_step(excess: usize, tuning: &Tuning) -> f64 {
    if excess > 100 {
        tuning.epsilon_step_large
    } else if excess <= 20 {
        tuning.epsilon_step_small
    } else {
        let fraction = (excess - 20) as f64 / 80.0;
        tuning.epsilon_step_small
            + (tuning.epsilon_step_max - tuning.epsilon_step_small) * fraction
    }
}

/// Recursive step of Ramer-Douglas-Peucker.
///
/// Keeps the point between `start` and `end` farthest from the chord
/// when its distance exceeds the tolerance, then recurses into both
/// halves.
fn rdp_recurse(points: &[Point], start: usize, end: usize, epsilon: f64, kept: &mut [bool]) {
    if end <= start + 1 {
        return;
    }

    let mut max_dist = 0.0;
    let mut max_idx = start;

    for i in (start + 1)..end {
        let d = perpendicular_distance(points[i], points[start], points[end]);
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }

    if max_dist > epsilon {
        kept[max_idx] = true;
        rdp_recurse(points, start, max_idx, epsilon, kept);
        rdp_recurse(points, max_idx, end, epsilon, kept);
    }
}

/// Perpendicular distance from `p` to the line through `a` and `b`.
///
/// Falls back to point distance when `a` and `b` coincide — which they
/// do for every closed contour, whose chord is the duplicated closing
/// point.
fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length_sq = dx.mul_add(dx, dy * dy);

    if length_sq == 0.0 {
        return p.distance(a);
    }

    let cross = dx.mul_add(a.y - p.y, -(dy * (a.x - p.x)));
    cross.abs() / length_sq.sqrt()
}
