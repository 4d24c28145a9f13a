//! Tour planning: order contours and choose traversal direction.
//!
//! A greedy nearest-neighbor tour over an endpoint distance matrix.
//! The distance between two contours is the minimum over the four
//! endpoint pairings (start–start, start–end, end–start, end–end).
//! No improvement pass (2-opt or similar) runs afterwards — the greedy
//! heuristic's ordering is the contract.

use sandpath_core::{Contour, Point};
use tracing::debug;

use crate::normalize::{rotate_loop_start, rotate_loop_to_centroid};

/// Order contours with a greedy nearest-neighbor tour starting at
/// contour 0, then orient each contour for the shortest entry:
/// open contours are reversed when their far end is nearer the
/// previous exit, closed contours are re-anchored to start at the
/// vertex nearest the previous exit (the centroid for the first).
/// When `force_loop` is set, open contours are closed (first point
/// appended) and re-anchored like native loops.
#[must_use = "returns the ordered, oriented contours"]
pub fn plan_tour(contours: &[Contour], force_loop: bool) -> Vec<Contour> {
    let candidates: Vec<&Contour> = contours.iter().filter(|c| !c.is_empty()).collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let order = greedy_order(&candidates);
    debug!(contours = order.len(), "tour planned");

    let mut result: Vec<Contour> = Vec::with_capacity(order.len());
    let mut prev_exit: Option<Point> = None;

    for idx in order {
        let contour = candidates[idx];
        let oriented = orient(contour, prev_exit, force_loop);
        prev_exit = oriented.last();
        result.push(oriented);
    }

    result
}

/// Greedy nearest-neighbor ordering over the endpoint distance matrix.
fn greedy_order(contours: &[&Contour]) -> Vec<usize> {
    let n = contours.len();
    let matrix = distance_matrix(contours);

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    let mut current = 0;
    visited[0] = true;
    order.push(0);

    for _ in 1..n {
        let mut best = None;
        let mut best_dist = f64::INFINITY;
        for (j, seen) in visited.iter().enumerate() {
            if *seen {
                continue;
            }
            let d = matrix[current][j];
            if d < best_dist {
                best_dist = d;
                best = Some(j);
            }
        }
        // At least one contour is unvisited on every pass.
        let Some(next) = best else { break };
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}

/// n×n matrix of minimum endpoint distances.
fn distance_matrix(contours: &[&Contour]) -> Vec<Vec<f64>> {
    let n = contours.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = endpoint_distance(contours[i], contours[j]);
            matrix[i][j] = d;
            matrix[j][i] = d;
        }
    }
    matrix
}

/// Minimum of the four endpoint pairings between two contours.
fn endpoint_distance(a: &Contour, b: &Contour) -> f64 {
    // Callers filter empty contours; fall back to the origin to stay
    // total anyway.
    let origin = Point::new(0.0, 0.0);
    let a_start = a.first().unwrap_or(origin);
    let a_end = a.last().unwrap_or(origin);
    let b_start = b.first().unwrap_or(origin);
    let b_end = b.last().unwrap_or(origin);

    a_start
        .distance(b_start)
        .min(a_start.distance(b_end))
        .min(a_end.distance(b_start))
        .min(a_end.distance(b_end))
}

/// Choose the traversal direction or loop anchor for one contour.
fn orient(contour: &Contour, prev_exit: Option<Point>, force_loop: bool) -> Contour {
    if contour.is_closed() {
        return match prev_exit {
            Some(exit) => rotate_loop_start(contour, exit),
            None => rotate_loop_to_centroid(contour),
        };
    }

    if force_loop && contour.len() >= 3 {
        let mut points = contour.points().to_vec();
        if let Some(first) = contour.first() {
            points.push(first);
        }
        let closed = Contour::new(points);
        return match prev_exit {
            Some(exit) => rotate_loop_start(&closed, exit),
            None => rotate_loop_to_centroid(&closed),
        };
    }

    let Some(exit) = prev_exit else {
        return contour.clone();
    };

    let origin = Point::new(0.0, 0.0);
    let start = contour.first().unwrap_or(origin);
    let end = contour.last().unwrap_or(origin);

    if exit.distance(end) < exit.distance(start) {
        let mut reversed = contour.clone();
        reversed.reverse();
        reversed
    } else {
        contour.clone()
    }
}
