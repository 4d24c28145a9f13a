//! Cartesian-to-polar mapping with continuous angle unwrapping.
//!
//! The table wants a radius in [0, 1000] and a continuous angle. The
//! point sequence is centered on its bounding-box midpoint (not the
//! centroid, which would drift with point density), the radius is
//! normalized against the largest observed radius, and the angle is
//! unwrapped so consecutive samples never differ by more than π. Naive
//! wrapping would occasionally send the arm on a spurious full
//! revolution at the ±π boundary.

use std::f64::consts::PI;

use sandpath_core::{Aabb, Point, PolarPoint};

/// Radius of the table's normalized coordinate system.
pub const RADIUS_SCALE: f64 = 1000.0;

/// Map an ordered Cartesian sequence to continuous polar coordinates.
///
/// Returns an empty vector for empty input.
#[must_use = "returns the polar point sequence"]
pub fn map_to_polar(points: &[Point]) -> Vec<PolarPoint> {
    let Some(aabb) = Aabb::of_points(points) else {
        return Vec::new();
    };
    let center = aabb.center();

    // First pass: raw radii and angles relative to the center.
    // atan2 is negated because image-space Y grows downward.
    let raw: Vec<(f64, f64)> = points
        .iter()
        .map(|p| {
            let x = p.x - center.x;
            let y = p.y - center.y;
            (x.hypot(y), -y.atan2(x))
        })
        .collect();

    let max_r = raw.iter().map(|&(r, _)| r).fold(0.0_f64, f64::max);
    let scale = if max_r > 0.0 { RADIUS_SCALE / max_r } else { 0.0 };

    // Second pass: normalize radii and unwrap angles cumulatively.
    let mut out = Vec::with_capacity(raw.len());
    let mut offset = 0.0;
    let mut prev_theta = 0.0;

    for (i, &(r, theta_raw)) in raw.iter().enumerate() {
        let mut theta = theta_raw + offset;
        if i > 0 {
            while theta - prev_theta > PI {
                theta -= 2.0 * PI;
                offset -= 2.0 * PI;
            }
            while theta - prev_theta < -PI {
                theta += 2.0 * PI;
                offset += 2.0 * PI;
            }
        }
        prev_theta = theta;
        out.push(PolarPoint::new(r * scale, theta));
    }

    out
}
