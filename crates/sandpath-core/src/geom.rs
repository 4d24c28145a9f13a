//! Geometric primitives shared across the conversion pipeline.
//!
//! All coordinates are pixel-space `f64` values as produced by an
//! external boundary tracer. Polar output uses the sand table's native
//! theta-rho convention: a radius normalized to [0, 1000] and a
//! continuous angle in radians that may exceed a full revolution.

use serde::{Deserialize, Serialize};

/// Tolerance for treating two endpoints as coincident when deciding
/// whether a contour is closed.
pub const CLOSE_EPS: f64 = 1e-6;

/// A 2D point in pixel coordinates (Y grows downward, image convention).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from the left edge).
    pub x: f64,
    /// Vertical position (pixels from the top edge).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// An ordered polyline representing one continuous traced boundary.
///
/// Invariant: no two consecutive points are identical. Constructors go
/// through [`Contour::new`], which enforces this by dropping
/// consecutive duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contour(Vec<Point>);

impl Contour {
    /// Create a contour, dropping consecutive duplicate points.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        let mut contour = Self(points);
        contour.dedup_consecutive();
        contour
    }

    /// Create a contour from points already known to be free of
    /// consecutive duplicates.
    #[must_use]
    pub const fn from_clean(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the contour, returning the underlying points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// Returns `true` if the contour has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points in the contour.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.0.first().copied()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.0.last().copied()
    }

    /// A contour is closed when its first and last point coincide
    /// within [`CLOSE_EPS`].
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) if self.0.len() > 2 => a.distance(b) <= CLOSE_EPS,
            _ => false,
        }
    }

    /// Reverses traversal direction in place.
    pub fn reverse(&mut self) {
        self.0.reverse();
    }

    /// Arithmetic mean of the contour's points.
    ///
    /// For closed contours the duplicated closing point is excluded so
    /// it does not bias the result.
    #[must_use]
    pub fn centroid(&self) -> Point {
        let pts: &[Point] = if self.is_closed() {
            &self.0[..self.0.len() - 1]
        } else {
            &self.0
        };
        if pts.is_empty() {
            return Point::new(0.0, 0.0);
        }
        let n = pts.len() as f64;
        let (sx, sy) = pts
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    /// Axis-aligned bounding box, or `None` for an empty contour.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::of_points(&self.0)
    }

    /// Remove consecutive duplicate points (exact equality).
    pub fn dedup_consecutive(&mut self) {
        self.0.dedup_by(|a, b| a == b);
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    /// Bounding box of a point set, or `None` when empty.
    #[must_use]
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut aabb = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &points[1..] {
            aabb.min_x = aabb.min_x.min(p.x);
            aabb.min_y = aabb.min_y.min(p.y);
            aabb.max_x = aabb.max_x.max(p.x);
            aabb.max_y = aabb.max_y.max(p.y);
        }
        Some(aabb)
    }

    /// Box area. Degenerate boxes (a point or a line) have zero area.
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.max_x - self.min_x) * (self.max_y - self.min_y)
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Area of the intersection with another box, zero when disjoint.
    #[must_use]
    pub fn intersection_area(&self, other: &Self) -> f64 {
        let w = (self.max_x.min(other.max_x) - self.min_x.max(other.min_x)).max(0.0);
        let h = (self.max_y.min(other.max_y) - self.min_y.max(other.min_y)).max(0.0);
        w * h
    }

    /// Intersection-over-union with another box.
    ///
    /// Returns 0.0 when the union has zero area (two coincident
    /// degenerate boxes would otherwise divide by zero).
    #[must_use]
    pub fn iou(&self, other: &Self) -> f64 {
        let inter = self.intersection_area(other);
        let union = self.area() + other.area() - inter;
        if union <= 0.0 {
            0.0
        } else {
            inter / union
        }
    }
}

/// A point in the sand table's native coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    /// Radius normalized to [0, 1000].
    pub r: f64,
    /// Continuous angle in radians. May exceed ±2π so that
    /// multi-revolution paths do not snap back at a wrap boundary.
    pub theta: f64,
}

impl PolarPoint {
    /// Create a new polar point.
    #[must_use]
    pub const fn new(r: f64, theta: f64) -> Self {
        Self { r, theta }
    }

    /// Angle expressed in tenths of a degree (unwrapped).
    #[must_use]
    pub fn theta_tenths(&self) -> f64 {
        self.theta.to_degrees() * 10.0
    }
}
