//! Value types: points and undirected segments in engine space.
//!
//! Engine space is unitless. The host converts pointer positions (CSS pixels,
//! pan offset, zoom) into this space before calling the engine.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// A point in engine space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point, rejecting non-finite components.
    ///
    /// `names` labels the x and y inputs in the returned error.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidCoordinate`] for the first NaN or infinite component.
    pub fn checked(
        x: f64,
        y: f64,
        names: (&'static str, &'static str),
    ) -> Result<Self, ShapeError> {
        Ok(Self { x: finite(names.0, x)?, y: finite(names.1, y)? })
    }

    /// Whether both coordinates are within `eps` of `other`'s.
    #[must_use]
    pub fn approx_eq(self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// `[x, y]`, the shape used on the JS boundary.
    #[must_use]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// 2D cross product of the vectors from the origin to `self` and `other`.
    #[must_use]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - other.x * self.y
    }

    #[must_use]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// `self + t * v`.
    #[must_use]
    pub fn offset(self, v: Point, t: f64) -> Point {
        Point::new(self.x + v.x * t, self.y + v.y * t)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// A line segment between two points.
///
/// `a` is the start and `b` the end as supplied by the caller. Orientation is
/// kept for snapshots, closure and the centroid walk, but matching for
/// deletion ignores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Build a segment from raw coordinates, rejecting any non-finite input.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidCoordinate`] naming the first bad input.
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self, ShapeError> {
        let a = Point::checked(x0, y0, ("x0", "y0"))?;
        let b = Point::checked(x1, y1, ("x1", "y1"))?;
        Ok(Self { a, b })
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.a
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.b
    }

    /// Whether `self` joins the same two points as `other`, in either orientation.
    #[must_use]
    pub fn matches(&self, other: &Segment, eps: f64) -> bool {
        let forward = self.a.approx_eq(other.a, eps) && self.b.approx_eq(other.b, eps);
        let reverse = self.a.approx_eq(other.b, eps) && self.b.approx_eq(other.a, eps);
        forward || reverse
    }

    /// `[[x0, y0], [x1, y1]]`, the snapshot shape returned to the host.
    #[must_use]
    pub fn to_array(&self) -> [[f64; 2]; 2] {
        [self.a.to_array(), self.b.to_array()]
    }

    /// Vector from start to end.
    #[must_use]
    pub fn direction(&self) -> Point {
        self.b - self.a
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ShapeError::InvalidCoordinate { name, value })
    }
}
