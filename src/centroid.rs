//! Centroid of the drawn figure.
//!
//! The vertex walk is the literal concatenation of every segment's start and
//! end point in insertion order. It is not deduplicated and not reordered
//! topologically, so a closed chain contributes each shared corner twice.
//! Repeated consecutive points add nothing to the shoelace sums, so a properly
//! chained polygon yields its usual area centroid.
//!
//! When the walk encloses no area (a lone segment, an open collinear
//! polyline, a degenerate rectangle) the area formula divides by zero, so the
//! centroid falls back to the plain mean of the walk's points. The same
//! fallback applies when the shoelace sums overflow, so finite input always
//! yields a finite centroid.

#[cfg(test)]
#[path = "centroid_test.rs"]
mod centroid_test;

use crate::consts::MIN_CENTROID_VERTICES;
use crate::geom::{Point, Segment};

/// Start and end of each segment, in order.
#[must_use]
pub fn vertex_walk(segments: &[Segment]) -> Vec<Point> {
    segments.iter().flat_map(|s| [s.start(), s.end()]).collect()
}

/// Shoelace signed area of `vertices`, closing the last point back to the first.
///
/// Positive for counter-clockwise walks in a y-up frame.
#[must_use]
pub fn signed_area(vertices: &[Point]) -> f64 {
    0.5 * wrapped_pairs(vertices).map(|(p, q)| p.cross(q)).sum::<f64>()
}

/// Centroid of the walk over `segments`.
///
/// Returns `None` when the walk has fewer than two points. Uses the
/// area-weighted polygon centroid when the area is finite with `|area| > eps`
/// and the result is finite, otherwise the mean of all walk points.
#[must_use]
pub fn centroid(segments: &[Segment], eps: f64) -> Option<Point> {
    let vertices = vertex_walk(segments);
    if vertices.len() < MIN_CENTROID_VERTICES {
        return None;
    }

    let area = signed_area(&vertices);
    if area.is_finite() && area.abs() > eps {
        let c = area_centroid(&vertices, area);
        if c.x.is_finite() && c.y.is_finite() {
            return Some(c);
        }
    }
    Some(mean(&vertices))
}

fn area_centroid(vertices: &[Point], area: f64) -> Point {
    let (sx, sy) = wrapped_pairs(vertices).fold((0.0, 0.0), |(sx, sy), (p, q)| {
        let cross = p.cross(q);
        (sx + (p.x + q.x) * cross, sy + (p.y + q.y) * cross)
    });
    let scale = 6.0 * area;
    Point::new(sx / scale, sy / scale)
}

/// Running mean: each step is a convex combination of finite values, so it
/// stays finite where a plain sum would overflow.
#[allow(clippy::cast_precision_loss)]
fn mean(vertices: &[Point]) -> Point {
    vertices.iter().enumerate().fold(Point::new(0.0, 0.0), |m, (i, p)| {
        let k = (i + 1) as f64;
        Point::new(m.x + (p.x / k - m.x / k), m.y + (p.y / k - m.y / k))
    })
}

/// `(v[i], v[i + 1])` for every i, with the last point paired back to the first.
fn wrapped_pairs(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(p, q)| (*p, *q))
}
