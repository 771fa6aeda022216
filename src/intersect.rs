//! Segment/segment intersection.
//!
//! The builder never splits or merges segments on insert. Hosts that want to
//! show where two drawn lines cross (or warn that they overlap) ask here.

#[cfg(test)]
#[path = "intersect_test.rs"]
mod intersect_test;

use serde::Serialize;

use crate::geom::{Point, Segment};

/// How two segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Intersection {
    /// The segments do not touch.
    None,
    /// The segments meet in exactly one point.
    Point(Point),
    /// The segments are collinear and share a stretch of positive length.
    Overlap,
}

/// Classify how `s1` and `s2` meet, treating values within `eps` as equal.
///
/// Parallel tests compare the sine of the angle between the segments with
/// `eps`; collinearity compares the distance from `s2` to the line through `s1`.
#[must_use]
pub fn segment_intersection(s1: &Segment, s2: &Segment, eps: f64) -> Intersection {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let len1_sq = d1.dot(d1);
    let len2_sq = d2.dot(d2);
    let eps_sq = eps * eps;

    // Zero-length segments behave as points.
    if len1_sq <= eps_sq && len2_sq <= eps_sq {
        return if s1.start().approx_eq(s2.start(), eps) {
            Intersection::Point(s1.start())
        } else {
            Intersection::None
        };
    }
    if len1_sq <= eps_sq {
        return point_hit(s1.start(), s2, eps);
    }
    if len2_sq <= eps_sq {
        return point_hit(s2.start(), s1, eps);
    }

    let r = s2.start() - s1.start();
    let cross = d1.cross(d2);

    if cross.abs() <= eps * (len1_sq * len2_sq).sqrt() {
        if r.cross(d1).abs() / len1_sq.sqrt() > eps {
            return Intersection::None;
        }
        return collinear_overlap(s1, s2, eps);
    }

    let t = r.cross(d2) / cross;
    let u = r.cross(d1) / cross;
    if in_unit_range(t, eps) && in_unit_range(u, eps) {
        Intersection::Point(s1.start().offset(d1, t.clamp(0.0, 1.0)))
    } else {
        Intersection::None
    }
}

/// Overlap of two collinear, non-degenerate segments, projected onto `s1`.
fn collinear_overlap(s1: &Segment, s2: &Segment, eps: f64) -> Intersection {
    let d1 = s1.direction();
    let len1_sq = d1.dot(d1);
    let t_start = (s2.start() - s1.start()).dot(d1) / len1_sq;
    let t_end = (s2.end() - s1.start()).dot(d1) / len1_sq;
    let (t_min, t_max) = if t_start <= t_end { (t_start, t_end) } else { (t_end, t_start) };

    let lo = t_min.max(0.0);
    let hi = t_max.min(1.0);
    let tol = eps / len1_sq.sqrt();

    if lo > hi + tol {
        Intersection::None
    } else if hi - lo <= tol {
        Intersection::Point(s1.start().offset(d1, lo.min(1.0)))
    } else {
        Intersection::Overlap
    }
}

fn point_hit(p: Point, s: &Segment, eps: f64) -> Intersection {
    let d = s.direction();
    let len_sq = d.dot(d);
    let v = p - s.start();
    if v.cross(d).abs() / len_sq.sqrt() > eps {
        return Intersection::None;
    }
    let t = v.dot(d) / len_sq;
    if in_unit_range(t, eps / len_sq.sqrt()) {
        Intersection::Point(p)
    } else {
        Intersection::None
    }
}

fn in_unit_range(t: f64, eps: f64) -> bool {
    t >= -eps && t <= 1.0 + eps
}
