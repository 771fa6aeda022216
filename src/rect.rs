//! Rectangle decomposition.
//!
//! A rectangle given by two opposite corners becomes four ordinary segments,
//! walked A → B → C → D → A where A = (x0, y0), B = (x1, y0), C = (x1, y1)
//! and D = (x0, y1). Because the last edge ends where the first begins, a
//! rectangle added to an empty builder is closed straight away.

#[cfg(test)]
#[path = "rect_test.rs"]
mod rect_test;

use crate::consts::RECT_EDGE_COUNT;
use crate::error::ShapeError;
use crate::geom::{Point, Segment};

/// The four corners of the rectangle spanned by `(x0, y0)` and `(x1, y1)`,
/// in winding order A, B, C, D.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidCoordinate`] if any input is not finite.
pub fn corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<[Point; RECT_EDGE_COUNT], ShapeError> {
    let a = Point::checked(x0, y0, ("x0", "y0"))?;
    let c = Point::checked(x1, y1, ("x1", "y1"))?;
    Ok([a, Point::new(c.x, a.y), c, Point::new(a.x, c.y)])
}

/// Edges A-B, B-C, C-D, D-A of the rectangle spanned by the two corners.
///
/// Degenerate rectangles (`x0 == x1` or `y0 == y1`) still yield four edges,
/// some of them zero-length.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidCoordinate`] if any input is not finite. No
/// edges are produced in that case.
pub fn edges(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<[Segment; RECT_EDGE_COUNT], ShapeError> {
    let [a, b, c, d] = corners(x0, y0, x1, y1)?;
    Ok([Segment::new(a, b), Segment::new(b, c), Segment::new(c, d), Segment::new(d, a)])
}
