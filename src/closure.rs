//! Closure inference over an ordered segment sequence.
//!
//! [`is_closed_endpoints`] only compares the first segment's start with the
//! last segment's end; gaps in the middle of the chain go unnoticed.
//! [`is_connected`] walks every consecutive pair as well.

#[cfg(test)]
#[path = "closure_test.rs"]
mod closure_test;

use crate::config::ClosureMode;
use crate::consts::MIN_CLOSED_SEGMENTS;
use crate::geom::Segment;

/// Dispatch on `mode`.
#[must_use]
pub fn is_closed(segments: &[Segment], mode: ClosureMode, eps: f64) -> bool {
    match mode {
        ClosureMode::Endpoints => is_closed_endpoints(segments, eps),
        ClosureMode::Connected => is_connected(segments, eps),
    }
}

/// At least three segments, and the first start equals the last end within `eps`.
#[must_use]
pub fn is_closed_endpoints(segments: &[Segment], eps: f64) -> bool {
    if segments.len() < MIN_CLOSED_SEGMENTS {
        return false;
    }
    match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => first.start().approx_eq(last.end(), eps),
        _ => false,
    }
}

/// [`is_closed_endpoints`], plus each segment starts where its predecessor ends.
#[must_use]
pub fn is_connected(segments: &[Segment], eps: f64) -> bool {
    is_closed_endpoints(segments, eps)
        && segments
            .windows(2)
            .all(|pair| pair[0].end().approx_eq(pair[1].start(), eps))
}
