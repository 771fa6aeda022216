//! Segment store: the ordered, in-memory list of segments making up a shape.
//!
//! Insertion order is meaningful. The closure check reads the first and last
//! entries, and the centroid walk consumes endpoints in this order. The store
//! never reorders, merges or deduplicates; duplicate and overlapping segments
//! are kept as given.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::geom::Segment;

/// Snapshot form of a single segment: `[[x0, y0], [x1, y1]]`.
pub type LineSnapshot = [[f64; 2]; 2];

/// Ordered store of segments.
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    segments: Vec<Segment>,
}

impl SegmentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { segments: Vec::new() }
    }

    /// Append a segment at the end.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Remove the first segment matching `target` in either orientation,
    /// returning it. Later segments keep their relative order.
    pub fn remove_first_matching(&mut self, target: &Segment, eps: f64) -> Option<Segment> {
        let index = self.segments.iter().position(|s| s.matches(target, eps))?;
        Some(self.segments.remove(index))
    }

    /// Remove every segment.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Owned copy of all segments in insertion order and orientation.
    ///
    /// The returned vector shares nothing with the store.
    #[must_use]
    pub fn snapshot(&self) -> Vec<LineSnapshot> {
        self.segments.iter().map(Segment::to_array).collect()
    }

    /// Borrowed view of the segments in insertion order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the store contains no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
