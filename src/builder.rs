use crate::centroid;
use crate::closure;
use crate::config::BuilderConfig;
use crate::error::{ConfigError, ShapeError};
use crate::geom::{Point, Segment};
use crate::rect;
use crate::store::{LineSnapshot, SegmentStore};

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

/// The shape being authored: an ordered list of segments plus the tolerance
/// used to compare their coordinates.
///
/// Free of browser dependencies so it can be tested natively. The host owns
/// one instance per drawing surface; [`crate::bindings::WasmShapeBuilder`]
/// wraps it for JavaScript.
#[derive(Debug, Clone, Default)]
pub struct ShapeBuilder {
    store: SegmentStore,
    config: BuilderConfig,
}

impl ShapeBuilder {
    /// Create an empty builder with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEpsilon`] if the config does not validate.
    pub fn with_config(config: BuilderConfig) -> Result<Self, ConfigError> {
        Ok(Self { store: SegmentStore::new(), config: config.validate()? })
    }

    // --- Mutations ---

    /// Append the segment from `(x0, y0)` to `(x1, y1)`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidCoordinate`] if any input is not finite.
    /// The builder is unchanged in that case.
    pub fn add_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<(), ShapeError> {
        let segment = Segment::from_coords(x0, y0, x1, y1)
            .inspect_err(|e| log::debug!("add_line rejected: {e}"))?;
        self.push(segment);
        Ok(())
    }

    /// Append the four edges of the rectangle with opposite corners
    /// `(x0, y0)` and `(x1, y1)`, in winding order.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidCoordinate`] if any input is not finite.
    /// No edge is appended in that case.
    pub fn add_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<(), ShapeError> {
        let edges =
            rect::edges(x0, y0, x1, y1).inspect_err(|e| log::debug!("add_rect rejected: {e}"))?;
        for edge in edges {
            self.push(edge);
        }
        Ok(())
    }

    /// Remove the first segment joining `(x0, y0)` and `(x1, y1)` in either
    /// orientation. Returns whether a segment was removed; no match is a no-op.
    pub fn delete_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> bool {
        // Non-finite queries can never equal a stored segment.
        let Ok(target) = Segment::from_coords(x0, y0, x1, y1) else {
            return false;
        };
        let removed = self.store.remove_first_matching(&target, self.config.epsilon);
        log::debug!("delete_line ({x0}, {y0})-({x1}, {y1}): removed={}", removed.is_some());
        removed.is_some()
    }

    /// Remove every segment.
    pub fn clear(&mut self) {
        log::debug!("clear: dropping {} segments", self.store.len());
        self.store.clear();
    }

    fn push(&mut self, segment: Segment) {
        self.store.push(segment);
        log::trace!("segment added, count={}", self.store.len());
    }

    // --- Queries ---

    /// Owned snapshot of every segment as `[[x0, y0], [x1, y1]]`, in
    /// insertion order and orientation.
    #[must_use]
    pub fn get_lines(&self) -> Vec<LineSnapshot> {
        self.store.snapshot()
    }

    /// Whether the figure is closed under the configured closure mode.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        closure::is_closed(self.store.segments(), self.config.closure, self.config.epsilon)
    }

    /// Whether every segment chains end-to-start and the chain returns to its
    /// origin, regardless of the configured mode.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        closure::is_connected(self.store.segments(), self.config.epsilon)
    }

    /// Centroid of the figure, or `None` with no segments.
    #[must_use]
    pub fn calculate_centroid(&self) -> Option<Point> {
        let c = centroid::centroid(self.store.segments(), self.config.epsilon);
        log::trace!("centroid over {} segments: {c:?}", self.store.len());
        c
    }

    /// Shoelace signed area of the vertex walk.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        centroid::signed_area(&centroid::vertex_walk(self.store.segments()))
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        self.store.segments()
    }

    #[must_use]
    pub fn config(&self) -> BuilderConfig {
        self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
