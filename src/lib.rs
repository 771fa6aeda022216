//! Shape-authoring engine for the centroid calculator.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! ordered list of line segments the user has drawn, decomposes rectangles
//! into edges, answers whether the figure is closed, and computes its
//! centroid. The host JavaScript layer is responsible for the canvas, the
//! grid, pan/zoom and converting pointer positions into engine coordinates
//! before calling in.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`builder`] | [`builder::ShapeBuilder`], the stateful facade the host holds |
//! | [`bindings`] | `wasm-bindgen` exports wrapping the builder for JavaScript |
//! | [`store`] | Ordered segment storage and first-match deletion |
//! | [`rect`] | Rectangle decomposition into four winding-ordered edges |
//! | [`closure`] | Closed-loop inference over the segment sequence |
//! | [`centroid`] | Vertex walk, signed area and centroid with mean fallback |
//! | [`intersect`] | Segment/segment intersection classification |
//! | [`geom`] | `Point` and `Segment` value types with tolerance comparisons |
//! | [`config`] | Builder configuration (epsilon, closure mode) |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants |

pub mod bindings;
pub mod builder;
pub mod centroid;
pub mod closure;
pub mod config;
pub mod consts;
pub mod error;
pub mod geom;
pub mod intersect;
pub mod rect;
pub mod store;

pub use builder::ShapeBuilder;
pub use config::{BuilderConfig, ClosureMode};
pub use error::{ConfigError, ShapeError};
pub use geom::{Point, Segment};
pub use intersect::{Intersection, segment_intersection};
