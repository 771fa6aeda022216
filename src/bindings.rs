//! JavaScript bindings.
//!
//! [`WasmShapeBuilder`] is exported to JS as `ShapeBuilder`. It delegates
//! every call to the native [`ShapeBuilder`] and only converts values at the
//! boundary: snapshots and centroids go out through `serde-wasm-bindgen`, and
//! [`ShapeError`](crate::ShapeError)s become thrown `Error`s.
//!
//! The page holds one instance per canvas; there is no module-level state.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::builder::ShapeBuilder;
use crate::config::BuilderConfig;
use crate::consts::DEFAULT_EPSILON;
use crate::geom::Segment;
use crate::intersect::segment_intersection;

#[wasm_bindgen(js_name = ShapeBuilder)]
#[derive(Debug, Default)]
pub struct WasmShapeBuilder {
    core: ShapeBuilder,
}

#[wasm_bindgen(js_class = ShapeBuilder)]
impl WasmShapeBuilder {
    /// `ShapeBuilder.new()`: an empty builder with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a plain config object, e.g. `{ epsilon: 0.5, closure: "connected" }`.
    /// `undefined` or `null` selects the defaults.
    ///
    /// # Errors
    ///
    /// Throws if the object does not describe a valid config.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<WasmShapeBuilder, JsError> {
        let config: BuilderConfig = if config.is_undefined() || config.is_null() {
            BuilderConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(js_error)?
        };
        Ok(Self { core: ShapeBuilder::with_config(config)? })
    }

    /// # Errors
    ///
    /// Throws if any coordinate is not finite.
    pub fn add_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<(), JsError> {
        self.core.add_line(x0, y0, x1, y1)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Throws if any coordinate is not finite.
    pub fn add_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<(), JsError> {
        self.core.add_rect(x0, y0, x1, y1)?;
        Ok(())
    }

    pub fn delete_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.core.delete_line(x0, y0, x1, y1);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Array of `[[x0, y0], [x1, y1]]` in insertion order.
    ///
    /// # Errors
    ///
    /// Throws if the snapshot cannot be converted to a JS value.
    pub fn get_lines(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.get_lines())
    }

    /// `[x, y]`, or `null` when there are no segments.
    ///
    /// # Errors
    ///
    /// Throws if the point cannot be converted to a JS value.
    pub fn calculate_centroid(&self) -> Result<JsValue, JsError> {
        match self.core.calculate_centroid() {
            Some(c) => to_js(&c.to_array()),
            None => Ok(JsValue::NULL),
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.core.is_closed()
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.core.is_connected()
    }

    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.core.signed_area()
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn length(&self) -> usize {
        self.core.len()
    }
}

impl WasmShapeBuilder {
    /// The wrapped native builder.
    #[must_use]
    pub fn core(&self) -> &ShapeBuilder {
        &self.core
    }
}

impl From<ShapeBuilder> for WasmShapeBuilder {
    fn from(core: ShapeBuilder) -> Self {
        Self { core }
    }
}

/// Classify how segment `(x0, y0)-(x1, y1)` meets `(x2, y2)-(x3, y3)`.
///
/// Returns `{ kind: "none" }`, `{ kind: "point", x, y }` or `{ kind: "overlap" }`.
///
/// # Errors
///
/// Throws if any coordinate is not finite.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn get_intersection(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
) -> Result<JsValue, JsError> {
    let s1 = Segment::from_coords(x0, y0, x1, y1)?;
    let s2 = Segment::from_coords(x2, y2, x3, y3)?;
    let hit = segment_intersection(&s1, &s2, DEFAULT_EPSILON);
    to_js(&hit)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(js_error)
}

#[allow(clippy::needless_pass_by_value)]
fn js_error(e: serde_wasm_bindgen::Error) -> JsError {
    JsError::new(&e.to_string())
}

/// Route `log` output to the browser console and install the panic hook.
///
/// # Errors
///
/// Throws if a logger was already installed.
#[cfg(feature = "browser")]
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() -> Result<(), JsError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug)?;
    Ok(())
}
