//! Pick a target color from a photo.
//!
//! The photo is decoded, scaled to fit a 600×400 preview and sampled at a
//! canvas coordinate, the same way the picker preview is drawn.

mod canvas;
mod error;

pub use canvas::{Canvas, MAX_CANVAS_HEIGHT, MAX_CANVAS_WIDTH, fit_dimensions, load_canvas};
pub use error::{PickError, Result};
