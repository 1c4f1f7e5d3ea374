//! Terminal rendering for the nightfall scene.
//!
//! The scene is rasterized into square 8x8 px samples and shown two samples
//! per cell with upper-half block characters. Static layers (sky, mountains,
//! ground) are cached per terminal size; stars and balls are painted every
//! frame.

mod color;
mod layers;
mod raster;
mod state;

pub use color::{Rgb, hsl_to_rgb, palette_color};
pub use raster::{Raster, SAMPLE_PX};
pub use state::SceneRenderer;
