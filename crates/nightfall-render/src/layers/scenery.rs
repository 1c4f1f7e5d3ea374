//! Mountain silhouettes and the ground plane.

use nightfall_core::Viewport;

use crate::color::{GROUND_COLOR, MOUNTAIN_COLORS};
use crate::layers::Layer;
use crate::raster::Raster;

/// Height of the soft glow above the ground line (px).
const GROUND_GLOW_PX: f32 = 40.0;
/// Opacity of the ground glow right at the ground line.
const GROUND_GLOW_ALPHA: f32 = 0.6;

/// Build the static scenery layer: three mountain layers, then the ground
/// with its glow spilling over whatever is behind it.
pub fn build(viewport: &Viewport, width: usize, height: usize) -> Layer {
    let mut layer = Layer::new(width, height);
    let mountains = viewport.mountain_layers();
    let ground_top = viewport.ground_top_y();

    for y in 0..height {
        for x in 0..width {
            let (px, py) = Raster::sample_center(x, y);

            let mut sample = mountains
                .iter()
                .zip(MOUNTAIN_COLORS)
                .filter(|(mountain, _)| mountain.contains(px, py))
                .map(|(_, color)| (color, 1.0))
                .last()
                .unwrap_or((GROUND_COLOR, 0.0));

            if py >= ground_top {
                sample = (GROUND_COLOR, 1.0);
            } else if ground_top - py < GROUND_GLOW_PX {
                let glow = GROUND_GLOW_ALPHA * (1.0 - (ground_top - py) / GROUND_GLOW_PX);
                sample = if sample.1 > 0.0 {
                    (sample.0.blend(GROUND_COLOR, glow), sample.1)
                } else {
                    (GROUND_COLOR, glow)
                };
            }

            layer.set(x, y, sample.0, sample.1);
        }
    }

    layer
}
