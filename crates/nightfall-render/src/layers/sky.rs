//! Vertical sky gradient.

use nightfall_core::Viewport;

use crate::color::{SKY_STOPS, gradient_at};
use crate::raster::Raster;

/// Fill the raster with the sky gradient, top of the viewport to its bottom.
pub fn paint(raster: &mut Raster, viewport: &Viewport) {
    let height = viewport.height.max(1.0);
    for y in 0..raster.height() {
        let (_, py) = Raster::sample_center(0, y);
        let color = gradient_at(&SKY_STOPS, py / height);
        for x in 0..raster.width() {
            raster.set(x, y, color);
        }
    }
}
