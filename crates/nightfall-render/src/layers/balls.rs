//! Falling balls with a glow halo.

use nightfall_sim::Ball;

use crate::color::Rgb;
use crate::raster::{Raster, SAMPLE_PX};

/// Width of the halo around each ball (px).
pub const GLOW_PX: f32 = 10.0;
/// Halo opacity at the ball's edge.
const GLOW_ALPHA: f32 = 0.55;

/// Paint one ball: halo first, then the anti-aliased body.
pub fn paint(raster: &mut Raster, ball: &Ball, fill: Rgb, glow: Rgb) {
    let circle = ball.circle;
    let reach = circle.r + GLOW_PX;

    let x0 = ((circle.x - reach) / SAMPLE_PX).floor().max(0.0) as usize;
    let y0 = ((circle.y - reach) / SAMPLE_PX).floor().max(0.0) as usize;
    let x1 = ((circle.x + reach) / SAMPLE_PX).ceil().max(0.0) as usize;
    let y1 = ((circle.y + reach) / SAMPLE_PX).ceil().max(0.0) as usize;

    for y in y0..y1.min(raster.height()) {
        for x in x0..x1.min(raster.width()) {
            let (px, py) = Raster::sample_center(x, y);
            let distance = circle.distance_sq(px, py).sqrt();
            if distance >= reach {
                continue;
            }

            if distance > circle.r {
                let falloff = 1.0 - (distance - circle.r) / GLOW_PX;
                raster.blend(x, y, glow, GLOW_ALPHA * falloff);
            }

            let coverage = ((circle.r - distance) / SAMPLE_PX + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                raster.blend(x, y, fill, coverage);
            }
        }
    }
}
