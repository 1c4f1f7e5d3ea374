//! Background stars.

use nightfall_sim::Star;

use crate::color::palette_color;
use crate::raster::{Raster, SAMPLE_PX};

/// Radius at which a star is drawn fully opaque.
const FULL_BRIGHTNESS_RADIUS: f32 = 1.5;
/// Opacity of the smallest stars.
const MIN_ALPHA: f32 = 0.35;
/// Reach of the glow around each star (px).
pub const STAR_GLOW_PX: f32 = 10.0;
/// Glow opacity next to the star, scaled by the star's own brightness.
const STAR_GLOW_ALPHA: f32 = 0.3;

/// Blend each star into the sample under its center, brighter for larger
/// stars, with a faint glow in its own tint on the samples around it.
pub fn paint(raster: &mut Raster, stars: &[Star]) {
    for star in stars {
        let circle = star.circle;
        let color = palette_color(star.lightness);
        let size = (circle.r / FULL_BRIGHTNESS_RADIUS).clamp(0.0, 1.0);
        let alpha = MIN_ALPHA + (1.0 - MIN_ALPHA) * size;
        let center = raster.sample_at(circle.x, circle.y);

        let x0 = ((circle.x - STAR_GLOW_PX) / SAMPLE_PX).floor().max(0.0) as usize;
        let y0 = ((circle.y - STAR_GLOW_PX) / SAMPLE_PX).floor().max(0.0) as usize;
        let x1 = ((circle.x + STAR_GLOW_PX) / SAMPLE_PX).ceil().max(0.0) as usize;
        let y1 = ((circle.y + STAR_GLOW_PX) / SAMPLE_PX).ceil().max(0.0) as usize;

        for y in y0..y1.min(raster.height()) {
            for x in x0..x1.min(raster.width()) {
                if center == Some((x, y)) {
                    continue;
                }
                let (px, py) = Raster::sample_center(x, y);
                let distance = circle.distance_sq(px, py).sqrt();
                if distance < STAR_GLOW_PX {
                    let falloff = 1.0 - distance / STAR_GLOW_PX;
                    raster.blend(x, y, color, STAR_GLOW_ALPHA * alpha * falloff);
                }
            }
        }

        if let Some((x, y)) = center {
            raster.blend(x, y, color, alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use nightfall_core::Circle;

    use super::*;
    use crate::color::Rgb;

    fn star(x: f32, y: f32, r: f32) -> Star {
        Star {
            circle: Circle::new(x, y, r),
            lightness: 70,
            speed: 0.1,
        }
    }

    #[test]
    fn test_star_lands_in_its_sample() {
        let mut raster = Raster::new(4, 4);
        paint(&mut raster, &[star(12.0, 20.0, 1.5)]);

        assert_eq!(raster.get(1, 2), Some(palette_color(70)));
        assert_eq!(raster.get(0, 0), Some(Rgb::default()));
    }

    #[test]
    fn test_small_star_is_dimmer() {
        let mut raster = Raster::new(4, 1);
        paint(&mut raster, &[star(4.0, 4.0, 1.5), star(12.0, 4.0, 0.1)]);

        let big = raster.get(0, 0).unwrap();
        let small = raster.get(1, 0).unwrap();
        assert!(big.0 > small.0);
    }

    #[test]
    fn test_star_glows_onto_neighbours() {
        let mut raster = Raster::new(5, 5);
        paint(&mut raster, &[star(20.0, 20.0, 1.5)]);

        assert_eq!(raster.get(2, 2), Some(palette_color(70)));
        // Direct neighbours sit 8 px away, inside the glow
        for (x, y) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
            let glow = raster.get(x, y).unwrap();
            assert_ne!(glow, Rgb::default());
            assert!(glow.0 < palette_color(70).0);
        }
        // Diagonals are 11.3 px away, past the glow
        assert_eq!(raster.get(1, 1), Some(Rgb::default()));
        assert_eq!(raster.get(0, 0), Some(Rgb::default()));
    }

    #[test]
    fn test_star_above_edge_glows_into_top_row() {
        let mut raster = Raster::new(3, 3);
        paint(&mut raster, &[star(12.0, -2.0, 1.5)]);
        assert_ne!(raster.get(1, 0), Some(Rgb::default()));
    }

    #[test]
    fn test_offscreen_stars_skipped() {
        let mut raster = Raster::new(2, 2);
        paint(&mut raster, &[star(4.0, -50.0, 1.0), star(4.0, 500.0, 1.0)]);
        assert!((0..2).all(|y| (0..2).all(|x| raster.get(x, y) == Some(Rgb::default()))));
    }
}
