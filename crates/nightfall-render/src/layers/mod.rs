//! Scene layers, painted back to front.

pub mod balls;
pub mod scenery;
pub mod sky;
pub mod stars;

use crate::color::Rgb;
use crate::raster::Raster;

/// A raster with per-sample coverage, composited over another raster.
#[derive(Debug, Clone)]
pub struct Layer {
    color: Raster,
    coverage: Vec<f32>,
}

impl Layer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            color: Raster::new(width, height),
            coverage: vec![0.0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.color.width()
    }

    pub fn height(&self) -> usize {
        self.color.height()
    }

    /// Color and coverage of a sample.
    pub fn get(&self, x: usize, y: usize) -> Option<(Rgb, f32)> {
        let color = self.color.get(x, y)?;
        Some((color, self.coverage[y * self.width() + x]))
    }

    pub fn set(&mut self, x: usize, y: usize, color: Rgb, coverage: f32) {
        if x < self.width() && y < self.height() {
            let idx = y * self.width() + x;
            self.color.set(x, y, color);
            self.coverage[idx] = coverage.clamp(0.0, 1.0);
        }
    }

    /// Blend this layer over `target`.
    pub fn composite_onto(&self, target: &mut Raster) {
        for y in 0..self.height().min(target.height()) {
            for x in 0..self.width().min(target.width()) {
                if let Some((color, coverage)) = self.get(x, y)
                    && coverage > 0.0
                {
                    target.blend(x, y, color, coverage);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_respects_coverage() {
        let mut target = Raster::new(3, 1);
        let mut layer = Layer::new(3, 1);
        layer.set(0, 0, Rgb(200, 200, 200), 1.0);
        layer.set(1, 0, Rgb(200, 200, 200), 0.5);

        layer.composite_onto(&mut target);

        assert_eq!(target.get(0, 0), Some(Rgb(200, 200, 200)));
        assert_eq!(target.get(1, 0), Some(Rgb(100, 100, 100)));
        assert_eq!(target.get(2, 0), Some(Rgb(0, 0, 0)));
    }
}
