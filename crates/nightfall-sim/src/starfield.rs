//! Slowly rising background stars.

use nightfall_config::StarConfig;
use nightfall_core::{Circle, Viewport};
use rand::Rng;

/// Pick a palette lightness in percent, `50..=99`.
pub(crate) fn random_lightness(rng: &mut impl Rng) -> u8 {
    (rng.random::<f32>() * 50.0 + 50.0).floor() as u8
}

/// A single background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub circle: Circle,
    /// Lightness of the star's yellow tint, in percent.
    pub lightness: u8,
    /// Upward drift per frame (px).
    pub speed: f32,
}

/// Fixed population of stars drifting upward and wrapping to the bottom.
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    /// Stars above this y wrap.
    wrap_top: f32,
    /// Y that wrapped stars restart from.
    wrap_bottom: f32,
}

impl Starfield {
    /// Scatter `config.count` stars over the viewport and the area below it.
    pub fn new(config: &StarConfig, viewport: &Viewport, rng: &mut impl Rng) -> Self {
        let wrap_bottom = viewport.height * config.wrap_bottom_ratio;
        let stars = (0..config.count)
            .map(|_| {
                let x = rng.random::<f32>() * viewport.width;
                let y = rng.random::<f32>() * wrap_bottom;
                let r = rng.random::<f32>() * config.max_size / 2.0;
                Star {
                    circle: Circle::new(x, y, r),
                    lightness: random_lightness(rng),
                    speed: config.speed,
                }
            })
            .collect();

        Self {
            stars,
            wrap_top: config.wrap_top,
            wrap_bottom,
        }
    }

    /// Move every star up by its speed, wrapping the ones that left the top.
    pub fn advance(&mut self) {
        for star in &mut self.stars {
            star.circle.y -= star.speed;
            if star.circle.y < self.wrap_top {
                star.circle.y = self.wrap_bottom;
            }
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn wrap_top(&self) -> f32 {
        self.wrap_top
    }

    pub fn wrap_bottom(&self) -> f32 {
        self.wrap_bottom
    }
}
