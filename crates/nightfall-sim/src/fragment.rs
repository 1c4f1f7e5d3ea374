//! Splitting bounced balls into smaller fragments.

use nightfall_config::SpawnConfig;
use nightfall_core::Circle;
use rand::Rng;

use crate::ball::Ball;

/// Turn every queued bounce into fragments appended to `balls`, then clear the queue.
///
/// Each fragment starts at the parent's position with half its radius. A single
/// random scale per fragment multiplies both the parent's drift (with a random
/// sign) and its post-bounce vertical velocity.
pub fn spawn_fragments(
    pending: &mut Vec<Ball>,
    balls: &mut Vec<Ball>,
    config: &SpawnConfig,
    rng: &mut impl Rng,
) {
    for parent in pending.drain(..) {
        let count = fragment_count(config, rng);
        balls.extend((0..count).map(|_| fragment(&parent, config, rng)));
    }
}

fn fragment_count(config: &SpawnConfig, rng: &mut impl Rng) -> u32 {
    let span = (config.max_fragments - config.min_fragments + 1) as f32;
    let count = (rng.random::<f32>() * span).floor() as u32 + config.min_fragments;
    count.min(config.max_fragments)
}

fn fragment(parent: &Ball, config: &SpawnConfig, rng: &mut impl Rng) -> Ball {
    let side = if rng.random::<f32>() * 2.0 - 1.0 < 0.0 {
        -1.0
    } else {
        1.0
    };
    let scale = rng.random::<f32>() * config.fragment_scale_span + config.fragment_scale_min;

    Ball::new(
        Circle::new(parent.circle.x, parent.circle.y, parent.circle.r / 2.0),
        parent.drift_x * side * scale,
        parent.velocity_y * scale,
    )
}
