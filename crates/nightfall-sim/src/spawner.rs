//! Ball spawner with a randomized cadence.

use nightfall_config::SpawnConfig;
use nightfall_core::{Circle, Viewport};
use rand::Rng;

use crate::ball::Ball;
use crate::clock::Clock;

/// Spawns a new ball each time the clock's accumulated time passes a
/// randomized threshold.
#[derive(Debug, Clone)]
pub struct Spawner {
    config: SpawnConfig,
    /// Milliseconds that must accumulate before the next spawn.
    next_spawn_ms: f64,
}

impl Spawner {
    pub fn new(config: SpawnConfig) -> Self {
        let next_spawn_ms = config.initial_interval_ms;
        Self {
            config,
            next_spawn_ms,
        }
    }

    pub fn next_spawn_ms(&self) -> f64 {
        self.next_spawn_ms
    }

    /// Spawn a ball if the clock has accumulated more than the current threshold.
    ///
    /// On spawn the clock is consumed and a new threshold is drawn.
    pub fn maybe_spawn(
        &mut self,
        clock: &mut Clock,
        viewport: &Viewport,
        rng: &mut impl Rng,
    ) -> Option<Ball> {
        if clock.elapsed_ms() <= self.next_spawn_ms {
            return None;
        }

        clock.consume();
        self.next_spawn_ms = (rng.random::<f64>() * self.config.max_interval_ms)
            .max(self.config.min_interval_ms);

        let radius = (rng.random::<f32>() * self.config.max_radius).max(self.config.min_radius);
        let x = rng.random::<f32>() * viewport.width;
        let y = rng.random::<f32>() * viewport.height * self.config.spawn_strip_ratio
            + self.config.spawn_offset_y;
        let drift_x = self.random_drift(rng);

        log::trace!("spawn ball r={radius:.1} at ({x:.0}, {y:.0}), drift {drift_x:.2}");
        Some(Ball::new(Circle::new(x, y, radius), drift_x, 0.0))
    }

    /// Draw a horizontal drift whose magnitude is at least `min_drift`.
    fn random_drift(&self, rng: &mut impl Rng) -> f32 {
        let drift = (rng.random::<f32>() - 0.5) * self.config.drift_range;
        clamp_drift(drift, self.config.min_drift)
    }
}

/// Push a drift below the minimum magnitude out to it, keeping its sign.
/// Zero has no sign and goes right.
fn clamp_drift(drift: f32, min_drift: f32) -> f32 {
    if drift.abs() >= min_drift {
        return drift;
    }
    if drift < 0.0 { -min_drift } else { min_drift }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_spawns_once_past_threshold() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut spawner = Spawner::new(SpawnConfig::default());
        let mut clock = Clock::new(Instant::now());
        clock.accumulate(600.0);
        assert_eq!(spawner.next_spawn_ms(), 500.0);

        let ball = spawner.maybe_spawn(&mut clock, &viewport(), &mut rng);

        assert!(ball.is_some());
        assert_eq!(clock.elapsed_ms(), 0.0);
        // Elapsed was just reset, so a second call in the same tick is a no-op
        assert!(spawner.maybe_spawn(&mut clock, &viewport(), &mut rng).is_none());
    }

    #[test]
    fn test_waits_below_threshold() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut spawner = Spawner::new(SpawnConfig::default());
        let mut clock = Clock::new(Instant::now());
        clock.accumulate(500.0);

        assert!(spawner.maybe_spawn(&mut clock, &viewport(), &mut rng).is_none());
        assert_eq!(clock.elapsed_ms(), 500.0);
    }

    #[test]
    fn test_spawned_ball_ranges() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut spawner = Spawner::new(SpawnConfig::default());
        let mut clock = Clock::new(Instant::now());

        for _ in 0..500 {
            clock.accumulate(1000.0);
            let ball = spawner
                .maybe_spawn(&mut clock, &viewport(), &mut rng)
                .unwrap();

            assert!(ball.circle.r >= 20.0 && ball.circle.r <= 40.0);
            assert!(ball.circle.x >= 0.0 && ball.circle.x < 800.0);
            assert!(ball.circle.y >= -500.0 && ball.circle.y < -470.0);
            assert!(ball.drift_x.abs() >= 5.0);
            assert_eq!(ball.velocity_y, 0.0);
            assert!(spawner.next_spawn_ms() >= 50.0 && spawner.next_spawn_ms() <= 500.0);
        }
    }

    #[test]
    fn test_clamp_drift() {
        assert_eq!(clamp_drift(0.0, 5.0), 5.0);
        assert_eq!(clamp_drift(-0.0, 5.0), 5.0);
        assert_eq!(clamp_drift(-1.0, 5.0), -5.0);
        assert_eq!(clamp_drift(2.0, 5.0), 5.0);
        assert_eq!(clamp_drift(-7.5, 5.0), -7.5);
    }
}
