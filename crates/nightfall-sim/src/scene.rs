//! Scene state owned by the frame driver.

use std::time::Instant;

use nightfall_config::SceneConfig;
use nightfall_core::Viewport;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::ball::Ball;
use crate::clock::Clock;
use crate::fragment::spawn_fragments;
use crate::physics::integrate;
use crate::spawner::Spawner;
use crate::starfield::{Starfield, random_lightness};

/// All mutable simulation state.
///
/// A frame is split in two so the caller can render in between:
/// [`Scene::advance`] runs fragmentation, physics, the clock and the stars,
/// then [`Scene::spawn_due`] lets the spawner consume the clock. Fragments for
/// a bounce are created at the start of the frame after the bounce.
#[derive(Debug)]
pub struct Scene {
    config: SceneConfig,
    viewport: Viewport,
    rng: Pcg32,
    clock: Clock,
    starfield: Starfield,
    spawner: Spawner,
    /// Active balls in insertion order.
    balls: Vec<Ball>,
    /// Balls that bounced during the last physics step.
    pending: Vec<Ball>,
    /// Shared fill lightness for every ball, chosen once.
    ball_lightness: u8,
    frame: u64,
}

impl Scene {
    /// Create a scene for a fixed viewport.
    pub fn new(config: SceneConfig, viewport: Viewport, now: Instant, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball_lightness = random_lightness(&mut rng);
        let starfield = Starfield::new(&config.stars, &viewport, &mut rng);
        let spawner = Spawner::new(config.spawn.clone());

        log::info!(
            "scene {}x{} px, {} stars",
            viewport.width,
            viewport.height,
            starfield.len()
        );

        Self {
            config,
            viewport,
            rng,
            clock: Clock::new(now),
            starfield,
            spawner,
            balls: Vec::new(),
            pending: Vec::new(),
            ball_lightness,
            frame: 0,
        }
    }

    /// First half of a frame: fragment, integrate, update the clock, move the stars.
    pub fn advance(&mut self, now: Instant) {
        spawn_fragments(
            &mut self.pending,
            &mut self.balls,
            &self.config.spawn,
            &mut self.rng,
        );
        integrate(
            &mut self.balls,
            &mut self.pending,
            self.viewport.ground_top_y(),
            &self.config.physics,
        );
        self.clock.update(now);
        self.starfield.advance();
        self.frame += 1;
    }

    /// Second half of a frame: spawn a ball if one is due.
    pub fn spawn_due(&mut self) -> bool {
        match self
            .spawner
            .maybe_spawn(&mut self.clock, &self.viewport, &mut self.rng)
        {
            Some(ball) => {
                self.balls.push(ball);
                true
            }
            None => false,
        }
    }

    /// A full frame without rendering.
    pub fn tick(&mut self, now: Instant) {
        self.advance(now);
        self.spawn_due();
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn pending(&self) -> &[Ball] {
        &self.pending
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn ball_lightness(&self) -> u8 {
        self.ball_lightness
    }

    /// Frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[cfg(test)]
    fn balls_mut(&mut self) -> &mut Vec<Ball> {
        &mut self.balls
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use nightfall_core::Circle;

    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn scene(start: Instant) -> Scene {
        Scene::new(
            SceneConfig::default(),
            Viewport::new(1000.0, 1000.0),
            start,
            42,
        )
    }

    #[test]
    fn test_star_population_constant() {
        let start = Instant::now();
        let mut scene = scene(start);
        for i in 1..=300 {
            scene.tick(start + FRAME * i);
        }
        assert_eq!(scene.starfield().len(), 1000);
        assert_eq!(scene.frame(), 300);
    }

    #[test]
    fn test_first_spawn_after_initial_interval() {
        let start = Instant::now();
        let mut scene = scene(start);

        scene.advance(start + Duration::from_millis(400));
        assert!(!scene.spawn_due());
        assert!(scene.balls().is_empty());

        scene.advance(start + Duration::from_millis(600));
        assert!(scene.spawn_due());
        assert_eq!(scene.balls().len(), 1);
        assert_eq!(scene.clock().elapsed_ms(), 0.0);
    }

    #[test]
    fn test_fragments_arrive_one_frame_after_bounce() {
        let start = Instant::now();
        let mut scene = scene(start);
        // Ground is at 900; this ball lands on the next step
        scene
            .balls_mut()
            .push(Ball::new(Circle::new(500.0, 875.0, 20.0), 5.0, 10.0));

        scene.advance(start + FRAME);
        assert_eq!(scene.balls().len(), 1);
        assert_eq!(scene.pending().len(), 1);
        let parent = scene.pending()[0];

        scene.advance(start + FRAME * 2);
        assert!(scene.pending().is_empty());
        let children = scene.balls().len() - 1;
        assert!((1..=5).contains(&children));
        // Children were stepped once after spawning
        for child in &scene.balls()[1..] {
            assert_eq!(child.circle.r, parent.circle.r / 2.0);
        }
    }

    #[test]
    fn test_despawned_ball_never_fragments() {
        let start = Instant::now();
        let mut scene = scene(start);
        scene
            .balls_mut()
            .push(Ball::new(Circle::new(500.0, 898.0, 1.5), 5.0, 10.0));

        scene.advance(start + FRAME);
        assert!(scene.balls().is_empty());
        assert!(scene.pending().is_empty());

        scene.advance(start + FRAME * 2);
        assert!(scene.balls().is_empty());
    }

    #[test]
    fn test_long_run_invariants() {
        let start = Instant::now();
        let mut scene = scene(start);
        for i in 1..=3000 {
            scene.tick(start + FRAME * i);
            for ball in scene.balls() {
                assert!(ball.circle.r >= 1.0);
                assert!(ball.circle.bottom() <= 900.0 + 1e-3);
            }
        }
        assert!(scene.frame() == 3000);
    }

    #[test]
    fn test_same_seed_same_scene() {
        let start = Instant::now();
        let mut a = scene(start);
        let mut b = scene(start);
        for i in 1..=500 {
            a.tick(start + FRAME * i);
            b.tick(start + FRAME * i);
        }
        assert_eq!(a.balls(), b.balls());
        assert_eq!(a.ball_lightness(), b.ball_lightness());
    }
}
