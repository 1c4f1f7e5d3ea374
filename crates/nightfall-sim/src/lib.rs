//! Per-frame simulation for the nightfall scene.
//!
//! The scene advances once per rendered frame: queued fragments spawn, balls
//! fall and bounce, the clock ticks, stars drift, and new balls spawn once
//! enough time has passed. Gravity is applied per frame rather than per
//! millisecond, so the animation speed follows the frame rate.

mod ball;
mod clock;
mod fragment;
mod physics;
mod scene;
mod spawner;
mod starfield;

pub use ball::Ball;
pub use clock::Clock;
pub use fragment::spawn_fragments;
pub use physics::{Contact, integrate};
pub use scene::Scene;
pub use spawner::Spawner;
pub use starfield::{Star, Starfield};
