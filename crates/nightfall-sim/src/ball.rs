//! Falling ball entity.

use nightfall_core::Circle;

/// A falling ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub circle: Circle,
    /// Constant horizontal drift per frame (px).
    pub drift_x: f32,
    /// Vertical velocity per frame (px), grows with gravity.
    pub velocity_y: f32,
}

impl Ball {
    pub fn new(circle: Circle, drift_x: f32, velocity_y: f32) -> Self {
        Self {
            circle,
            drift_x,
            velocity_y,
        }
    }
}
