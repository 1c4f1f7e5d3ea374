//! Per-frame ball integration and ground bounce.

use nightfall_config::PhysicsConfig;

use crate::ball::Ball;

/// What happened to a ball when it reached the ground this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Bounced and shrank; the ball keeps falling and fragments next frame.
    Bounced,
    /// Shrank below the despawn radius and must be removed.
    Despawned,
}

/// Advance one ball by one frame.
///
/// Explicit Euler with a per-frame gravity step. On ground contact the vertical
/// velocity flips and loses energy, the ball is placed on the ground using its
/// pre-shrink radius, and then the radius shrinks.
pub fn step(ball: &mut Ball, ground_top_y: f32, config: &PhysicsConfig) -> Option<Contact> {
    ball.circle.y += ball.velocity_y;
    ball.circle.x += ball.drift_x;
    ball.velocity_y += config.gravity;

    if ball.circle.y <= ground_top_y - ball.circle.r {
        return None;
    }

    ball.velocity_y = -ball.velocity_y * config.restitution;
    ball.circle.y = ground_top_y - ball.circle.r;
    ball.circle.r *= config.reduction_rate;

    if ball.circle.r < config.despawn_radius {
        Some(Contact::Despawned)
    } else {
        Some(Contact::Bounced)
    }
}

/// Advance every active ball by one frame.
///
/// Bounced balls stay active and a snapshot of each is queued in `pending` for
/// fragmentation on the next frame. Balls that despawn are removed in place and
/// never queued. Any ball left below the despawn radius (a fragment born too
/// small) is removed as well, so nothing under that size survives the frame.
pub fn integrate(
    balls: &mut Vec<Ball>,
    pending: &mut Vec<Ball>,
    ground_top_y: f32,
    config: &PhysicsConfig,
) {
    balls.retain_mut(|ball| match step(ball, ground_top_y, config) {
        Some(Contact::Despawned) => {
            log::trace!("despawn ball at x={:.0}", ball.circle.x);
            false
        }
        Some(Contact::Bounced) => {
            pending.push(*ball);
            true
        }
        None => ball.circle.r >= config.despawn_radius,
    });
}
