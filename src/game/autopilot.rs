//! Scripted player for the headless demo
//!
//! Stands in for keyboard and mouse: presses Play on the title screen and
//! then walks straight at the nearest remaining star.

use glam::Vec3;

use crate::session::CollectibleSession;

/// Seek-style mover with a capped speed.
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Movement speed, in units per second
    pub speed: f32,
    /// Frames to linger on the title screen before pressing Play
    pub title_delay_frames: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            speed: 6.0,
            title_delay_frames: 30,
        }
    }
}

impl Autopilot {
    /// Next actor position: a step of at most `speed * dt` toward the
    /// nearest live star. Stays put when nothing is left.
    #[must_use]
    pub fn step(&self, session: &CollectibleSession, position: Vec3, dt: f32) -> Vec3 {
        let Some(target) = session
            .collectibles()
            .iter()
            .map(|star| star.position())
            .min_by(|a, b| {
                a.distance_squared(position)
                    .total_cmp(&b.distance_squared(position))
            })
        else {
            return position;
        };

        let to_target = target - position;
        let max_step = self.speed * dt;
        if to_target.length_squared() <= max_step * max_step {
            target
        } else {
            position + to_target.normalize_or_zero() * max_step
        }
    }
}
