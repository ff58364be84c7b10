//! Fixed-step frame clock

use std::time::Duration;

/// Frame timing for a fixed-step loop.
///
/// The headless loop does not sleep; every frame advances by exactly one
/// step so runs are reproducible.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    elapsed: Duration,
    frame: u64,
}

impl FrameClock {
    /// Clock stepping at `fps` frames per second. `fps` must be non-zero.
    #[must_use]
    pub fn from_fps(fps: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / fps.max(1),
            elapsed: Duration::ZERO,
            frame: 0,
        }
    }

    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.elapsed += self.step;
        self.frame += 1;
    }

    /// Frame duration
    #[must_use]
    pub const fn delta(&self) -> Duration {
        self.step
    }

    /// Frame duration in seconds
    #[must_use]
    pub fn delta_seconds(&self) -> f32 {
        self.step.as_secs_f32()
    }

    /// Total simulated time
    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Frames advanced so far
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::from_fps(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advances_by_step() {
        let mut clock = FrameClock::from_fps(50);
        assert_eq!(clock.frame(), 0);
        for _ in 0..50 {
            clock.advance();
        }
        assert_eq!(clock.frame(), 50);
        assert!((clock.delta_seconds() - 0.02).abs() < 1e-6);
        assert!((clock.elapsed_seconds() - 1.0).abs() < 1e-4);
    }
}
