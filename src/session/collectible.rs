//! Collectible markers

use std::fmt;

use glam::{EulerRot, Quat, Vec3};

/// Opaque identity of a collectible within one session.
///
/// Ids are handed out in spawn order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectibleId(pub(crate) u32);

impl CollectibleId {
    /// Raw index, useful as a stable key for host-side tables
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CollectibleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "star#{}", self.0)
    }
}

/// A spinning, bobbing pickup placed in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    id: CollectibleId,
    position: Vec3,
    /// Yaw in degrees, kept in `[0, 360)`
    yaw_deg: f32,
    /// Fixed pitch/roll in degrees; cosmetic only
    tilt_deg: (f32, f32),
    /// Offset into the bob cycle, in `[0, 1)`
    bob_phase: f32,
}

impl Collectible {
    pub(crate) fn new(
        id: CollectibleId,
        position: Vec3,
        yaw_deg: f32,
        tilt_deg: (f32, f32),
        bob_phase: f32,
    ) -> Self {
        Self {
            id,
            position,
            yaw_deg: yaw_deg.rem_euclid(360.0),
            tilt_deg,
            bob_phase,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CollectibleId {
        self.id
    }

    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Current yaw about the vertical axis, in degrees
    #[must_use]
    pub const fn yaw_degrees(&self) -> f32 {
        self.yaw_deg
    }

    #[must_use]
    pub const fn bob_phase(&self) -> f32 {
        self.bob_phase
    }

    /// Full orientation for rendering (tilt, then spin)
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw_deg.to_radians(),
            self.tilt_deg.0.to_radians(),
            self.tilt_deg.1.to_radians(),
        )
    }

    /// Spin by `degrees` about the vertical axis.
    pub(crate) fn spin(&mut self, degrees: f32) {
        self.yaw_deg = (self.yaw_deg + degrees).rem_euclid(360.0);
    }

    /// Vertical nudge for this frame.
    ///
    /// The bob speed sweeps linearly from `-amplitude` to `+amplitude` over
    /// each second of session time, offset by this collectible's phase.
    pub(crate) fn bob(&mut self, elapsed: f32, amplitude: f32, dt: f32) {
        let t = (elapsed + self.bob_phase).fract();
        let speed = -amplitude + (2.0 * amplitude) * t;
        self.position.y += speed * dt;
    }

    /// Point-in-sphere test against an actor.
    ///
    /// The boundary counts as touching. A negative or NaN radius never
    /// overlaps.
    #[must_use]
    pub fn overlaps(&self, actor_position: Vec3, actor_radius: f32) -> bool {
        actor_radius >= 0.0
            && self.position.distance_squared(actor_position) <= actor_radius * actor_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(position: Vec3) -> Collectible {
        Collectible::new(CollectibleId(0), position, 0.0, (0.0, 0.0), 0.0)
    }

    #[test]
    fn test_spin_wraps() {
        let mut c = Collectible::new(CollectibleId(1), Vec3::ZERO, 350.0, (0.0, 0.0), 0.0);
        c.spin(20.0);
        assert!((c.yaw_degrees() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_initial_yaw_normalized() {
        let c = Collectible::new(CollectibleId(1), Vec3::ZERO, -90.0, (0.0, 0.0), 0.0);
        assert!((c.yaw_degrees() - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_bob_bounded() {
        let mut c = star(Vec3::ZERO);
        // Start of the cycle moves down at full amplitude.
        c.bob(0.0, 0.05, 1.0);
        assert!((c.position().y + 0.05).abs() < 1e-6);

        // Mid-cycle is the zero crossing.
        let mut c = star(Vec3::ZERO);
        c.bob(0.5, 0.05, 1.0);
        assert!(c.position().y.abs() < 1e-6);

        for step in 0..100 {
            let mut c = star(Vec3::ZERO);
            c.bob(step as f32 * 0.137, 0.05, 0.5);
            assert!(c.position().y.abs() <= 0.025 + 1e-6);
        }
    }

    #[test]
    fn test_overlap_inclusive() {
        let c = star(Vec3::new(1.0, 0.0, 0.0));
        assert!(c.overlaps(Vec3::ZERO, 1.0));
        assert!(c.overlaps(Vec3::new(1.0, 0.0, 0.0), 0.0));
        assert!(!c.overlaps(Vec3::ZERO, 0.99));
    }

    #[test]
    fn test_overlap_rejects_bad_radius() {
        let c = star(Vec3::ZERO);
        assert!(!c.overlaps(Vec3::ZERO, -1.0));
        assert!(!c.overlaps(Vec3::ZERO, f32::NAN));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(CollectibleId(3).to_string(), "star#3");
        assert_eq!(CollectibleId(3).index(), 3);
    }
}
