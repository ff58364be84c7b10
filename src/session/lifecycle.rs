//! The collectible round: spawning, per-frame animation, pickup and scoring

use glam::Vec3;
use rand::Rng;

use super::collectible::{Collectible, CollectibleId};
use super::config::{ConfigError, SessionConfig};
use super::event::{HintPhase, SessionEvent, SessionState, TickEvents};

/// Live collectibles and the score of one playthrough.
///
/// The host owns the session and calls [`tick`](Self::tick) once per frame
/// with the actor's current position. Everything the host needs to react
/// to (destroy a visual, play a sound, update the HUD) comes back as
/// [`SessionEvent`]s.
///
/// At all times `score() + live_count() == initial_count()`.
#[derive(Debug, Clone)]
pub struct CollectibleSession {
    config: SessionConfig,
    /// Live collectibles, in spawn order
    collectibles: Vec<Collectible>,
    initial_count: usize,
    score: u32,
    /// Session time fed to the bob animation
    elapsed: f32,
    hint: HintPhase,
    /// Set once `AllCollected` has been emitted
    completion_announced: bool,
}

impl CollectibleSession {
    /// Spawn `config.collectible_count` collectibles uniformly inside
    /// `config.bounds`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config does not validate. Nothing is
    /// spawned in that case.
    pub fn initialize<R: Rng + ?Sized>(
        config: &SessionConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let count = config.validate()?;
        let positions: Vec<Vec3> = (0..count).map(|_| config.bounds.sample(rng)).collect();
        Ok(Self::spawn(config.clone(), positions, rng))
    }

    /// Spawn collectibles at caller-chosen positions.
    ///
    /// The count comes from `positions`; `config.collectible_count` is
    /// ignored, but the rest of the config is still validated. Spin and bob
    /// phase are randomized as in [`initialize`](Self::initialize).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config does not validate.
    pub fn from_positions<R: Rng + ?Sized>(
        config: &SessionConfig,
        positions: impl IntoIterator<Item = Vec3>,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let positions: Vec<Vec3> = positions.into_iter().collect();
        let count = i32::try_from(positions.len()).unwrap_or(i32::MAX);
        let config = config.clone().with_count(count);
        config.validate()?;
        Ok(Self::spawn(config, positions, rng))
    }

    fn spawn<R: Rng + ?Sized>(config: SessionConfig, positions: Vec<Vec3>, rng: &mut R) -> Self {
        let collectibles: Vec<Collectible> = positions
            .into_iter()
            .zip(0u32..)
            .map(|(position, index)| {
                Collectible::new(
                    CollectibleId(index),
                    position,
                    rng.gen_range(0.0..360.0),
                    (rng.gen_range(0.0..360.0), rng.gen_range(0.0..360.0)),
                    rng.gen_range(0.0..1.0),
                )
            })
            .collect();

        log::info!("Session started with {} collectibles", collectibles.len());

        Self {
            config,
            initial_count: collectibles.len(),
            collectibles,
            score: 0,
            elapsed: 0.0,
            hint: HintPhase::CollectAll,
            completion_announced: false,
        }
    }

    /// Advance one frame.
    ///
    /// Every live collectible spins and bobs, then is tested against the
    /// actor sphere. Touched collectibles are removed and scored in spawn
    /// order. When the last one goes, `AllCollected` follows the final
    /// `Collected` in the same tick; a session that started empty reports
    /// it on its first tick. It never fires again afterwards.
    ///
    /// A negative or non-finite `dt` is treated as zero.
    pub fn tick(&mut self, dt: f32, actor_position: Vec3, actor_radius: f32) -> TickEvents {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("Ignoring invalid frame delta {dt}");
            0.0
        };

        self.elapsed += dt;
        let spin = self.config.rotation_rate_deg * dt;
        let amplitude = self.config.bob_amplitude;
        let elapsed = self.elapsed;

        let mut events = TickEvents::new();
        let mut score = self.score;

        self.collectibles.retain_mut(|star| {
            star.spin(spin);
            star.bob(elapsed, amplitude, dt);

            if !star.overlaps(actor_position, actor_radius) {
                return true;
            }

            score += 1;
            log::debug!("Collected {} at {} (score {score})", star.id(), star.position());
            events.push(SessionEvent::Collected {
                id: star.id(),
                position: star.position(),
                score,
            });
            false
        });
        self.score = score;

        if self.collectibles.is_empty() && !self.completion_announced {
            self.completion_announced = true;
            self.hint = HintPhase::AllCollected;
            log::info!("All collectibles gathered, final score {}", self.score);
            events.push(SessionEvent::AllCollected { score: self.score });
        }

        debug_assert_eq!(
            self.score as usize + self.collectibles.len(),
            self.initial_count
        );

        events
    }

    /// Cumulative score
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Number of collectibles still in play
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.collectibles.len()
    }

    /// Number spawned at the start of the session
    #[must_use]
    pub const fn initial_count(&self) -> usize {
        self.initial_count
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.collectibles.is_empty() {
            SessionState::Completed
        } else {
            SessionState::Active
        }
    }

    /// Hint the UI should currently display
    #[must_use]
    pub const fn hint(&self) -> HintPhase {
        self.hint
    }

    /// Live collectibles in spawn order
    #[must_use]
    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    /// Look up a live collectible
    #[must_use]
    pub fn get(&self, id: CollectibleId) -> Option<&Collectible> {
        self.collectibles.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn is_live(&self, id: CollectibleId) -> bool {
        self.get(id).is_some()
    }

    /// Session time accumulated from accepted frame deltas
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::config::{AxisRange, SpawnBounds};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const DT: f32 = 1.0 / 60.0;
    /// Far from any spawn region
    const AWAY: Vec3 = Vec3::new(100.0, 100.0, 100.0);

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn collected(events: &TickEvents) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, SessionEvent::Collected { .. }))
            .count()
    }

    fn all_collected(events: &TickEvents) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, SessionEvent::AllCollected { .. }))
            .count()
    }

    #[test]
    fn test_initialize_spawns_within_bounds() {
        let config = SessionConfig::default();
        let session = CollectibleSession::initialize(&config, &mut rng()).unwrap();

        assert_eq!(session.live_count(), 8);
        assert_eq!(session.initial_count(), 8);
        assert_eq!(session.score(), 0);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.hint(), HintPhase::CollectAll);
        for star in session.collectibles() {
            assert!(config.bounds.contains(star.position()));
            assert!((0.0..360.0).contains(&star.yaw_degrees()));
            assert!((0.0..1.0).contains(&star.bob_phase()));
        }
    }

    #[test]
    fn test_initialize_ids_unique() {
        let config = SessionConfig::default().with_count(50);
        let session = CollectibleSession::initialize(&config, &mut rng()).unwrap();
        let mut ids: Vec<_> = session.collectibles().iter().map(Collectible::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_initialize_is_reproducible() {
        let config = SessionConfig::default();
        let a = CollectibleSession::initialize(&config, &mut rng()).unwrap();
        let b = CollectibleSession::initialize(&config, &mut rng()).unwrap();
        assert_eq!(a.collectibles(), b.collectibles());
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        let config = SessionConfig::default().with_count(-3);
        assert!(matches!(
            CollectibleSession::initialize(&config, &mut rng()),
            Err(ConfigError::NegativeCount(-3))
        ));

        let inverted = SpawnBounds::square(AxisRange::new(4.0, -4.0), AxisRange::new(0.6, 3.0));
        let config = SessionConfig::default().with_bounds(inverted);
        assert!(matches!(
            CollectibleSession::initialize(&config, &mut rng()),
            Err(ConfigError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_initialize_rejects_overflowing_span() {
        let wide = SpawnBounds::square(
            AxisRange::new(-3.0e38, 3.0e38),
            AxisRange::new(0.6, 3.0),
        );
        let config = SessionConfig::default().with_bounds(wide);
        assert!(matches!(
            CollectibleSession::initialize(&config, &mut rng()),
            Err(ConfigError::NonFinite("x span"))
        ));
    }

    #[test]
    fn test_tick_spins_and_keeps_live_set_when_away() {
        let config = SessionConfig::default();
        let mut session = CollectibleSession::initialize(&config, &mut rng()).unwrap();
        let before: Vec<f32> = session
            .collectibles()
            .iter()
            .map(Collectible::yaw_degrees)
            .collect();

        let events = session.tick(0.5, AWAY, config.overlap_radius);
        assert!(events.is_empty());
        assert_eq!(session.live_count(), 8);

        for (star, yaw) in session.collectibles().iter().zip(before) {
            let expected = (yaw + 30.0).rem_euclid(360.0);
            assert!((star.yaw_degrees() - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_tick_collects_exactly_once() {
        let config = SessionConfig::default();
        let spot = Vec3::new(1.0, 1.0, 1.0);
        let mut session = CollectibleSession::from_positions(
            &config,
            [spot, Vec3::new(-3.0, 2.0, -3.0)],
            &mut rng(),
        )
        .unwrap();

        let first = session.tick(DT, spot, 0.5);
        assert_eq!(collected(&first), 1);
        assert_eq!(session.score(), 1);
        assert!(!session.is_live(CollectibleId(0)));

        // Actor stays put; nothing left there to collect.
        let second = session.tick(DT, spot, 0.5);
        assert!(second.is_empty());
        assert_eq!(session.score(), 1);
        assert_eq!(session.live_count(), 1);
    }

    #[test]
    fn test_collected_event_carries_post_increment_score() {
        let spot = Vec3::ZERO;
        let mut session = CollectibleSession::from_positions(
            &SessionConfig::default(),
            [spot, spot, Vec3::new(3.0, 0.0, 0.0)],
            &mut rng(),
        )
        .unwrap();

        let events = session.tick(DT, spot, 0.5);
        let scores: Vec<u32> = events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Collected { score, .. } => Some(*score),
                SessionEvent::AllCollected { .. } => None,
            })
            .collect();
        assert_eq!(scores, vec![1, 2]);
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn test_all_collected_fires_once() {
        let spot = Vec3::new(0.0, 1.0, 0.0);
        let mut session = CollectibleSession::from_positions(
            &SessionConfig::default(),
            [spot, Vec3::new(0.0, 1.0, 0.2)],
            &mut rng(),
        )
        .unwrap();

        let events = session.tick(DT, spot, 1.0);
        assert_eq!(collected(&events), 2);
        assert_eq!(all_collected(&events), 1);
        assert_eq!(events.last(), Some(&SessionEvent::AllCollected { score: 2 }));
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.hint(), HintPhase::AllCollected);

        for _ in 0..2 {
            assert!(session.tick(DT, spot, 1.0).is_empty());
        }
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn test_empty_session_completes_on_first_tick() {
        let config = SessionConfig::default().with_count(0);
        let mut session = CollectibleSession::initialize(&config, &mut rng()).unwrap();
        assert_eq!(session.state(), SessionState::Completed);

        let events = session.tick(DT, Vec3::ZERO, 1.0);
        assert_eq!(events.as_slice(), &[SessionEvent::AllCollected { score: 0 }]);
        assert!(session.tick(DT, Vec3::ZERO, 1.0).is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_invalid_dt_treated_as_zero() {
        let mut session =
            CollectibleSession::initialize(&SessionConfig::default(), &mut rng()).unwrap();
        let before = session.collectibles().to_vec();

        session.tick(f32::NAN, AWAY, 0.0);
        session.tick(-1.0, AWAY, 0.0);

        assert_eq!(session.collectibles(), before.as_slice());
        assert!(session.elapsed().abs() < f32::EPSILON);
    }

    #[test]
    fn test_bob_stays_near_spawn() {
        let config = SessionConfig::default();
        let mut session = CollectibleSession::initialize(&config, &mut rng()).unwrap();
        let start: Vec<f32> = session.collectibles().iter().map(|c| c.position().y).collect();

        for _ in 0..600 {
            session.tick(DT, AWAY, 0.0);
        }

        // Each second of bobbing nets zero drift up to discretization error.
        for (star, y0) in session.collectibles().iter().zip(start) {
            assert!((star.position().y - y0).abs() < config.bob_amplitude);
        }
    }
}
