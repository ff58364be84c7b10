use cosmo_jumpers::glam::Vec3;
use cosmo_jumpers::session::{
    AxisRange, CollectibleSession, ConfigError, SessionConfig, SessionEvent, SessionState,
    SpawnBounds,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DT: f32 = 1.0 / 60.0;

fn count_collected(events: &[SessionEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SessionEvent::Collected { .. }))
        .count()
}

fn count_all_collected(events: &[SessionEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SessionEvent::AllCollected { .. }))
        .count()
}

#[test]
fn test_initialize_any_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(100);
    for count in [0, 1, 8, 64] {
        let config = SessionConfig::default().with_count(count);
        let session = CollectibleSession::initialize(&config, &mut rng).unwrap();
        assert_eq!(session.live_count(), count as usize);
        assert_eq!(session.score(), 0);
    }
}

#[test]
fn test_touching_third_star_only() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let config = SessionConfig::default().with_count(8);
    let mut session = CollectibleSession::initialize(&config, &mut rng).unwrap();

    let target = session.collectibles()[2].clone();
    let nearest_other = session
        .collectibles()
        .iter()
        .filter(|c| c.id() != target.id())
        .map(|c| c.position().distance(target.position()))
        .fold(f32::INFINITY, f32::min);
    assert!(nearest_other > 0.01, "spawns too close for this scenario");
    let radius = (nearest_other / 2.0).min(0.5);

    let events = session.tick(DT, target.position(), radius);

    assert_eq!(session.live_count(), 7);
    assert_eq!(session.score(), 1);
    assert_eq!(count_collected(&events), 1);
    assert_eq!(count_all_collected(&events), 0);
    assert!(matches!(
        events[0],
        SessionEvent::Collected { id, score: 1, .. } if id == target.id()
    ));
    assert!(!session.is_live(target.id()));
    assert_eq!(session.state(), SessionState::Active);
}

#[test]
fn test_empty_session_boundary() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let config = SessionConfig::default().with_count(0);
    let mut session = CollectibleSession::initialize(&config, &mut rng).unwrap();
    assert_eq!(session.state(), SessionState::Completed);

    let first = session.tick(DT, Vec3::ZERO, 1.0);
    assert_eq!(count_all_collected(&first), 1);
    assert_eq!(session.score(), 0);
    assert!(session.tick(DT, Vec3::ZERO, 1.0).is_empty());
}

#[test]
fn test_sweep_until_empty_fires_completion_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let config = SessionConfig::default();
    let mut session = CollectibleSession::initialize(&config, &mut rng).unwrap();

    let mut completion_ticks = Vec::new();
    let mut tick_index = 0;
    while session.state() == SessionState::Active {
        let next = session.collectibles()[0].position();
        let events = session.tick(DT, next, 0.1);
        if count_all_collected(&events) > 0 {
            completion_ticks.push(tick_index);
        }
        tick_index += 1;
        assert!(tick_index < 1000, "sweep did not finish");
    }

    // Two more ticks once empty.
    for _ in 0..2 {
        let events = session.tick(DT, Vec3::ZERO, 10.0);
        assert_eq!(count_all_collected(&events), 0);
    }

    assert_eq!(completion_ticks.len(), 1);
    assert_eq!(session.score(), 8);
}

#[test]
fn test_score_plus_live_is_constant_under_random_play() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let count = rng.gen_range(0..20);
        let config = SessionConfig::default().with_count(count);
        let mut session = CollectibleSession::initialize(&config, &mut rng).unwrap();
        let initial = session.initial_count();

        let mut last_score = 0;
        let mut completions = 0;
        for _ in 0..300 {
            let actor = Vec3::new(
                rng.gen_range(-4.5..4.5),
                rng.gen_range(0.0..3.5),
                rng.gen_range(-4.5..4.5),
            );
            let radius = rng.gen_range(0.0..1.5);
            let dt = rng.gen_range(0.0..0.1);
            let events = session.tick(dt, actor, radius);

            completions += count_all_collected(&events);
            assert_eq!(session.score() as usize + session.live_count(), initial);
            assert!(session.score() >= last_score);
            assert_eq!(
                (session.score() - last_score) as usize,
                count_collected(&events)
            );
            last_score = session.score();
        }
        assert!(completions <= 1);
        if session.live_count() == 0 {
            assert_eq!(completions, 1);
        }
    }
}

#[test]
fn test_bad_configs_fail_fast() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let negative = SessionConfig::default().with_count(-1);
    assert!(matches!(
        CollectibleSession::initialize(&negative, &mut rng),
        Err(ConfigError::NegativeCount(-1))
    ));

    let inverted = SessionConfig::default().with_bounds(SpawnBounds::square(
        AxisRange::new(-4.0, 4.0),
        AxisRange::new(3.0, 0.6),
    ));
    assert!(matches!(
        CollectibleSession::initialize(&inverted, &mut rng),
        Err(ConfigError::InvertedRange { .. })
    ));
}
