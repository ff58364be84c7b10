//! The Cosmo Jumpers game: title menu, playground, and the star round

use std::path::Path;

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::autopilot::Autopilot;
use super::phase::GamePhase;
use super::visuals::StarVisuals;
use crate::audio::{PICKUP_SOUND, PICKUP_SOUND_PATH, SilentPlayer, SoundPlayer, default_player};
use crate::core::{EngineContext, Game, GameEvent, SceneLayout};
use crate::ecs::{Name, Transform};
use crate::session::{
    CollectibleSession, ConfigError, SessionConfig, SessionEvent, SessionState,
};
use crate::ui::{Color, Hud, MenuAction, TITLE_BACKGROUND, TitleMenu};

/// Sky color once the round starts
pub const PLAY_BACKGROUND: Color = Color::rgb(180.0 / 255.0, 240.0 / 255.0, 1.0);

/// Seconds to keep celebrating before a self-playing demo quits
const CELEBRATION_SECONDS: f32 = 2.0;

/// The whole game. Owns everything; there is no global state.
pub struct CosmoJumpers {
    config: SessionConfig,
    rng: ChaCha8Rng,
    phase: GamePhase,
    menu: TitleMenu,
    hud: Hud,
    background: Color,
    layout: Option<SceneLayout>,
    session: Option<CollectibleSession>,
    visuals: StarVisuals,
    audio: Box<dyn SoundPlayer>,
    actor_position: Vec3,
    /// Click to resolve on the next title-screen frame
    pending_click: Option<Vec2>,
    autopilot: Option<Autopilot>,
    frames_in_phase: u32,
    completed_for: f32,
}

impl CosmoJumpers {
    /// Create a game with a seeded RNG and no sound.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` does not validate.
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let menu = TitleMenu::new(&mut rng);
        log::info!("Starring {}!", menu.character_name());

        Ok(Self {
            config,
            rng,
            phase: GamePhase::Title,
            menu,
            hud: Hud::new(),
            background: TITLE_BACKGROUND,
            layout: None,
            session: None,
            visuals: StarVisuals::new(),
            audio: Box::new(SilentPlayer::new()),
            actor_position: Vec3::ZERO,
            pending_click: None,
            autopilot: None,
            frames_in_phase: 0,
            completed_for: 0.0,
        })
    }

    /// Use the default audio device, with the pickup clip from
    /// `assets/pickup.wav` if it exists.
    #[must_use]
    pub fn with_default_audio(mut self) -> Self {
        self.audio = default_player(Path::new(PICKUP_SOUND_PATH));
        self
    }

    /// Use a specific sound player
    #[must_use]
    pub fn with_audio(mut self, audio: Box<dyn SoundPlayer>) -> Self {
        self.audio = audio;
        self
    }

    /// Let a scripted player drive the menu and the actor
    #[must_use]
    pub fn with_autopilot(mut self, autopilot: Autopilot) -> Self {
        self.autopilot = Some(autopilot);
        self
    }

    /// Queue a click in UI space; resolved on the next title-screen frame.
    pub fn click(&mut self, point: Vec2) {
        self.pending_click = Some(point);
    }

    /// Move the actor. Overridden each frame while the autopilot is on.
    pub fn set_actor_position(&mut self, position: Vec3) {
        self.actor_position = position;
    }

    #[must_use]
    pub const fn actor_position(&self) -> Vec3 {
        self.actor_position
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub const fn menu(&self) -> &TitleMenu {
        &self.menu
    }

    #[must_use]
    pub const fn hud(&self) -> &Hud {
        &self.hud
    }

    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub const fn session(&self) -> Option<&CollectibleSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn layout(&self) -> Option<&SceneLayout> {
        self.layout.as_ref()
    }

    #[must_use]
    pub const fn visuals(&self) -> &StarVisuals {
        &self.visuals
    }

    fn enter(&mut self, next: GamePhase, ctx: &mut EngineContext) {
        if !self.phase.can_enter(next) {
            log::warn!(
                "Ignoring phase change {} -> {}",
                self.phase.name(),
                next.name()
            );
            return;
        }
        log::info!("Phase {} -> {}", self.phase.name(), next.name());
        self.phase = next;
        self.frames_in_phase = 0;
        ctx.events.push(GameEvent::PhaseChanged { phase: next.name() });
    }

    fn start_round(&mut self, ctx: &mut EngineContext) -> Result<(), ConfigError> {
        let count = self.config.validate()?;
        let layout = SceneLayout::generate(&mut self.rng, count, &self.config.bounds)?;
        let session = CollectibleSession::from_positions(
            &self.config,
            layout.star_spawns.iter().copied(),
            &mut self.rng,
        )?;

        ctx.world.clear();
        ctx.world.spawn_layout(&layout);
        ctx.world.spawn((
            Name::new("player"),
            Transform::from_position(layout.player_start),
        ));
        self.visuals = StarVisuals::new();
        self.visuals.spawn_all(&session, &mut ctx.world);

        self.actor_position = layout.player_start;
        self.background = PLAY_BACKGROUND;
        self.hud = Hud::new();
        self.layout = Some(layout);
        self.session = Some(session);
        Ok(())
    }

    fn handle_menu_action(&mut self, action: MenuAction, ctx: &mut EngineContext) {
        ctx.events.push(GameEvent::ButtonClicked {
            id: action.button_id(),
        });
        match action {
            MenuAction::Play => match self.start_round(ctx) {
                Ok(()) => self.enter(GamePhase::Playing, ctx),
                Err(e) => {
                    log::error!("Could not start round: {e}");
                    ctx.quit();
                }
            },
            MenuAction::Quit => {
                log::info!("Quit from title screen");
                ctx.quit();
            }
        }
    }

    /// React to last frame's events.
    fn consume_events(&mut self, ctx: &mut EngineContext) {
        let events: Vec<GameEvent> = ctx.events.drain().collect();
        for event in &events {
            self.hud.apply(event);
            match event {
                GameEvent::StarCollected { id, .. } => self.visuals.despawn(*id, &mut ctx.world),
                GameEvent::PlaySound { name, volume } => self.audio.play(name, *volume),
                GameEvent::AllStarsCollected { score } => {
                    log::info!("Great job! {score} Sprinkle Stars collected");
                    self.enter(GamePhase::Completed, ctx);
                }
                _ => {}
            }
        }
    }

    fn update_title(&mut self, ctx: &mut EngineContext) {
        if let Some(pilot) = &self.autopilot {
            if self.frames_in_phase >= pilot.title_delay_frames && self.pending_click.is_none() {
                self.pending_click = self.menu.button_center(MenuAction::Play);
            }
        }
        if let Some(point) = self.pending_click.take() {
            if let Some(action) = self.menu.click(point) {
                self.handle_menu_action(action, ctx);
            }
        }
    }

    fn update_playing(&mut self, ctx: &mut EngineContext) {
        let dt = ctx.time.delta_seconds();
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Some(pilot) = &self.autopilot {
            self.actor_position = pilot.step(session, self.actor_position, dt);
        }

        let events = session.tick(dt, self.actor_position, self.config.overlap_radius);
        for event in events {
            if matches!(event, SessionEvent::Collected { .. }) {
                ctx.events.push(GameEvent::PlaySound {
                    name: PICKUP_SOUND,
                    volume: 1.0,
                });
            }
            ctx.events.push(event);
        }
        self.visuals.sync(session, &mut ctx.world);
    }

    fn update_completed(&mut self, ctx: &mut EngineContext) {
        self.completed_for += ctx.time.delta_seconds();
        if self.autopilot.is_some() && self.completed_for >= CELEBRATION_SECONDS {
            ctx.quit();
        }
    }
}

impl Game for CosmoJumpers {
    fn init(&mut self, _ctx: &mut EngineContext) {
        log::info!(
            "Cosmo Jumpers: {} stars, pickup radius {}",
            self.config.collectible_count,
            self.config.overlap_radius
        );
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        self.consume_events(ctx);
        self.hud.update(ctx.time.delta_seconds());

        match self.phase {
            GamePhase::Title => self.update_title(ctx),
            GamePhase::Playing => self.update_playing(ctx),
            GamePhase::Completed => self.update_completed(ctx),
        }
        self.frames_in_phase = self.frames_in_phase.saturating_add(1);
    }

    fn shutdown(&mut self, _ctx: &mut EngineContext) {
        match &self.session {
            Some(session) => log::info!(
                "Final score {} of {} ({:?})",
                session.score(),
                session.initial_count(),
                session.state()
            ),
            None => log::info!("Left before playing"),
        }
    }
}

impl std::fmt::Debug for CosmoJumpers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmoJumpers")
            .field("phase", &self.phase)
            .field("character", &self.menu.character_name())
            .field(
                "score",
                &self.session.as_ref().map(CollectibleSession::score),
            )
            .field(
                "completed",
                &self
                    .session
                    .as_ref()
                    .is_some_and(|s| s.state() == SessionState::Completed),
            )
            .finish_non_exhaustive()
    }
}
