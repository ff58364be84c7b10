//! Headless engine and main game loop

use crate::core::{EventQueue, FrameClock};
use crate::ecs::World;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Name used in logs
    pub title: String,
    /// Simulation rate; every frame advances by `1 / target_fps` seconds
    pub target_fps: u32,
    /// Stop after this many frames even if the game has not quit (0 = no limit)
    pub max_frames: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: String::from("Cosmo Jumpers"),
            target_fps: 60,
            max_frames: 0,
        }
    }
}

impl EngineConfig {
    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the simulation rate
    #[must_use]
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    /// Set the frame limit
    #[must_use]
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = frames;
        self
    }
}

/// Errors that stop the engine before it runs
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Unusable engine settings
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

/// Game trait that users implement
pub trait Game {
    /// Called once before the first frame
    fn init(&mut self, ctx: &mut EngineContext);

    /// Called every frame
    fn update(&mut self, ctx: &mut EngineContext);

    /// Called once after the last frame
    fn shutdown(&mut self, _ctx: &mut EngineContext) {}
}

/// Context passed to game callbacks
#[derive(Default)]
pub struct EngineContext {
    /// Frame timing
    pub time: FrameClock,
    /// Events from the previous frame, and writes for the next
    pub events: EventQueue,
    /// Visual entities mirrored for a renderer
    pub world: World,
    should_quit: bool,
}

impl EngineContext {
    /// Context stepping at `fps`
    #[must_use]
    pub fn new(fps: u32) -> Self {
        Self {
            time: FrameClock::from_fps(fps),
            ..Self::default()
        }
    }

    /// Request engine shutdown after the current frame
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Check if engine should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames simulated
    pub frames: u64,
    /// Whether the game asked to stop (as opposed to hitting `max_frames`)
    pub quit_requested: bool,
}

/// Main engine struct
pub struct Engine<G: Game> {
    config: EngineConfig,
    game: G,
}

impl<G: Game> Engine<G> {
    /// Create a new engine with the given game
    pub fn new(config: EngineConfig, game: G) -> Self {
        Self { config, game }
    }

    /// Run frames until the game quits or the frame limit is hit.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if `target_fps` is zero.
    pub fn run(mut self) -> Result<RunSummary, EngineError> {
        init_logging();

        if self.config.target_fps == 0 {
            return Err(EngineError::InvalidConfig(
                "target_fps must be greater than zero".into(),
            ));
        }

        log::info!(
            "Starting engine: {} at {} fps",
            self.config.title,
            self.config.target_fps
        );

        let mut ctx = EngineContext::new(self.config.target_fps);
        self.game.init(&mut ctx);

        loop {
            ctx.time.advance();
            ctx.events.swap();
            self.game.update(&mut ctx);

            if ctx.should_quit() {
                break;
            }
            if self.config.max_frames != 0 && ctx.time.frame() >= self.config.max_frames {
                log::warn!("Frame limit {} reached", self.config.max_frames);
                break;
            }
        }

        self.game.shutdown(&mut ctx);

        let summary = RunSummary {
            frames: ctx.time.frame(),
            quit_requested: ctx.should_quit(),
        };
        log::info!(
            "Engine stopped after {} frames ({:.1}s simulated)",
            summary.frames,
            ctx.time.elapsed_seconds()
        );
        Ok(summary)
    }

    /// Borrow the game, e.g. to inspect it after construction
    pub fn game(&self) -> &G {
        &self.game
    }
}

/// Install `env_logger`, showing `info` and above unless `RUST_LOG` says
/// otherwise. Hosts and tests may have installed a logger already.
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already installed");
    }
}
