//! Cosmo Jumpers: a star-collecting 3D platformer round
//!
//! This crate provides:
//! - The collectible session: seeded spawning, idle animation, pickup and scoring
//! - A headless fixed-step frame loop with a double-buffered event queue
//! - Scene layout, title menu and HUD as data for a host renderer
//! - One-shot pickup audio with rodio

pub mod audio;
pub mod core;
pub mod ecs;
pub mod game;
pub mod session;
pub mod ui;

// Re-exports for convenience
pub use glam;
pub use hecs;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::audio::{AudioManager, SilentPlayer, SoundPlayer};
    pub use crate::core::{Engine, EngineConfig, EngineContext, Game, GameEvent, SceneLayout};
    pub use crate::game::{Autopilot, CosmoJumpers, GamePhase};
    pub use crate::session::{
        CollectibleId, CollectibleSession, ConfigError, SessionConfig, SessionEvent, SessionState,
        SpawnBounds,
    };
    pub use crate::ui::{Color, Hud, TitleMenu};
    pub use glam::{Vec2, Vec3};
}
