//! Core engine module
//!
//! Contains the headless frame loop, timing, the event queue and the
//! static scene layout.

mod engine;
mod events;
mod scene;
mod time;

pub use engine::{Engine, EngineConfig, EngineContext, EngineError, Game, RunSummary};
pub use events::{EventQueue, GameEvent};
pub use scene::{GROUND_HALF_EXTENT, GroundTile, PLATFORM_COUNT, Platform, SceneError, SceneLayout};
pub use time::FrameClock;
