//! Collectible session
//!
//! Tracks the pickups of one playthrough: where they are, how they idle,
//! when the player touches them, and the running score.

mod collectible;
mod config;
mod event;
mod lifecycle;

pub use collectible::{Collectible, CollectibleId};
pub use config::{Axis, AxisRange, ConfigError, SessionConfig, SpawnBounds};
pub use event::{HintPhase, SessionEvent, SessionState, TickEvents, score_text};
pub use lifecycle::CollectibleSession;
