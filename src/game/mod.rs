//! Game shell
//!
//! Wires the collectible session into the frame loop together with the
//! title menu, HUD, audio and the visual mirror.

mod app;
mod autopilot;
mod phase;
mod visuals;

pub use app::{CosmoJumpers, PLAY_BACKGROUND};
pub use autopilot::Autopilot;
pub use phase::GamePhase;
pub use visuals::{STAR_COLOR, STAR_SCALE, StarVisuals};
