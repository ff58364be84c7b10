//! Audio playback
//!
//! Built on top of the rodio audio library. Sounds are preloaded clips
//! played fire-and-forget; a missing device or asset degrades to silence.

mod manager;
mod source;

pub use manager::{AudioManager, SilentPlayer, SoundPlayer, default_player};
pub use source::{AudioError, Clip};

/// Name the pickup clip is registered under
pub const PICKUP_SOUND: &str = "pickup";

/// Where the pickup clip is looked for, relative to the working directory
pub const PICKUP_SOUND_PATH: &str = "assets/pickup.wav";
