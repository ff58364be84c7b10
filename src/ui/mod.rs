//! UI data
//!
//! Layout, widgets and HUD state for a host UI to draw. Nothing here
//! renders; hosts read labels and buttons and feed clicks back in.

mod color;
mod hud;
mod menu;
mod rect;
mod widget;

pub use color::Color;
pub use hud::{HIGHLIGHT_DELAY, HIGHLIGHT_DURATION, Hud};
pub use menu::{CHARACTER_NAMES, MenuAction, TITLE_BACKGROUND, TitleMenu};
pub use rect::{Anchor, Rect};
pub use widget::{Button, Label};
