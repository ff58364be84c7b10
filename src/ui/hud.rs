//! In-game HUD: score line, hint line, and the pickup highlight pulse

use glam::Vec2;

use super::color::Color;
use super::rect::Anchor;
use super::widget::Label;
use crate::core::GameEvent;
use crate::session::{HintPhase, score_text};

/// Delay between a pickup and the hint turning gold, in seconds
pub const HIGHLIGHT_DELAY: f32 = 0.05;
/// How long the hint stays gold, in seconds
pub const HIGHLIGHT_DURATION: f32 = 0.4;

/// Score and hint labels plus the timers that drive the highlight.
///
/// The HUD owns its own scheduling: `update(dt)` must be called every frame
/// for a scheduled highlight to start and to revert.
#[derive(Debug, Clone)]
pub struct Hud {
    score: Label,
    hint: Label,
    /// Color the hint returns to after a highlight
    resting_color: Color,
    /// Countdown until the hint turns gold
    flash_in: Option<f32>,
    /// Countdown until the hint reverts
    revert_in: Option<f32>,
}

impl Hud {
    #[must_use]
    pub fn new() -> Self {
        let resting_color = Color::YELLOW;
        Self {
            score: Label::new(score_text(0), Vec2::new(-0.85, 0.45), Color::WHITE)
                .with_anchor(Anchor::TopLeft),
            hint: Label::new(
                HintPhase::CollectAll.text(),
                Vec2::new(0.0, 0.45),
                resting_color,
            ),
            resting_color,
            flash_in: None,
            revert_in: None,
        }
    }

    /// React to a game event. Unrelated events are ignored.
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::StarCollected { score, .. } => {
                self.score.text = score_text(*score);
                // A pulse already counting down covers this pickup too.
                if self.flash_in.is_none() {
                    self.flash_in = Some(HIGHLIGHT_DELAY);
                }
            }
            GameEvent::AllStarsCollected { .. } => {
                HintPhase::AllCollected.text().clone_into(&mut self.hint.text);
            }
            _ => {}
        }
    }

    /// Advance highlight timers by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let mut remaining = dt.max(0.0);

        if let Some(left) = self.flash_in {
            if remaining < left {
                self.flash_in = Some(left - remaining);
                remaining = 0.0;
            } else {
                remaining -= left;
                self.flash_in = None;
                self.hint.color = Color::GOLD;
                self.revert_in = Some(HIGHLIGHT_DURATION);
            }
        }

        if let Some(left) = self.revert_in {
            if remaining < left {
                self.revert_in = Some(left - remaining);
            } else {
                self.revert_in = None;
                self.hint.color = self.resting_color;
            }
        }
    }

    #[must_use]
    pub const fn score_label(&self) -> &Label {
        &self.score
    }

    #[must_use]
    pub const fn hint_label(&self) -> &Label {
        &self.hint
    }

    /// Whether the hint is currently drawn in the highlight color
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.revert_in.is_some()
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
