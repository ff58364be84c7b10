//! Events and states reported by a collectible session

use glam::Vec3;
use smallvec::SmallVec;

use super::collectible::CollectibleId;

/// Something that happened during a single `tick`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The actor touched a collectible. It has already been removed.
    ///
    /// Hosts react by destroying the visual, playing the pickup sound and
    /// pulsing the hint highlight.
    Collected {
        id: CollectibleId,
        /// Position at the moment of pickup
        position: Vec3,
        /// Score after this pickup
        score: u32,
    },

    /// The live set just became empty. Fires once per session.
    AllCollected { score: u32 },
}

/// Events from one tick. Most frames produce none.
pub type TickEvents = SmallVec<[SessionEvent; 4]>;

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// At least one collectible is live
    Active,
    /// Nothing left to collect; terminal
    Completed,
}

/// Which hint the UI should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintPhase {
    #[default]
    CollectAll,
    AllCollected,
}

impl HintPhase {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::CollectAll => "Collect all the Sprinkle Stars!",
            Self::AllCollected => "Great job! Dance party time!",
        }
    }
}

/// Score line shown in the HUD.
#[must_use]
pub fn score_text(score: u32) -> String {
    format!("Sprinkle Stars: {score}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_text() {
        assert_eq!(HintPhase::default(), HintPhase::CollectAll);
        assert_eq!(HintPhase::CollectAll.text(), "Collect all the Sprinkle Stars!");
        assert_eq!(HintPhase::AllCollected.text(), "Great job! Dance party time!");
    }

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Sprinkle Stars: 0");
        assert_eq!(score_text(7), "Sprinkle Stars: 7");
    }
}
