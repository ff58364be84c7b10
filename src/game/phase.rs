//! Top-level game phases

/// Where the game is. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title menu is showing
    #[default]
    Title,
    /// Stars are out and the player is collecting
    Playing,
    /// Every star has been collected
    Completed,
}

impl GamePhase {
    /// Name used in logs and `PhaseChanged` events
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Playing => "playing",
            Self::Completed => "completed",
        }
    }

    /// Whether moving to `next` is allowed
    #[must_use]
    pub const fn can_enter(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Title, Self::Playing) | (Self::Playing, Self::Completed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert!(GamePhase::Title.can_enter(GamePhase::Playing));
        assert!(GamePhase::Playing.can_enter(GamePhase::Completed));
        assert!(!GamePhase::Completed.can_enter(GamePhase::Playing));
        assert!(!GamePhase::Completed.can_enter(GamePhase::Title));
        assert!(!GamePhase::Title.can_enter(GamePhase::Completed));
    }
}
