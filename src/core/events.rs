//! Frame-delayed event queue
//!
//! Gameplay code pushes [`GameEvent`]s while updating frame N; consumers
//! (HUD, audio, visuals) read them during frame N+1. Keeping the two
//! buffers apart means the order in which consumers run never changes
//! what they see.
//!
//! ```ignore
//! ctx.events.push(GameEvent::PlaySound { name: "pickup", volume: 1.0 });
//!
//! // next frame
//! for event in ctx.events.iter() {
//!     if let GameEvent::PlaySound { name, volume } = event {
//!         audio.play(name, *volume);
//!     }
//! }
//! ```

use std::collections::VecDeque;

use glam::Vec3;

use crate::session::{CollectibleId, SessionEvent};

/// Things that happened in the game, as seen by presentation systems.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GameEvent {
    /// A star was picked up.
    StarCollected {
        id: CollectibleId,
        position: Vec3,
        score: u32,
    },

    /// The last star was picked up.
    AllStarsCollected { score: u32 },

    /// Request to play a one-shot sound.
    PlaySound {
        /// Clip name as registered with the audio player
        name: &'static str,
        /// Volume multiplier (0.0 to 1.0)
        volume: f32,
    },

    /// A menu button was pressed.
    ButtonClicked { id: &'static str },

    /// The game moved to another phase.
    PhaseChanged { phase: &'static str },
}

impl From<SessionEvent> for GameEvent {
    fn from(event: SessionEvent) -> Self {
        match event {
            SessionEvent::Collected {
                id,
                position,
                score,
            } => Self::StarCollected {
                id,
                position,
                score,
            },
            SessionEvent::AllCollected { score } => Self::AllStarsCollected { score },
        }
    }
}

/// Double-buffered event queue.
#[derive(Debug)]
pub struct EventQueue {
    /// Written this frame
    pending: VecDeque<GameEvent>,
    /// Written last frame, readable now
    ready: VecDeque<GameEvent>,
}

impl EventQueue {
    const DEFAULT_CAPACITY: usize = 32;

    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(Self::DEFAULT_CAPACITY),
            ready: VecDeque::with_capacity(Self::DEFAULT_CAPACITY),
        }
    }

    /// Queue an event for next frame.
    #[inline]
    pub fn push(&mut self, event: impl Into<GameEvent>) {
        self.pending.push_back(event.into());
    }

    /// Queue several events for next frame, keeping their order.
    pub fn extend<E: Into<GameEvent>>(&mut self, events: impl IntoIterator<Item = E>) {
        self.pending.extend(events.into_iter().map(Into::into));
    }

    /// Frame boundary: last frame's writes become readable, and anything
    /// unread from the frame before is dropped.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.pending, &mut self.ready);
        self.pending.clear();
    }

    /// Events readable this frame
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.ready.iter()
    }

    /// Take the events readable this frame
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.ready.drain(..)
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.ready.len()
    }

    /// Events waiting for the next swap
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drop everything, e.g. on a phase change.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.ready.clear();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_visible_after_swap() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::AllStarsCollected { score: 8 });
        assert!(queue.is_empty());
        assert_eq!(queue.pending_count(), 1);

        queue.swap();
        assert_eq!(queue.len(), 1);
        assert_eq!(
            queue.iter().next(),
            Some(&GameEvent::AllStarsCollected { score: 8 })
        );
    }

    #[test]
    fn test_double_buffer_isolation() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::ButtonClicked { id: "play" });
        queue.swap();

        queue.push(GameEvent::PhaseChanged { phase: "playing" });
        let seen: Vec<_> = queue.iter().cloned().collect();
        assert_eq!(seen, vec![GameEvent::ButtonClicked { id: "play" }]);

        queue.swap();
        let seen: Vec<_> = queue.iter().cloned().collect();
        assert_eq!(seen, vec![GameEvent::PhaseChanged { phase: "playing" }]);

        // Unread events do not survive a second swap.
        queue.swap();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_session_events_convert_in_order() {
        let mut queue = EventQueue::new();
        queue.extend([
            SessionEvent::Collected {
                id: CollectibleId(2),
                position: Vec3::ONE,
                score: 8,
            },
            SessionEvent::AllCollected { score: 8 },
        ]);
        queue.swap();

        let events: Vec<_> = queue.drain().collect();
        assert_eq!(
            events,
            vec![
                GameEvent::StarCollected {
                    id: CollectibleId(2),
                    position: Vec3::ONE,
                    score: 8,
                },
                GameEvent::AllStarsCollected { score: 8 },
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::PlaySound {
            name: "pickup",
            volume: 1.0,
        });
        queue.swap();
        queue.push(GameEvent::AllStarsCollected { score: 1 });
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.pending_count(), 0);
    }
}
