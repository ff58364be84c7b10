//! Title screen

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;

use super::color::Color;
use super::rect::Rect;
use super::widget::{Button, Label};

/// Names the mascot can be given on the title screen.
pub const CHARACTER_NAMES: [&str; 5] = [
    "Captain Bubbleboots",
    "Princess Pancake",
    "Astro Sprinkle",
    "Gizmo Gigglebeard",
    "Zoomer Noodle",
];

/// Backdrop color while the title screen is up
pub const TITLE_BACKGROUND: Color = Color::rgb(0.09, 0.09, 0.16);

/// What a menu click asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Quit,
}

impl MenuAction {
    /// Button id that triggers this action
    #[must_use]
    pub const fn button_id(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Quit => "quit",
        }
    }
}

/// Labels and buttons of the title screen.
#[derive(Debug, Clone)]
pub struct TitleMenu {
    character_name: &'static str,
    labels: Vec<Label>,
    buttons: Vec<Button>,
}

impl TitleMenu {
    /// Build the menu with a randomly chosen mascot name.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let name = CHARACTER_NAMES
            .choose(rng)
            .copied()
            .unwrap_or(CHARACTER_NAMES[0]);
        Self::with_character(name)
    }

    /// Build the menu for a given mascot name.
    #[must_use]
    pub fn with_character(character_name: &'static str) -> Self {
        let labels = vec![
            Label::new("Cosmo Jumpers", Vec2::new(0.0, 0.35), Color::AZURE)
                .with_scale(2.0)
                .with_shadow(),
            Label::new("Designed by Kai Nava", Vec2::new(0.0, 0.26), Color::ORANGE),
            Label::new(
                format!("Starring {character_name}!"),
                Vec2::new(0.0, 0.18),
                Color::LIME,
            ),
            Label::new(
                "Use WASD + mouse to move. Space to jump.",
                Vec2::new(0.0, -0.25),
                Color::LIGHT_GRAY,
            )
            .with_scale(0.8),
        ];

        let buttons = vec![
            Button::new(
                MenuAction::Play.button_id(),
                "Play",
                Rect::new(0.0, 0.05, 0.35, 0.1),
                Color::AZURE,
            ),
            Button::new(
                MenuAction::Quit.button_id(),
                "Quit",
                Rect::new(0.0, -0.08, 0.35, 0.1),
                Color::GRAY,
            ),
        ];

        Self {
            character_name,
            labels,
            buttons,
        }
    }

    #[must_use]
    pub const fn character_name(&self) -> &'static str {
        self.character_name
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Resolve a click in UI space to a menu action.
    #[must_use]
    pub fn click(&self, point: Vec2) -> Option<MenuAction> {
        let button = self.buttons.iter().find(|b| b.hit(point))?;
        [MenuAction::Play, MenuAction::Quit]
            .into_iter()
            .find(|action| action.button_id() == button.id)
    }

    /// Center of the button for `action`, for scripted clicks
    #[must_use]
    pub fn button_center(&self, action: MenuAction) -> Option<Vec2> {
        self.buttons
            .iter()
            .find(|b| b.id == action.button_id())
            .map(|b| b.rect.center())
    }
}
