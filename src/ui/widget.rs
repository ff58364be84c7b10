//! Text and button widgets as plain data for a host UI to draw

use glam::Vec2;

use super::color::Color;
use super::rect::{Anchor, Rect};

/// A line of text placed by its anchor point
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Where the anchor point sits
    pub position: Vec2,
    pub anchor: Anchor,
    pub scale: f32,
    pub color: Color,
    pub shadow: bool,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>, position: Vec2, color: Color) -> Self {
        Self {
            text: text.into(),
            position,
            anchor: Anchor::Center,
            scale: 1.0,
            color,
            shadow: false,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_shadow(mut self) -> Self {
        self.shadow = true;
        self
    }

    /// Pin a different point of the text box to `position`
    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Box of `size` the host lays this text out in
    #[must_use]
    pub fn area(&self, size: Vec2) -> Rect {
        Rect::new(self.position.x, self.position.y, size.x, size.y).with_anchor(self.anchor)
    }
}

/// A clickable button
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Identifier reported in `ButtonClicked`
    pub id: &'static str,
    pub text: String,
    pub rect: Rect,
    pub color: Color,
}

impl Button {
    #[must_use]
    pub fn new(id: &'static str, text: impl Into<String>, rect: Rect, color: Color) -> Self {
        Self {
            id,
            text: text.into(),
            rect,
            color,
        }
    }

    /// Whether a click at `point` lands on this button
    #[must_use]
    pub fn hit(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}
