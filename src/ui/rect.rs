//! Rectangle and layout primitives
//!
//! UI space is normalized: the origin is the screen center, y points up,
//! and one unit is the screen height.

use glam::Vec2;

/// Which point of a widget its `position` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    #[default]
    Center,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Offset of the anchor point from the widget center, in units of size
    #[must_use]
    pub const fn offset(&self) -> (f32, f32) {
        match self {
            Self::TopLeft => (-0.5, 0.5),
            Self::TopCenter => (0.0, 0.5),
            Self::TopRight => (0.5, 0.5),
            Self::MiddleLeft => (-0.5, 0.0),
            Self::Center => (0.0, 0.0),
            Self::MiddleRight => (0.5, 0.0),
            Self::BottomLeft => (-0.5, -0.5),
            Self::BottomCenter => (0.0, -0.5),
            Self::BottomRight => (0.5, -0.5),
        }
    }
}

/// A 2D rectangle for UI layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Position of the anchor point
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
    pub anchor: Anchor,
}

impl Rect {
    /// Rectangle centered on `(x, y)`
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
            anchor: Anchor::Center,
        }
    }

    /// Set anchor
    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Center of the rectangle
    #[must_use]
    pub fn center(&self) -> Vec2 {
        let (ox, oy) = self.anchor.offset();
        self.position - Vec2::new(ox * self.size.x, oy * self.size.y)
    }

    /// Bounds as (min, max)
    #[must_use]
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = self.size * 0.5;
        let center = self.center();
        (center - half, center + half)
    }

    /// Check if a point is inside the rectangle (edges included)
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = self.bounds();
        point.cmpge(min).all() && point.cmple(max).all()
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.1, 0.1)
    }
}
