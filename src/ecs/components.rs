//! Components of the visual mirror

use glam::{Mat4, Quat, Vec3};

use crate::session::CollectibleId;
use crate::ui::Color;

/// Placement of a visual in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Create a transform with just a position
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set a uniform or per-axis scale
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Set the rotation
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Model matrix for a renderer
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// Name component for debugging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Primitive a renderer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Cube,
    Sphere,
}

/// Visual appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub shape: Shape,
    pub color: Color,
}

/// Marks the visual of a live star
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarVisual(pub CollectibleId);

/// Marks a solid box from the scene layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solid {
    Ground,
    Platform,
}
