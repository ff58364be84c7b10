//! RGBA colors and the game's palette

use serde::{Deserialize, Serialize};

/// Linear RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY: Self = Self::rgb(0.75, 0.75, 0.75);
    pub const AZURE: Self = Self::rgb(0.0, 0.5, 1.0);
    pub const ORANGE: Self = Self::rgb(1.0, 0.5, 0.0);
    pub const LIME: Self = Self::rgb(0.5, 1.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const GOLD: Self = Self::rgb(1.0, 0.84, 0.0);
    pub const VIOLET: Self = Self::rgb(0.5, 0.0, 1.0);
    pub const PINK: Self = Self::rgb(1.0, 0.0, 0.5);

    /// Opaque color
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from 0-255 channels
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Lighten toward white (positive) or darken toward black (negative).
    ///
    /// `amount` is clamped to `[-1, 1]`; alpha is untouched.
    #[must_use]
    pub fn tint(self, amount: f32) -> Self {
        let amount = amount.clamp(-1.0, 1.0);
        let (target, t) = if amount >= 0.0 {
            (1.0, amount)
        } else {
            (0.0, -amount)
        };
        let mix = |c: f32| c + (target - c) * t;
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
            a: self.a,
        }
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
