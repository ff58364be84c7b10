//! Session configuration and validation
//!
//! All tunables of a collectible round live here. A config is validated
//! before any collectible is spawned, so a session never has to clamp or
//! guess at runtime.

use std::fmt;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Errors raised while building or loading a session configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Collectible count below zero
    #[error("collectible count must not be negative (got {0})")]
    NegativeCount(i32),

    /// An axis range with `min > max`
    #[error("spawn range on {axis} is inverted: min {min} > max {max}")]
    InvertedRange {
        /// Offending axis
        axis: Axis,
        /// Lower endpoint as given
        min: f32,
        /// Upper endpoint as given
        max: f32,
    },

    /// A range endpoint or tunable that is NaN or infinite
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    /// A tunable that must be zero or positive
    #[error("{name} must not be negative (got {value})")]
    Negative {
        /// Field name
        name: &'static str,
        /// Value as given
        value: f32,
    },

    /// Reading a config file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A config file did not parse
    #[error("Parse error: {0}")]
    Parse(String),
}

/// World axis, used for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// Inclusive range along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl AxisRange {
    /// Create a range; not validated until the owning config is.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check that both ends are finite and ordered.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFinite`] for a non-finite endpoint or a span
    /// too wide to represent, or [`ConfigError::InvertedRange`].
    pub fn validate(&self, axis: Axis) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFinite(match axis {
                Axis::X => "x range",
                Axis::Y => "y range",
                Axis::Z => "z range",
            }));
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        // The width has to fit in f32 too.
        if !(self.max - self.min).is_finite() {
            return Err(ConfigError::NonFinite(match axis {
                Axis::X => "x span",
                Axis::Y => "y span",
                Axis::Z => "z span",
            }));
        }
        Ok(())
    }

    /// Whether `value` lies inside the range (inclusive).
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Axis-aligned region collectibles are spawned in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnBounds {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

impl SpawnBounds {
    /// Bounds with the same horizontal range on x and z.
    #[must_use]
    pub const fn square(horizontal: AxisRange, vertical: AxisRange) -> Self {
        Self {
            x: horizontal,
            y: vertical,
            z: horizontal,
        }
    }

    /// Validate every axis.
    ///
    /// # Errors
    ///
    /// Returns the first axis error found, in x, y, z order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.x.validate(Axis::X)?;
        self.y.validate(Axis::Y)?;
        self.z.validate(Axis::Z)
    }

    /// Uniform point inside the bounds. Only meaningful once validated.
    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> glam::Vec3 {
        glam::Vec3::new(
            rng.gen_range(self.x.min..=self.x.max),
            rng.gen_range(self.y.min..=self.y.max),
            rng.gen_range(self.z.min..=self.z.max),
        )
    }

    /// Whether a point lies inside the bounds.
    #[must_use]
    pub fn contains(&self, point: glam::Vec3) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y) && self.z.contains(point.z)
    }
}

impl Default for SpawnBounds {
    fn default() -> Self {
        Self::square(AxisRange::new(-4.0, 4.0), AxisRange::new(0.6, 3.0))
    }
}

/// Tunables for one collectible round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of collectibles to spawn
    pub collectible_count: i32,
    /// Spawn region
    pub bounds: SpawnBounds,
    /// Peak vertical bob speed, in units per second
    pub bob_amplitude: f32,
    /// Spin rate about the vertical axis, in degrees per second
    pub rotation_rate_deg: f32,
    /// Pickup radius hosts should pass to `tick` for the player
    pub overlap_radius: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            collectible_count: 8,
            bounds: SpawnBounds::default(),
            bob_amplitude: 0.05,
            rotation_rate_deg: 60.0,
            overlap_radius: 0.75,
        }
    }
}

impl SessionConfig {
    /// Set the collectible count
    #[must_use]
    pub fn with_count(mut self, count: i32) -> Self {
        self.collectible_count = count;
        self
    }

    /// Set the spawn bounds
    #[must_use]
    pub fn with_bounds(mut self, bounds: SpawnBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the bob amplitude
    #[must_use]
    pub fn with_bob_amplitude(mut self, amplitude: f32) -> Self {
        self.bob_amplitude = amplitude;
        self
    }

    /// Set the spin rate
    #[must_use]
    pub fn with_rotation_rate(mut self, degrees_per_second: f32) -> Self {
        self.rotation_rate_deg = degrees_per_second;
        self
    }

    /// Set the pickup radius
    #[must_use]
    pub fn with_overlap_radius(mut self, radius: f32) -> Self {
        self.overlap_radius = radius;
        self
    }

    /// Validate the whole config and return the count as `usize`.
    ///
    /// # Errors
    ///
    /// Fails on a negative count, malformed bounds, or a negative or
    /// non-finite tunable.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        let count = usize::try_from(self.collectible_count)
            .map_err(|_| ConfigError::NegativeCount(self.collectible_count))?;
        self.bounds.validate()?;
        check_non_negative("bob_amplitude", self.bob_amplitude)?;
        check_non_negative("rotation_rate_deg", self.rotation_rate_deg)?;
        check_non_negative("overlap_radius", self.overlap_radius)?;
        Ok(count)
    }

    /// Parse and validate a config from RON text.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed RON, or any validation error.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a RON file.
    ///
    /// # Errors
    ///
    /// Returns an IO, parse, or validation error.
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Render the config as pretty RON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

fn check_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite(name));
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}
