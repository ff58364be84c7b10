//! Static scene layout
//!
//! The level is a checkerboard of ground tiles, a scatter of floating
//! platforms and the spawn points of the stars. Layouts can be generated
//! from a seed and saved to or loaded from RON (Rusty Object Notation) or
//! JSON.

use std::fs;
use std::path::Path;

use glam::Vec3;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::session::{ConfigError, SpawnBounds};
use crate::ui::Color;

/// Half-extent of the ground grid, in tiles
pub const GROUND_HALF_EXTENT: i32 = 4;
/// Number of floating platforms
pub const PLATFORM_COUNT: usize = 10;

const GROUND_Y: f32 = -1.0;
const GROUND_SCALE: Vec3 = Vec3::new(1.0, 0.2, 1.0);
const PLATFORM_HEIGHT: f32 = 0.3;
const PLATFORM_COLORS: [Color; 4] = [Color::ORANGE, Color::VIOLET, Color::PINK, Color::AZURE];

/// One cube of the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTile {
    pub position: Vec3,
    pub scale: Vec3,
    pub color: Color,
}

/// A floating box the player can jump on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub position: Vec3,
    pub scale: Vec3,
    pub color: Color,
}

/// Everything static in a level, plus where the stars start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub name: String,
    /// Layout format version
    pub version: u32,
    pub ground: Vec<GroundTile>,
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub star_spawns: Vec<Vec3>,
    /// Where the player starts
    pub player_start: Vec3,
}

impl SceneLayout {
    /// Empty layout
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: 1,
            ground: Vec::new(),
            platforms: Vec::new(),
            star_spawns: Vec::new(),
            player_start: Vec3::new(0.0, 1.0, 0.0),
        }
    }

    /// The default playground: ground grid, random platforms, and
    /// `star_count` star spawns inside `star_bounds`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `star_bounds` does not validate.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        star_count: usize,
        star_bounds: &SpawnBounds,
    ) -> Result<Self, ConfigError> {
        star_bounds.validate()?;
        let mut layout = Self::new("Playground");
        layout.ground = ground_grid();
        layout.platforms = (0..PLATFORM_COUNT).map(|_| random_platform(rng)).collect();
        layout.star_spawns = (0..star_count).map(|_| star_bounds.sample(rng)).collect();
        log::debug!(
            "Generated layout: {} tiles, {} platforms, {} stars",
            layout.ground.len(),
            layout.platforms.len(),
            layout.star_spawns.len()
        );
        Ok(layout)
    }

    /// Save the layout to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }

    /// Load a layout from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Render the layout as pretty RON
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Serialize`] if serialization fails
    pub fn to_ron_string(&self) -> Result<String, SceneError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| SceneError::Serialize(e.to_string()))
    }

    /// Parse a layout from RON text
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Deserialize`] on malformed input
    pub fn from_ron_str(source: &str) -> Result<Self, SceneError> {
        ron::from_str(source).map_err(|e| SceneError::Deserialize(e.to_string()))
    }

    /// Save the layout to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SceneError::Serialize(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a layout from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| SceneError::Deserialize(e.to_string()))
    }

    /// Number of solid boxes (ground and platforms)
    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.ground.len() + self.platforms.len()
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

fn ground_grid() -> Vec<GroundTile> {
    let range = -GROUND_HALF_EXTENT..=GROUND_HALF_EXTENT;
    range
        .clone()
        .flat_map(|x| range.clone().map(move |z| (x, z)))
        .map(|(x, z)| {
            let shade = if (x + z).rem_euclid(2) == 1 { -0.1 } else { 0.05 };
            GroundTile {
                position: Vec3::new(x as f32, GROUND_Y, z as f32),
                scale: GROUND_SCALE,
                color: Color::LIME.tint(shade),
            }
        })
        .collect()
}

fn random_platform<R: Rng + ?Sized>(rng: &mut R) -> Platform {
    let position = Vec3::new(
        rng.gen_range(-5.0..=5.0),
        rng.gen_range(0.5..=3.0),
        rng.gen_range(-5.0..=5.0),
    );
    let scale = Vec3::new(
        rng.gen_range(1.0..=2.0),
        PLATFORM_HEIGHT,
        rng.gen_range(1.0..=2.0),
    );
    let base = PLATFORM_COLORS.choose(rng).copied().unwrap_or(Color::AZURE);
    Platform {
        position,
        scale,
        color: base.tint(rng.gen_range(-0.1..=0.1)),
    }
}

/// Errors that can occur during layout operations
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
