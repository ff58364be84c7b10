//! Keeps one ECS entity per live star

use hecs::Entity;
use rustc_hash::FxHashMap;

use crate::ecs::{Appearance, Shape, StarVisual, Transform, World};
use crate::session::{CollectibleId, CollectibleSession};
use crate::ui::Color;

/// Rendered size of a star
pub const STAR_SCALE: f32 = 0.3;

/// Star color: light yellow
pub const STAR_COLOR: Color = Color::rgb(1.0, 1.0, 0.2);

/// Map from collectibles to the entities that draw them.
#[derive(Debug, Default)]
pub struct StarVisuals {
    entities: FxHashMap<CollectibleId, Entity>,
}

impl StarVisuals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a visual for every live collectible that lacks one.
    pub fn spawn_all(&mut self, session: &CollectibleSession, world: &mut World) {
        for star in session.collectibles() {
            self.entities.entry(star.id()).or_insert_with(|| {
                world.spawn((
                    StarVisual(star.id()),
                    Transform::from_position(star.position())
                        .with_rotation(star.rotation())
                        .with_scale(glam::Vec3::splat(STAR_SCALE)),
                    Appearance {
                        shape: Shape::Sphere,
                        color: STAR_COLOR,
                    },
                ))
            });
        }
    }

    /// Copy spin and bob from the session onto the visuals.
    pub fn sync(&self, session: &CollectibleSession, world: &mut World) {
        for star in session.collectibles() {
            let Some(&entity) = self.entities.get(&star.id()) else {
                continue;
            };
            if let Ok(mut transform) = world.inner.get::<&mut Transform>(entity) {
                transform.position = star.position();
                transform.rotation = star.rotation();
            }
        }
    }

    /// Destroy the visual of a collected star. Unknown ids are ignored.
    pub fn despawn(&mut self, id: CollectibleId, world: &mut World) {
        if let Some(entity) = self.entities.remove(&id) {
            if world.despawn(entity).is_err() {
                log::warn!("Visual for {id} was already gone");
            }
        }
    }

    /// Entity drawing `id`, if any
    #[must_use]
    pub fn entity(&self, id: CollectibleId) -> Option<Entity> {
        self.entities.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
