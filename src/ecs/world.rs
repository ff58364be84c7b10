//! World wrapper around hecs

use hecs::Entity;

use super::components::{Appearance, Name, Shape, Solid, Transform};
use crate::core::SceneLayout;

/// Mirror of everything a renderer would draw
pub struct World {
    /// The underlying hecs world
    pub inner: hecs::World,
}

impl World {
    /// Create a new empty world
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: hecs::World::new(),
        }
    }

    /// Spawn an entity with the given components
    pub fn spawn(&mut self, components: impl hecs::DynamicBundle) -> Entity {
        self.inner.spawn(components)
    }

    /// Despawn an entity
    ///
    /// # Errors
    ///
    /// Returns [`hecs::NoSuchEntity`] if the entity was already gone.
    pub fn despawn(&mut self, entity: Entity) -> Result<(), hecs::NoSuchEntity> {
        self.inner.despawn(entity)
    }

    /// Spawn one cube per ground tile and platform of `layout`.
    ///
    /// Returns the number of entities spawned.
    pub fn spawn_layout(&mut self, layout: &SceneLayout) -> usize {
        let ground = layout.ground.iter().map(|tile| {
            (
                Solid::Ground,
                Transform::from_position(tile.position).with_scale(tile.scale),
                Appearance {
                    shape: Shape::Cube,
                    color: tile.color,
                },
            )
        });
        let platforms = layout.platforms.iter().map(|p| {
            (
                Solid::Platform,
                Transform::from_position(p.position).with_scale(p.scale),
                Appearance {
                    shape: Shape::Cube,
                    color: p.color,
                },
            )
        });

        self.inner.spawn_batch(ground).count() + self.inner.spawn_batch(platforms).count()
    }

    /// Get a reference to a component
    ///
    /// # Errors
    ///
    /// Fails if the entity is gone or lacks the component.
    pub fn get<T: hecs::Component>(
        &self,
        entity: Entity,
    ) -> Result<hecs::Ref<'_, T>, hecs::ComponentError> {
        self.inner.get::<&T>(entity)
    }

    /// Check if an entity exists
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.inner.contains(entity)
    }

    /// Number of entities carrying component `T`
    #[must_use]
    pub fn count_with<T: hecs::Component>(&self) -> usize {
        self.inner.query::<&T>().iter().count()
    }

    /// Look up an entity by its debug name
    #[must_use]
    pub fn find_named(&self, name: &str) -> Option<Entity> {
        self.inner
            .query::<&Name>()
            .iter()
            .find(|(_, n)| n.0 == name)
            .map(|(entity, _)| entity)
    }

    /// Get the number of entities
    #[must_use]
    pub fn len(&self) -> u32 {
        self.inner.len()
    }

    /// Check if the world is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Clear all entities from the world
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
