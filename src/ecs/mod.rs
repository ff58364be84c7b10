//! Entity Component System module
//!
//! Built on top of the hecs ECS library. The world mirrors what a renderer
//! would draw; gameplay state lives in the session.

mod components;
mod world;

pub use components::{Appearance, Name, Shape, Solid, StarVisual, Transform};
pub use world::World;
