//! Scene layer: world transforms, program batching and the entity-level
//! render group.

mod entity;
mod render_group;
mod renderer;
mod world_object;

pub use entity::Entity;
pub use render_group::{RenderGroup, RenderHandle};
pub use renderer::{RenderStats, Renderer, ShaderBundle};
pub use world_object::WorldObject;
