//! CPU-side resource model: mesh data and renderable objects.

mod mesh;
mod renderable_object;

pub use mesh::MeshData;
pub use renderable_object::{RenderableObject, VerticeSet};
