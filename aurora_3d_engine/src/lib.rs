/*!
# Aurora 3D Engine

Core traits and types for the Aurora 3D rendering engine.

This crate provides the backend-agnostic rendering API using trait-based
dynamic polymorphism. Backend implementations (OpenGL, DirectX 9, ...) live in
sibling crates and are selected at context-creation time through an explicit
[`graphics::GraphicsConfig`] — there is no process-wide mode switch.

## Architecture

- **RenderingContext**: factory + frame interface implemented per backend
- **Buffer / VertexArray / Shader / Program / Texture**: GPU resource traits
- **Handle**: shared-ownership, identity-keyed reference to a backend object
- **RenderableObject**: vertex array + vertex/index buffers with a
  pre-render/render/post-render draw contract
- **Renderer**: scene batching — one program activation per program per
  frame, one vertex-array bind per distinct renderable
- **RenderGroup**: entity-level packed array sorted by
  (mesh UID, material UID, camera distance) with stable opaque handles
*/

// Internal modules
mod engine;
mod error;
pub mod graphics;
pub mod log;
pub mod resource;
pub mod scene;
pub mod utils;

// Main aurora3d namespace module
pub mod aurora3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine lifecycle + logger slot
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Graphics sub-module with the backend trait set
    pub mod graphics {
        pub use crate::graphics::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Utilities
    pub mod utils {
        pub use crate::utils::*;
    }
}

// Re-export math library at crate root
pub use glam;
