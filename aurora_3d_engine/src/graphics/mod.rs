/// Graphics module - backend resource traits and the context factory layer

// Module declarations
pub mod buffer;
pub mod handle;
pub mod program;
pub mod rendering_context;
pub mod shader;
pub mod texture;
pub mod vertex_array;

// Re-exports
pub use buffer::*;
pub use handle::*;
pub use program::*;
pub use rendering_context::*;
pub use shader::*;
pub use texture::*;
pub use vertex_array::*;

// Mock rendering context for tests (no GPU required)
#[cfg(test)]
pub mod mock_context;
