/// Shader trait, stages and shader source descriptors

use std::any::Any;
use std::fmt;
use std::path::PathBuf;

/// Shader pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/pixel shader
    Fragment,
    /// Geometry shader
    Geometry,
    /// Tessellation control shader
    TessellationControl,
    /// Tessellation evaluation shader
    TessellationEvaluation,
    /// Compute shader
    Compute,
}

impl ShaderStage {
    /// Minimum OpenGL version exposing this stage
    pub fn min_gl_version(self) -> (u32, u32) {
        match self {
            ShaderStage::Vertex | ShaderStage::Fragment => (2, 0),
            ShaderStage::Geometry => (3, 2),
            ShaderStage::TessellationControl | ShaderStage::TessellationEvaluation => (4, 0),
            ShaderStage::Compute => (4, 3),
        }
    }

    /// Whether an OpenGL context of `version` supports this stage
    pub fn supported_by_gl(self, version: (u32, u32)) -> bool {
        version >= self.min_gl_version()
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Geometry => "geometry",
            ShaderStage::TessellationControl => "tessellation control",
            ShaderStage::TessellationEvaluation => "tessellation evaluation",
            ShaderStage::Compute => "compute",
        };
        f.write_str(name)
    }
}

/// Where the shader text comes from
#[derive(Debug, Clone)]
pub enum ShaderSource {
    /// Read the source from a file at creation time
    File(PathBuf),
    /// Use the given source text directly
    Memory(String),
}

/// Descriptor for creating a shader
#[derive(Debug, Clone)]
pub struct ShaderDesc {
    /// Pipeline stage
    pub stage: ShaderStage,
    /// Source text location
    pub source: ShaderSource,
}

impl ShaderDesc {
    /// Shader compiled from a source file
    pub fn from_file(stage: ShaderStage, path: impl Into<PathBuf>) -> Self {
        Self { stage, source: ShaderSource::File(path.into()) }
    }

    /// Shader compiled from in-memory source text
    pub fn from_source(stage: ShaderStage, source: impl Into<String>) -> Self {
        Self { stage, source: ShaderSource::Memory(source.into()) }
    }
}

/// Shader resource trait
///
/// A shader is created attached to its owning program
/// ([`super::RenderingContext::create_shader`]) and detaches itself from that
/// program before deleting its backend object when the last handle drops.
pub trait Shader {
    /// Pipeline stage this shader was compiled for
    fn stage(&self) -> ShaderStage;

    /// Backend type recovery
    fn as_any(&self) -> &dyn Any;
}
