//! Error types for the Aurora3D engine
//!
//! This module defines the error types used throughout the engine, covering
//! backend failures, resource validation, shader build stages and lookups.

use std::fmt;

/// Result type for Aurora3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Aurora3D engine errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Backend-specific error (OpenGL, DirectX, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, buffer, shader, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, context, subsystems)
    InitializationFailed(String),

    /// Lookup miss (program not registered, mode not in the registry, ...)
    NotFound(String),

    /// Shader stage compilation failed (backend diagnostic attached)
    CompileFailed(String),

    /// Program link stage failed (backend diagnostic attached)
    LinkFailed(String),

    /// Program validate stage failed (backend diagnostic attached)
    ValidateFailed(String),

    /// Shader stage not supported by the selected backend/version
    UnsupportedShaderStage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::CompileFailed(msg) => write!(f, "Shader compilation failed: {}", msg),
            Error::LinkFailed(msg) => write!(f, "Program link failed: {}", msg),
            Error::ValidateFailed(msg) => write!(f, "Program validation failed: {}", msg),
            Error::UnsupportedShaderStage(msg) => {
                write!(f, "Unsupported shader stage: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error::InvalidResource`] from a format string and log it as an
/// ERROR with the given source tag.
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("aurora3d::Renderer", "program {} not registered", uid);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::engine_error!($source, "{}", msg);
        $crate::aurora3d::Error::InvalidResource(msg)
    }};
}

/// Return early with the error produced by [`engine_err!`].
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
