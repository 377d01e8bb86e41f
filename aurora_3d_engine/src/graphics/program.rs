/// Program trait and the link/validate state machine

use std::any::Any;

use glam::Mat4;

use crate::error::Result;
use crate::graphics::{Handle, Shader};
use crate::utils::Uid;

/// Program build state
///
/// `link_and_validate` drives `Created → Linked → Validated`. Both failure
/// states are terminal: the backend program object is deleted immediately and
/// the program cannot be relinked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Backend object allocated, not yet linked
    Created,
    /// Link succeeded, validation pending
    Linked,
    /// Link + validation succeeded (terminal success)
    Validated,
    /// Link failed, backend object torn down (terminal failure)
    LinkFailed,
    /// Validation failed, backend object torn down (terminal failure)
    ValidateFailed,
}

/// Shader program resource trait
///
/// Programs carry a [`Uid`] issued at creation; the batching renderer keys
/// its scene map on it.
pub trait Program {
    /// Stable identity of this program
    fn uid(&self) -> Uid;

    /// Attach a shader created for this backend
    ///
    /// Fails with an invalid-resource error if the shader belongs to a
    /// different backend.
    fn attach(&self, shader: &Handle<dyn Shader>) -> Result<()>;

    /// Detach a previously attached shader
    fn detach(&self, shader: &Handle<dyn Shader>);

    /// Link and then validate the program
    ///
    /// On failure at either stage the backend diagnostic log is retrieved
    /// and logged, the backend object is deleted, and the corresponding
    /// failure state becomes terminal — there is no retry.
    fn link_and_validate(&self) -> Result<()>;

    /// Make this program current
    fn activate(&self);

    /// Make no program current
    fn deactivate(&self);

    /// Upload the model matrix consumed by the program's vertex stage
    fn upload_model_matrix(&self, matrix: &Mat4) -> Result<()>;

    /// Current build state
    fn state(&self) -> LinkState;

    /// Backend type recovery
    fn as_any(&self) -> &dyn Any;
}
