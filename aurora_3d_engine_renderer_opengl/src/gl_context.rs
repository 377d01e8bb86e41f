/// Shared OpenGL state: the loaded function table and the context version.
///
/// Every GL resource object holds an `Arc<GlShared>` so the function table
/// outlives all objects created from it; the last drop releases it.

/// Shared GL context state
pub(crate) struct GlShared {
    /// Loaded OpenGL function table
    pub(crate) gl: glow::Context,
    /// Context version the configuration requested (major, minor)
    pub(crate) gl_version: (u32, u32),
}
