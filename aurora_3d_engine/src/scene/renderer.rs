/// Scene batching: programs → shader bundles → renderables → placements.
///
/// The renderer keys a bundle per shader program and a multi-valued map from
/// renderable identity to world placements inside each bundle. `render()`
/// activates every program exactly once per call and binds every distinct
/// renderable exactly once per program, however many instances it has — the
/// state-change minimization this layer exists for.
///
/// Iteration order over programs is hash-map order: it is NOT stable across
/// runs, and clients must not rely on inter-program draw order.

use rustc_hash::FxHashMap;

use crate::engine_warn;
use crate::error::{Error, Result};
use crate::graphics::{Handle, Program, Shader};
use crate::resource::RenderableObject;
use crate::scene::WorldObject;
use crate::utils::Uid;

// ===== SHADER BUNDLE =====

/// A shader program, its stages, and the objects drawn with it
pub struct ShaderBundle {
    program: Handle<dyn Program>,
    shaders: Vec<Handle<dyn Shader>>,
    objects: FxHashMap<RenderableObject, Vec<WorldObject>>,
}

impl ShaderBundle {
    fn new(program: Handle<dyn Program>, shaders: Vec<Handle<dyn Shader>>) -> Self {
        Self {
            program,
            shaders,
            objects: FxHashMap::default(),
        }
    }

    /// The program this bundle draws with
    pub fn program(&self) -> &Handle<dyn Program> {
        &self.program
    }

    /// The shader stages attached to the program
    pub fn shaders(&self) -> &[Handle<dyn Shader>] {
        &self.shaders
    }

    /// Number of distinct renderables in the bundle
    pub fn renderable_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of (renderable, placement) instances in the bundle
    pub fn instance_count(&self) -> usize {
        self.objects.values().map(Vec::len).sum()
    }
}

// ===== RENDER STATS =====

/// Counters for one `render()` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Program activations issued (one per registered program)
    pub programs_activated: u32,
    /// Vertex-array binds issued (one per distinct renderable per program)
    pub renderables_bound: u32,
    /// Draw calls issued (one per placement)
    pub draw_calls: u32,
}

// ===== RENDERER =====

/// Program-batching scene renderer
pub struct Renderer {
    bundles: FxHashMap<Uid, ShaderBundle>,
}

impl Renderer {
    /// Create an empty renderer
    pub fn new() -> Self {
        Self { bundles: FxHashMap::default() }
    }

    /// Register a program with its shader stages.
    ///
    /// Re-registering a program identity overwrites the previous bundle
    /// (last write wins), discarding its objects.
    pub fn add_program(
        &mut self,
        program: Handle<dyn Program>,
        shaders: Vec<Handle<dyn Shader>>,
    ) {
        let uid = program.uid();
        self.bundles.insert(uid, ShaderBundle::new(program, shaders));
    }

    /// Replace a registered program and its shader list in one step.
    ///
    /// The bundle keeps its objects but is re-keyed under the replacement's
    /// identity; the old shader list is discarded entirely.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `old` was never registered.
    pub fn exchange_shaders(
        &mut self,
        old: &Handle<dyn Program>,
        replacement: Handle<dyn Program>,
        shaders: Vec<Handle<dyn Shader>>,
    ) -> Result<()> {
        let old_uid = old.uid();
        let mut bundle = self.bundles.remove(&old_uid).ok_or_else(|| {
            engine_warn!(
                "aurora3d::Renderer",
                "exchange_shaders: program {} is not registered",
                old_uid
            );
            Error::NotFound(format!("program {} is not registered", old_uid))
        })?;
        bundle.program = replacement;
        bundle.shaders = shaders;
        let new_uid = bundle.program.uid();
        self.bundles.insert(new_uid, bundle);
        Ok(())
    }

    /// Add a placement of `renderable` under `program`.
    ///
    /// Multiple insertions under the same renderable are expected — one
    /// renderable, many world placements.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `program` was never registered. No bundle is
    /// created implicitly.
    pub fn add_object(
        &mut self,
        program: &Handle<dyn Program>,
        renderable: RenderableObject,
        world: WorldObject,
    ) -> Result<()> {
        let uid = program.uid();
        let bundle = self.bundles.get_mut(&uid).ok_or_else(|| {
            engine_warn!(
                "aurora3d::Renderer",
                "add_object: program {} is not registered",
                uid
            );
            Error::NotFound(format!("program {} is not registered", uid))
        })?;
        bundle.objects.entry(renderable).or_default().push(world);
        Ok(())
    }

    /// Add a placement with the identity transform
    pub fn add_object_default(
        &mut self,
        program: &Handle<dyn Program>,
        renderable: RenderableObject,
    ) -> Result<()> {
        self.add_object(program, renderable, WorldObject::new())
    }

    /// Draw the scene.
    ///
    /// Per bundle: activate the program once, then for each distinct
    /// renderable run `pre_render` once, one matrix upload + `render` per
    /// placement, `post_render` once; deactivate the program after its
    /// bundle. On a draw error the current object's `post_render` and the
    /// program's `deactivate` still run before the error propagates.
    pub fn render(&self) -> Result<RenderStats> {
        let mut stats = RenderStats::default();
        for bundle in self.bundles.values() {
            bundle.program.activate();
            stats.programs_activated += 1;
            let result = Self::render_bundle(bundle, &mut stats);
            bundle.program.deactivate();
            result?;
        }
        Ok(stats)
    }

    fn render_bundle(bundle: &ShaderBundle, stats: &mut RenderStats) -> Result<()> {
        for (renderable, worlds) in &bundle.objects {
            renderable.pre_render();
            stats.renderables_bound += 1;
            let result = Self::draw_instances(bundle, renderable, worlds, stats);
            renderable.post_render();
            result?;
        }
        Ok(())
    }

    fn draw_instances(
        bundle: &ShaderBundle,
        renderable: &RenderableObject,
        worlds: &[WorldObject],
        stats: &mut RenderStats,
    ) -> Result<()> {
        for world in worlds {
            bundle.program.upload_model_matrix(world.matrix())?;
            renderable.render()?;
            stats.draw_calls += 1;
        }
        Ok(())
    }

    // ===== ACCESSORS =====

    /// Number of registered programs
    pub fn program_count(&self) -> usize {
        self.bundles.len()
    }

    /// The bundle registered for `program`, if any
    pub fn bundle(&self, program: &Handle<dyn Program>) -> Option<&ShaderBundle> {
        self.bundles.get(&program.uid())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
