/// World placement of a renderable: position, rotation, scale and the cached
/// world matrix.
///
/// The matrix is rebuilt on every mutation, so `matrix()` is always current
/// and free to read in the draw loop. Rotation is Euler angles in radians,
/// applied yaw (Y), pitch (X), roll (Z).

use glam::{EulerRot, Mat4, Quat, Vec3};

/// A single placement of a renderable in the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldObject {
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
    world_matrix: Mat4,
}

impl WorldObject {
    /// Identity placement at the origin
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            world_matrix: Mat4::IDENTITY,
        }
    }

    /// Placement at `position` with no rotation and unit scale
    pub fn at(position: Vec3) -> Self {
        let mut object = Self::new();
        object.set_position(position);
        object
    }

    /// Fully specified placement
    pub fn with(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        let mut object = Self {
            position,
            rotation,
            scale,
            world_matrix: Mat4::IDENTITY,
        };
        object.rebuild_matrix();
        object
    }

    // ===== ACCESSORS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Cached world matrix (translate · rotate · scale)
    pub fn matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    // ===== MUTATORS =====

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self.rebuild_matrix();
        self
    }

    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self.rebuild_matrix();
        self
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self.rebuild_matrix();
        self
    }

    /// Uniform scale on all three axes
    pub fn set_uniform_scale(&mut self, scale: f32) -> &mut Self {
        self.set_scale(Vec3::splat(scale))
    }

    pub fn add_position(&mut self, delta: Vec3) -> &mut Self {
        self.position += delta;
        self.rebuild_matrix();
        self
    }

    pub fn add_rotation(&mut self, delta: Vec3) -> &mut Self {
        self.rotation += delta;
        self.rebuild_matrix();
        self
    }

    pub fn add_scale(&mut self, delta: Vec3) -> &mut Self {
        self.scale += delta;
        self.rebuild_matrix();
        self
    }

    fn rebuild_matrix(&mut self) {
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        );
        self.world_matrix =
            Mat4::from_scale_rotation_translation(self.scale, rotation, self.position);
    }
}

impl Default for WorldObject {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "world_object_tests.rs"]
mod tests;
