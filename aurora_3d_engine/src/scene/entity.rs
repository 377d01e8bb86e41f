/// Entities as seen by the render group: mesh/material identity plus a world
/// position for camera-distance ordering.
///
/// The ordering key is (mesh UID, material UID, camera distance ascending);
/// two entities compare equal under it only when all three components match.

use std::sync::Mutex;

use glam::Vec3;

use crate::utils::Uid;

/// A renderable entity
///
/// Mesh and material identities are fixed at creation; the position is
/// interior-mutable so gameplay code can move a shared entity between frames.
#[derive(Debug)]
pub struct Entity {
    mesh_uid: Uid,
    material_uid: Uid,
    position: Mutex<Vec3>,
}

impl Entity {
    pub fn new(mesh_uid: Uid, material_uid: Uid, position: Vec3) -> Self {
        Self {
            mesh_uid,
            material_uid,
            position: Mutex::new(position),
        }
    }

    /// UID of the mesh this entity renders with
    pub fn mesh_uid(&self) -> Uid {
        self.mesh_uid
    }

    /// UID of the material this entity renders with
    pub fn material_uid(&self) -> Uid {
        self.material_uid
    }

    /// Current world position
    pub fn position(&self) -> Vec3 {
        *self.position.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Move the entity
    pub fn set_position(&self, position: Vec3) {
        *self.position.lock().unwrap_or_else(|e| e.into_inner()) = position;
    }

    /// Squared distance to `point` (ordering-equivalent to true distance)
    pub fn distance_squared_to(&self, point: Vec3) -> f32 {
        self.position().distance_squared(point)
    }
}
