/// Entity-level draw ordering: a densely packed array sorted by
/// (mesh UID, material UID, camera distance) with stable opaque handles.
///
/// Each entry owns a cell in a `CellAllocator` holding the entry's current
/// index in the packed array; the cell id is the `RenderHandle` given to the
/// caller. Removals keep every surviving cell pointing at its entry's
/// current slot — including the element swapped in by the fast path — so a
/// handle never dangles. `sort()` restores draw order after fast removals
/// and whenever the group is marked dirty (e.g. camera motion), rewriting
/// every cell afterwards.

use std::sync::{Arc, Weak};

use glam::Vec3;

use crate::scene::Entity;
use crate::utils::{CellAllocator, Uid};

/// Opaque, stable handle to an entity's slot in a [`RenderGroup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(u32);

/// One packed-array entry
struct EntityPair {
    /// Non-owning reference; the group never keeps an entity alive
    entity: Weak<Entity>,
    /// Cached at add() so ordering survives the entity being dropped
    mesh_uid: Uid,
    material_uid: Uid,
    /// Cell holding this entry's current packed index
    cell: u32,
}

/// Composite ordering key; dead entities order last within their UIDs
#[derive(PartialEq)]
struct SortKey {
    mesh_uid: Uid,
    material_uid: Uid,
    distance: f32,
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.mesh_uid
            .cmp(&other.mesh_uid)
            .then_with(|| self.material_uid.cmp(&other.material_uid))
            .then_with(|| self.distance.total_cmp(&other.distance))
    }
}

/// Packed, sortable collection of entities with stable handles
pub struct RenderGroup {
    entries: Vec<EntityPair>,
    cells: CellAllocator,
    dirty: bool,
}

impl RenderGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cells: CellAllocator::new(),
            dirty: false,
        }
    }

    /// Create a group with storage reserved for `capacity` entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            cells: CellAllocator::with_capacity(capacity),
            dirty: false,
        }
    }

    /// Add an entity, returning its stable handle.
    ///
    /// The group holds a weak reference only; dropping the entity elsewhere
    /// makes it order last until removed.
    pub fn add(&mut self, entity: &Arc<Entity>) -> RenderHandle {
        let index = self.entries.len() as u32;
        let cell = self.cells.alloc(index);
        self.entries.push(EntityPair {
            entity: Arc::downgrade(entity),
            mesh_uid: entity.mesh_uid(),
            material_uid: entity.material_uid(),
            cell,
        });
        self.dirty = true;
        RenderHandle(cell)
    }

    /// Remove an entity — fast path.
    ///
    /// Swap-removes the slot in O(1): the last element moves into the freed
    /// slot and its cell is rewritten to the new index immediately, so all
    /// surviving handles stay valid. Relative order is scrambled; call
    /// [`sort`](Self::sort) before the next ordered traversal.
    pub fn remove(&mut self, handle: RenderHandle) {
        let index = self.cells.get(handle.0) as usize;
        self.cells.free(handle.0);
        self.entries.swap_remove(index);
        if index < self.entries.len() {
            let moved_cell = self.entries[index].cell;
            self.cells.set(moved_cell, index as u32);
            self.dirty = true;
        }
    }

    /// Remove an entity — ordered path.
    ///
    /// Shifts every subsequent element down one slot (O(n)), rewriting their
    /// cells in the same pass. Relative order of the survivors is preserved.
    pub fn remove_single(&mut self, handle: RenderHandle) {
        let index = self.cells.get(handle.0) as usize;
        self.cells.free(handle.0);
        self.entries.remove(index);
        for slot in index..self.entries.len() {
            let cell = self.entries[slot].cell;
            self.cells.set(cell, slot as u32);
        }
    }

    /// Sort by (mesh UID, material UID, camera distance ascending).
    ///
    /// No-op while the group is clean. After sorting, every cell is
    /// rewritten to its entry's new slot, so all outstanding handles remain
    /// consistent with the new order. Distance uses the squared metric
    /// (order-equivalent); entities whose weak reference is dead sort last
    /// within their cached UIDs.
    ///
    /// Call [`mark_dirty`](Self::mark_dirty) + `sort` once per frame before
    /// rendering distance-ordered (e.g. transparent) groups when the camera
    /// has moved.
    pub fn sort(&mut self, camera_position: Vec3) {
        if !self.dirty {
            return;
        }
        self.entries.sort_by_cached_key(|pair| SortKey {
            mesh_uid: pair.mesh_uid,
            material_uid: pair.material_uid,
            distance: pair
                .entity
                .upgrade()
                .map(|e| e.distance_squared_to(camera_position))
                .unwrap_or(f32::INFINITY),
        });
        for (slot, pair) in self.entries.iter().enumerate() {
            self.cells.set(pair.cell, slot as u32);
        }
        self.dirty = false;
    }

    /// Force the next [`sort`](Self::sort) to run (camera moved, etc.)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether the packed order is stale
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Current packed index of the entity behind `handle`
    pub fn index_of(&self, handle: RenderHandle) -> u32 {
        self.cells.get(handle.0)
    }

    /// Entity at a packed index, if it is still alive
    pub fn entity_at(&self, index: u32) -> Option<Arc<Entity>> {
        self.entries.get(index as usize)?.entity.upgrade()
    }

    /// Number of entities in the group
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RenderGroup {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "render_group_tests.rs"]
mod tests;
