//! RenderGroup integration tests — mixed add/remove/sort workloads over the
//! public API, checking that stable handles keep dereferencing to current
//! indices through compactions and re-sorts.

use aurora_3d_engine::aurora3d::scene::{Entity, RenderGroup, RenderHandle};
use aurora_3d_engine::aurora3d::utils::Uid;
use aurora_3d_engine::glam::Vec3;
use std::sync::Arc;

fn entity_at(x: f32) -> Arc<Entity> {
    Arc::new(Entity::new(Uid::fresh(), Uid::fresh(), Vec3::new(x, 0.0, 0.0)))
}

/// Every live handle must point at the slot holding its entity.
fn assert_handles_consistent(group: &RenderGroup, pairs: &[(RenderHandle, Arc<Entity>)]) {
    for (handle, entity) in pairs {
        let index = group.index_of(*handle);
        let at_slot = group
            .entity_at(index)
            .expect("handle points at an empty slot");
        assert!(
            Arc::ptr_eq(&at_slot, entity),
            "handle dereferences to the wrong entity"
        );
    }
}

#[test]
fn churn_workload_keeps_handles_valid() {
    let mut group = RenderGroup::with_capacity(64);
    let mut live: Vec<(RenderHandle, Arc<Entity>)> = Vec::new();

    // Grow
    for i in 0..40 {
        let entity = entity_at(i as f32);
        let handle = group.add(&entity);
        live.push((handle, entity));
    }
    assert_handles_consistent(&group, &live);

    // Interleave fast removals (every third) with adds
    let mut removed = Vec::new();
    for i in (0..live.len()).rev() {
        if i % 3 == 0 {
            let (handle, _) = live.remove(i);
            group.remove(handle);
            removed.push(handle);
        }
    }
    assert_handles_consistent(&group, &live);

    for i in 0..10 {
        let entity = entity_at(100.0 + i as f32);
        let handle = group.add(&entity);
        live.push((handle, entity));
    }
    assert_handles_consistent(&group, &live);

    // Restore order and re-check
    group.sort(Vec3::ZERO);
    assert_handles_consistent(&group, &live);
    assert_eq!(group.len(), live.len());
}

#[test]
fn ordered_removal_interleaved_with_sorts() {
    let mut group = RenderGroup::new();
    let mut live: Vec<(RenderHandle, Arc<Entity>)> = Vec::new();

    for i in 0..20 {
        let entity = entity_at(i as f32);
        let handle = group.add(&entity);
        live.push((handle, entity));
    }
    group.sort(Vec3::ZERO);

    // Ordered removals keep everything consistent without further sorts
    for _ in 0..5 {
        let (handle, _) = live.remove(live.len() / 2);
        group.remove_single(handle);
        assert_handles_consistent(&group, &live);
    }

    // Distances changed: resort and verify ascending order by mesh UID
    group.mark_dirty();
    group.sort(Vec3::new(-1.0, 0.0, 0.0));
    assert_handles_consistent(&group, &live);

    let ids: Vec<Uid> = (0..group.len() as u32)
        .map(|i| group.entity_at(i).unwrap().mesh_uid())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn moving_entities_resort_by_distance() {
    let mesh = Uid::fresh();
    let material = Uid::fresh();
    let a = Arc::new(Entity::new(mesh, material, Vec3::new(1.0, 0.0, 0.0)));
    let b = Arc::new(Entity::new(mesh, material, Vec3::new(5.0, 0.0, 0.0)));

    let mut group = RenderGroup::new();
    let h_a = group.add(&a);
    let h_b = group.add(&b);
    group.sort(Vec3::ZERO);
    assert_eq!(group.index_of(h_a), 0);

    // Gameplay moves `a` beyond `b`; the caller marks the group dirty
    a.set_position(Vec3::new(50.0, 0.0, 0.0));
    group.mark_dirty();
    group.sort(Vec3::ZERO);

    assert_eq!(group.index_of(h_b), 0);
    assert_eq!(group.index_of(h_a), 1);
}
