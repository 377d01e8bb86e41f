use super::*;

// ============================================================================
// Basic allocation tests
// ============================================================================

#[test]
fn test_sequential_alloc() {
    let mut cells = CellAllocator::new();
    assert_eq!(cells.alloc(10), 0);
    assert_eq!(cells.alloc(11), 1);
    assert_eq!(cells.alloc(12), 2);
    assert_eq!(cells.get(0), 10);
    assert_eq!(cells.get(2), 12);
}

#[test]
fn test_new_is_empty() {
    let cells = CellAllocator::new();
    assert!(cells.is_empty());
    assert_eq!(cells.len(), 0);
    assert_eq!(cells.high_water_mark(), 0);
}

#[test]
fn test_default_is_empty() {
    let cells = CellAllocator::default();
    assert!(cells.is_empty());
}

// ============================================================================
// Read/write tests
// ============================================================================

#[test]
fn test_set_overwrites_value() {
    let mut cells = CellAllocator::new();
    let id = cells.alloc(5);
    cells.set(id, 99);
    assert_eq!(cells.get(id), 99);
}

#[test]
fn test_cells_are_independent() {
    let mut cells = CellAllocator::new();
    let a = cells.alloc(1);
    let b = cells.alloc(2);
    cells.set(a, 100);
    assert_eq!(cells.get(b), 2);
}

// ============================================================================
// Free and recycle tests
// ============================================================================

#[test]
fn test_free_and_recycle() {
    let mut cells = CellAllocator::new();
    let a = cells.alloc(1); // 0
    let b = cells.alloc(2); // 1
    cells.free(a);
    let c = cells.alloc(3); // 0 (recycled)
    assert_eq!(c, 0);
    assert_eq!(b, 1);
    assert_eq!(cells.get(c), 3);
}

#[test]
fn test_free_multiple_recycle_lifo() {
    // Free list is a stack (LIFO): last freed = first recycled
    let mut cells = CellAllocator::new();
    let a = cells.alloc(0); // 0
    let _b = cells.alloc(0); // 1
    let c = cells.alloc(0); // 2
    cells.free(a); // free list: [0]
    cells.free(c); // free list: [0, 2]

    assert_eq!(cells.alloc(0), 2);
    assert_eq!(cells.alloc(0), 0);
    // Free list exhausted, next is fresh
    assert_eq!(cells.alloc(0), 3);
}

// ============================================================================
// len() and high_water_mark() tests
// ============================================================================

#[test]
fn test_len_tracks_active_cells() {
    let mut cells = CellAllocator::new();
    let a = cells.alloc(0);
    let b = cells.alloc(0);
    assert_eq!(cells.len(), 2);

    cells.free(a);
    assert_eq!(cells.len(), 1);

    cells.free(b);
    assert_eq!(cells.len(), 0);
    assert!(cells.is_empty());
}

#[test]
fn test_high_water_mark_never_shrinks() {
    let mut cells = CellAllocator::new();
    let a = cells.alloc(0);
    let b = cells.alloc(0);
    assert_eq!(cells.high_water_mark(), 2);

    cells.free(a);
    cells.free(b);
    assert_eq!(cells.high_water_mark(), 2);

    cells.alloc(0);
    assert_eq!(cells.high_water_mark(), 2);
}

#[test]
fn test_with_capacity_starts_empty() {
    let cells = CellAllocator::with_capacity(64);
    assert!(cells.is_empty());
    assert_eq!(cells.high_water_mark(), 0);
}
