/// Shared-ownership handles to backend GPU objects.
///
/// A `Handle<T>` is a reference-counted pointer with *identity* semantics:
/// equality and hashing compare the referent, not its contents. The wrapped
/// backend object is destroyed exactly once — by the payload's `Drop` — when
/// the last handle goes away.
///
/// There is no empty or moved-from state. Moving a handle transfers the
/// existing reference without touching the count; `clone()` is the sharing
/// operation and increments it. Counts are atomic only as an artifact of the
/// underlying `Arc`; GPU resources themselves remain confined to the thread
/// that owns their rendering context.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted handle to a backend object
pub struct Handle<T: ?Sized> {
    inner: Arc<T>,
}

impl<T> Handle<T> {
    /// Wrap a value into a fresh handle (count = 1)
    pub fn new(value: T) -> Self {
        Self { inner: Arc::new(value) }
    }
}

impl<T: ?Sized> Handle<T> {
    /// Borrow the underlying object
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// Address of the referent, used as its identity
    pub fn ptr_id(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const u8 as usize
    }

    /// Whether two handles refer to the same backend object
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.ptr_id() == other.ptr_id()
    }

    /// Number of live handles sharing the referent
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<T: ?Sized> From<Arc<T>> for Handle<T> {
    fn from(inner: Arc<T>) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: ?Sized> Deref for Handle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: ?Sized> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: ?Sized> Eq for Handle<T> {}

impl<T: ?Sized> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr_id().hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("ptr", &(self.ptr_id() as *const u8))
            .field("refs", &self.ref_count())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
