/// Unique identifiers for engine resources (meshes, materials, programs).
///
/// A `Uid` is a 64-bit value: a per-process random salt in the high 32 bits
/// and a monotonic counter in the low 32 bits. Two `Uid`s created in the
/// same process never collide, and their `Ord` follows creation order. The
/// salt keeps ids from different runs distinct (useful when ids leak into
/// captures or logs).
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

static NEXT: AtomicU64 = AtomicU64::new(0);
static SALT: OnceLock<u64> = OnceLock::new();

/// Unique resource identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uid(u64);

impl Uid {
    /// Generate a fresh identifier, unique within this process
    pub fn fresh() -> Self {
        let salt = *SALT.get_or_init(|| {
            let mut rng = SmallRng::from_entropy();
            u64::from(rng.next_u32())
        });
        let count = NEXT.fetch_add(1, Ordering::Relaxed) & 0xFFFF_FFFF;
        Uid((salt << 32) | count)
    }

    /// Raw 64-bit value (salt in the high half, counter in the low half)
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "uid_tests.rs"]
mod tests;
