//! Small supporting utilities: stable index cells and UID generation.

mod cell_allocator;
mod uid;

pub use cell_allocator::CellAllocator;
pub use uid::Uid;
