//! Repository Layer
//!
//! Key-value storage abstraction and the product blob adapter on top of it.

mod memory;
mod storage;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
pub use storage::ProductStorage;
pub use traits::KeyValueStore;
