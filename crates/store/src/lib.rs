//! # loadpack-store
//!
//! Repository implementations for the loadpack placement core.
//!
//! Two backends of the core's [`Store`](loadpack_core::Store) interface:
//!
//! - [`MemoryStore`]: insertion-ordered, in-process (tests, embedding)
//! - [`JsonStore`]: one JSON file per entity kind, keyed by id, matching
//!   the legacy data-file layout
//!
//! Entities convert to and from their persisted shape through the
//! [`Persist`] trait in [`record`].

pub mod json;
pub mod memory;
pub mod record;

// Re-exports
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use record::{ContainerRecord, PackageRecord, Persist};
