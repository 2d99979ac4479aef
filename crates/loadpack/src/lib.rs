//! # Loadpack
//!
//! Packs rectangular packages into rectangular containers without overlap,
//! automatically choosing orientation and position.
//!
//! ## Quick start
//!
//! ```rust
//! use loadpack::store::MemoryStore;
//! use loadpack::{Container, LoadOutcome, Loader, Package, Store};
//!
//! let mut containers = MemoryStore::new();
//! let mut packages = MemoryStore::new();
//! containers.save(&Container::new("C1", 10, 10, 10)).unwrap();
//!
//! let mut package = Package::new("A", 4, 4, 4);
//! let outcome = Loader::new(&mut containers, &mut packages)
//!     .load(&mut package, None)
//!     .unwrap();
//! assert!(matches!(outcome, LoadOutcome::Loaded { .. }));
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: serialization support on the core domain types

/// Placement core: geometry, collision, pivot generation, the search.
pub use loadpack_core as core;

/// Repository implementations (in-memory, JSON file).
pub use loadpack_store as store;

// Re-export commonly used types at root level
pub use loadpack_core::{
    candidate_pivots, intersect, place_in_container, try_place, Axis, Container, Dims, Error,
    LoadOutcome, Loader, Orientation, Package, Position, Result, Store,
};
