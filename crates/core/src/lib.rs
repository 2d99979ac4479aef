//! # loadpack-core
//!
//! Placement core for loading rectangular packages into rectangular
//! containers without overlap.
//!
//! The crate owns the geometry (dimension triples and the six discrete
//! rotation orientations), the AABB collision test, candidate pivot
//! generation, and the placement search that decides whether and where a
//! new package fits. Persistence is delegated to repositories behind the
//! [`Store`] trait; this crate never performs I/O of its own.
//!
//! ## Core components
//!
//! - [`Dims`], [`Orientation`], [`Position`]: box geometry values
//! - [`intersect`]: pairwise AABB overlap test
//! - [`candidate_pivots`]: anchor points derived from loaded packages
//! - [`try_place`] / [`place_in_container`]: the placement search
//! - [`Loader`]: container selection plus load commit
//!
//! ## Feature flags
//!
//! - `serde`: serialization support on the domain types

pub mod collision;
pub mod container;
pub mod dims;
pub mod engine;
pub mod error;
pub mod loader;
pub mod package;
pub mod pivot;
pub mod store;

// Re-exports
pub use collision::intersect;
pub use container::Container;
pub use dims::{Axis, Dims, Orientation, Position};
pub use engine::{place_in_container, try_place};
pub use error::{Error, Result};
pub use loader::{LoadOutcome, Loader};
pub use package::Package;
pub use pivot::candidate_pivots;
pub use store::Store;
