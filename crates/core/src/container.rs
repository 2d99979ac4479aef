//! Container entity: a box that holds packages.

use crate::dims::{Dims, Position};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular container.
///
/// Membership is recorded as an ordered list of package ids; insertion order
/// is load order and drives pivot generation. The list only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    id: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    dims: Dims,
    packages: Vec<String>,
}

impl Container {
    /// Creates a new empty container.
    pub fn new(id: impl Into<String>, width: u32, length: u32, depth: u32) -> Self {
        Self {
            id: id.into(),
            dims: Dims::new(width, length, depth),
            packages: Vec::new(),
        }
    }

    /// Rebuilds a container from a persisted record.
    pub fn from_parts(id: impl Into<String>, dims: Dims, packages: Vec<String>) -> Self {
        Self {
            id: id.into(),
            dims,
            packages,
        }
    }

    /// Returns the container id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the dimension triple.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the volume.
    pub fn volume(&self) -> u64 {
        self.dims.volume()
    }

    /// Returns the ids of loaded packages, in load order.
    pub fn package_ids(&self) -> &[String] {
        &self.packages
    }

    /// Returns true if no package has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Appends a package id to the membership list.
    ///
    /// Callers must only append ids of packages actually placed in this
    /// container, and each id at most once.
    pub fn push_package(&mut self, package_id: impl Into<String>) {
        self.packages.push(package_id.into());
    }

    /// Returns true if a box with the given effective extents, anchored at
    /// `pivot`, lies entirely within this container. Computed in u64 so the
    /// sum can never wrap.
    pub fn fits_within(&self, pivot: Position, dims: Dims) -> bool {
        pivot.x as u64 + dims.width as u64 <= self.dims.width as u64
            && pivot.y as u64 + dims.length as u64 <= self.dims.length as u64
            && pivot.z as u64 + dims.depth as u64 <= self.dims.depth as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_container_is_empty() {
        let container = Container::new("C1", 10, 10, 10);
        assert!(container.is_empty());
        assert_eq!(container.volume(), 1000);
    }

    #[test]
    fn test_membership_keeps_load_order() {
        let mut container = Container::new("C1", 10, 10, 10);
        container.push_package("A");
        container.push_package("B");
        assert_eq!(container.package_ids(), ["A", "B"]);
    }

    #[test]
    fn test_fits_within_boundary_is_inclusive() {
        let container = Container::new("C1", 10, 10, 10);
        // Flush against the far wall is still inside.
        assert!(container.fits_within(Position::new(6, 0, 0), Dims::new(4, 10, 10)));
        assert!(!container.fits_within(Position::new(7, 0, 0), Dims::new(4, 10, 10)));
    }

    #[test]
    fn test_fits_within_does_not_wrap() {
        let container = Container::new("C1", 10, 10, 10);
        assert!(!container.fits_within(Position::new(u32::MAX, 0, 0), Dims::new(2, 2, 2)));
    }
}
