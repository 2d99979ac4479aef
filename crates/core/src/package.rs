//! Package entity: a box with identity, assignment and placement state.

use crate::dims::{Dims, Orientation, Position};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular package to be loaded into a container.
///
/// A package starts Unassigned (`container_id` is `None`, position at the
/// origin, identity orientation). The placement engine moves it to Placed
/// exactly once; there is no transition back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Package {
    id: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    dims: Dims,
    container_id: Option<String>,
    position: Position,
    #[cfg_attr(feature = "serde", serde(rename = "rotation_orientation"))]
    orientation: Orientation,
}

impl Package {
    /// Creates a new unassigned package.
    pub fn new(id: impl Into<String>, width: u32, length: u32, depth: u32) -> Self {
        Self {
            id: id.into(),
            dims: Dims::new(width, length, depth),
            container_id: None,
            position: Position::ORIGIN,
            orientation: Orientation::Wld,
        }
    }

    /// Rebuilds a package from a persisted record.
    pub fn from_parts(
        id: impl Into<String>,
        dims: Dims,
        container_id: Option<String>,
        position: Position,
        orientation: Orientation,
    ) -> Self {
        Self {
            id: id.into(),
            dims,
            container_id,
            position,
            orientation,
        }
    }

    /// Returns the package id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the stored dimension triple (unrotated).
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the id of the container this package is loaded into, if any.
    pub fn container_id(&self) -> Option<&str> {
        self.container_id.as_deref()
    }

    /// Returns the anchor (minimum corner) position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current rotation orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the effective extents under the current orientation.
    pub fn oriented_dims(&self) -> Dims {
        self.dims.oriented(self.orientation)
    }

    /// Returns the volume, invariant under orientation.
    pub fn volume(&self) -> u64 {
        self.dims.volume()
    }

    /// Returns true once the package has been loaded into a container.
    pub fn is_placed(&self) -> bool {
        self.container_id.is_some()
    }

    /// Commits a successful placement trial.
    pub(crate) fn place_at(&mut self, position: Position, orientation: Orientation) {
        self.position = position;
        self.orientation = orientation;
    }

    /// Records the container this package was loaded into.
    pub(crate) fn assign_to(&mut self, container_id: &str) {
        self.container_id = Some(container_id.to_string());
    }
}
