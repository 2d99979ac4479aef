//! Box geometry: dimension triples, axes and discrete rotation orientations.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six axis permutations a box can be rotated into.
///
/// Each variant names the order in which the stored width, length and depth
/// are mapped onto the container's width, length and depth axes. The numeric
/// wire code of each variant matches the rotation codes used in persisted
/// records (`Wld` = 0 through `Dlw` = 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "u8", try_from = "u8")
)]
pub enum Orientation {
    /// Width x Length x Depth (the identity orientation).
    #[default]
    Wld = 0,
    /// Width x Depth x Length.
    Wdl = 1,
    /// Length x Width x Depth.
    Lwd = 2,
    /// Length x Depth x Width.
    Ldw = 3,
    /// Depth x Width x Length.
    Dwl = 4,
    /// Depth x Length x Width.
    Dlw = 5,
}

impl Orientation {
    /// All six orientations in the fixed search order.
    ///
    /// This order doubles as the tie-break: the placement engine commits the
    /// first orientation in this sequence that fits.
    pub const ALL: [Orientation; 6] = [
        Orientation::Wld,
        Orientation::Wdl,
        Orientation::Lwd,
        Orientation::Ldw,
        Orientation::Dwl,
        Orientation::Dlw,
    ];

    /// Returns the numeric wire code (0..=5).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parses a numeric wire code back into an orientation.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Orientation::Wld),
            1 => Ok(Orientation::Wdl),
            2 => Ok(Orientation::Lwd),
            3 => Ok(Orientation::Ldw),
            4 => Ok(Orientation::Dwl),
            5 => Ok(Orientation::Dlw),
            other => Err(Error::InvalidOrientation(other)),
        }
    }
}

impl From<Orientation> for u8 {
    fn from(orientation: Orientation) -> u8 {
        orientation.code()
    }
}

impl TryFrom<u8> for Orientation {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Orientation::from_code(code)
    }
}

/// A container axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The width (x) axis.
    Width,
    /// The length (y) axis.
    Length,
    /// The depth (z) axis.
    Depth,
}

impl Axis {
    /// All three axes in the fixed pivot-generation order.
    pub const ALL: [Axis; 3] = [Axis::Width, Axis::Length, Axis::Depth];
}

/// A dimension triple. Immutable after creation; rotation never mutates the
/// stored triple, it only changes how the components map onto axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dims {
    /// Extent along the width (x) axis.
    pub width: u32,
    /// Extent along the length (y) axis.
    pub length: u32,
    /// Extent along the depth (z) axis.
    pub depth: u32,
}

impl Dims {
    /// Creates a new dimension triple.
    pub fn new(width: u32, length: u32, depth: u32) -> Self {
        Self {
            width,
            length,
            depth,
        }
    }

    /// Returns the effective extents when the box is rotated into the given
    /// orientation. The result is always a permutation of the stored triple.
    pub fn oriented(self, orientation: Orientation) -> Dims {
        let Dims {
            width: w,
            length: l,
            depth: d,
        } = self;
        match orientation {
            Orientation::Wld => Dims::new(w, l, d),
            Orientation::Wdl => Dims::new(w, d, l),
            Orientation::Lwd => Dims::new(l, w, d),
            Orientation::Ldw => Dims::new(l, d, w),
            Orientation::Dwl => Dims::new(d, w, l),
            Orientation::Dlw => Dims::new(d, l, w),
        }
    }

    /// Returns the extent along one axis.
    pub fn extent(self, axis: Axis) -> u32 {
        match axis {
            Axis::Width => self.width,
            Axis::Length => self.length,
            Axis::Depth => self.depth,
        }
    }

    /// Returns the volume. Invariant under orientation.
    pub fn volume(self) -> u64 {
        self.width as u64 * self.length as u64 * self.depth as u64
    }

    /// Rejects non-positive dimensions. Callers are expected to validate at
    /// the boundary; the placement search itself assumes valid geometry.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.length == 0 || self.depth == 0 {
            return Err(Error::InvalidDimensions(format!(
                "all dimensions must be positive, got {}x{}x{}",
                self.width, self.length, self.depth
            )));
        }
        Ok(())
    }
}

/// The minimum-corner anchor of a box within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "[u32; 3]", from = "[u32; 3]")
)]
pub struct Position {
    /// Coordinate along the width axis.
    pub x: u32,
    /// Coordinate along the length axis.
    pub y: u32,
    /// Coordinate along the depth axis.
    pub z: u32,
}

impl Position {
    /// The container origin.
    pub const ORIGIN: Position = Position { x: 0, y: 0, z: 0 };

    /// Creates a new position.
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Returns the coordinate on one axis.
    pub fn coord(self, axis: Axis) -> u32 {
        match axis {
            Axis::Width => self.x,
            Axis::Length => self.y,
            Axis::Depth => self.z,
        }
    }

    /// Returns this position advanced along one axis. Saturates on overflow;
    /// a saturated candidate can never pass the container bounds check.
    pub fn advanced(self, axis: Axis, amount: u32) -> Position {
        let mut next = self;
        match axis {
            Axis::Width => next.x = next.x.saturating_add(amount),
            Axis::Length => next.y = next.y.saturating_add(amount),
            Axis::Depth => next.z = next.z.saturating_add(amount),
        }
        next
    }
}

impl From<Position> for [u32; 3] {
    fn from(p: Position) -> [u32; 3] {
        [p.x, p.y, p.z]
    }
}

impl From<[u32; 3]> for Position {
    fn from([x, y, z]: [u32; 3]) -> Position {
        Position::new(x, y, z)
    }
}
