//! Pairwise axis-aligned bounding-box overlap tests.

use crate::dims::{Axis, Dims, Position};
use crate::package::Package;

/// Strict overlap test on a single axis.
///
/// Two extents overlap iff the distance between their centers is strictly
/// less than the sum of their half-extents; edge contact does not count.
/// Both sides are doubled so the comparison stays in exact integers.
fn axis_overlap(a_pos: u32, a_dim: u32, b_pos: u32, b_dim: u32) -> bool {
    let a_center2 = 2 * a_pos as i64 + a_dim as i64;
    let b_center2 = 2 * b_pos as i64 + b_dim as i64;
    (a_center2 - b_center2).abs() < a_dim as i64 + b_dim as i64
}

/// Overlap test for two explicitly positioned and oriented boxes.
///
/// Requires simultaneous overlap on all three axes.
pub(crate) fn boxes_overlap(
    a_pos: Position,
    a_dims: Dims,
    b_pos: Position,
    b_dims: Dims,
) -> bool {
    Axis::ALL.iter().all(|&axis| {
        axis_overlap(
            a_pos.coord(axis),
            a_dims.extent(axis),
            b_pos.coord(axis),
            b_dims.extent(axis),
        )
    })
}

/// Returns true iff the bounding boxes of `a` and `b`, under their current
/// positions and orientations, overlap. Symmetric; edge-touching boxes do
/// not intersect.
pub fn intersect(a: &Package, b: &Package) -> bool {
    boxes_overlap(
        a.position(),
        a.oriented_dims(),
        b.position(),
        b.oriented_dims(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package_at(id: &str, pos: Position, w: u32, l: u32, d: u32) -> Package {
        Package::from_parts(
            id,
            Dims::new(w, l, d),
            None,
            pos,
            crate::dims::Orientation::Wld,
        )
    }

    #[test]
    fn test_identical_boxes_intersect() {
        let a = package_at("A", Position::ORIGIN, 4, 4, 4);
        let b = package_at("B", Position::ORIGIN, 4, 4, 4);
        assert!(intersect(&a, &b));
    }

    #[test]
    fn test_intersect_is_symmetric() {
        let a = package_at("A", Position::ORIGIN, 6, 2, 3);
        let b = package_at("B", Position::new(3, 1, 1), 4, 4, 4);
        assert_eq!(intersect(&a, &b), intersect(&b, &a));
        assert!(intersect(&a, &b));
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        let a = package_at("A", Position::ORIGIN, 4, 4, 4);
        let b = package_at("B", Position::new(4, 0, 0), 4, 4, 4);
        assert!(!intersect(&a, &b));
    }

    #[test]
    fn test_separated_on_one_axis_never_intersects() {
        let a = package_at("A", Position::ORIGIN, 4, 4, 4);
        // Fully overlapping on width and length, separated on depth.
        let b = package_at("B", Position::new(0, 0, 9), 4, 4, 4);
        assert!(!intersect(&a, &b));
    }

    #[test]
    fn test_overlap_requires_all_three_axes() {
        let a = package_at("A", Position::ORIGIN, 4, 4, 4);
        // Overlaps on width and depth, clear of a on length.
        let b = package_at("B", Position::new(2, 6, 2), 4, 4, 4);
        assert!(!intersect(&a, &b));
    }

    #[test]
    fn test_orientation_affects_overlap() {
        use crate::dims::Orientation;

        let a = package_at("A", Position::ORIGIN, 8, 1, 1);
        // Same 8x1x1 box, rotated so the long side runs along depth:
        // it spans x 2..3 inside a's x range, so the boxes intersect.
        let rotated = Package::from_parts(
            "B",
            Dims::new(8, 1, 1),
            None,
            Position::new(2, 0, 0),
            Orientation::Dlw,
        );
        assert!(intersect(&a, &rotated));

        // Moved past a's far face it clears.
        let clear = Package::from_parts(
            "B",
            Dims::new(8, 1, 1),
            None,
            Position::new(8, 0, 0),
            Orientation::Dlw,
        );
        assert!(!intersect(&a, &clear));
    }
}
