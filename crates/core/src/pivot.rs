//! Candidate anchor-point generation for the placement search.

use crate::dims::{Axis, Position};
use crate::package::Package;

/// Derives the candidate pivots for a container holding `loaded` packages.
///
/// An empty container yields the origin only. Otherwise each loaded package
/// contributes one candidate per axis: its own anchor advanced by its
/// effective extent on that axis. Candidates come out in a fixed nested
/// order (outer loop over axes, inner loop over packages in load order),
/// which the engine relies on for deterministic tie-breaking.
pub fn candidate_pivots(loaded: &[Package]) -> Vec<Position> {
    if loaded.is_empty() {
        return vec![Position::ORIGIN];
    }

    let mut pivots = Vec::with_capacity(3 * loaded.len());
    for axis in Axis::ALL {
        for package in loaded {
            let step = package.oriented_dims().extent(axis);
            pivots.push(package.position().advanced(axis, step));
        }
    }
    pivots
}
