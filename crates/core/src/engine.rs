//! Placement search: candidate pivots crossed with rotation orientations,
//! gated by container bounds and collision checks.

use crate::collision;
use crate::container::Container;
use crate::dims::{Orientation, Position};
use crate::package::Package;
use crate::pivot::candidate_pivots;
use crate::store::Store;
use crate::{Error, Result};

/// Resolves a container's membership list into packages, in load order.
fn resolve_loaded<P>(container: &Container, packages: &P) -> Result<Vec<Package>>
where
    P: Store<Package>,
{
    container
        .package_ids()
        .iter()
        .map(|id| {
            packages
                .get_by_id(id)?
                .ok_or_else(|| Error::PackageNotFound(id.clone()))
        })
        .collect()
}

/// Single-pivot trial against an already-resolved membership list.
///
/// Tries every orientation in the fixed search order; the first one that
/// both stays inside the container and collides with nothing wins. The
/// package is only mutated on success, so a failed trial leaves its
/// position and orientation exactly as they were.
fn try_place_resolved(
    container: &Container,
    package: &mut Package,
    pivot: Position,
    loaded: &[Package],
) -> bool {
    for orientation in Orientation::ALL {
        let dims = package.dims().oriented(orientation);

        if !container.fits_within(pivot, dims) {
            continue;
        }

        let collides = loaded.iter().any(|placed| {
            collision::boxes_overlap(pivot, dims, placed.position(), placed.oriented_dims())
        });

        if !collides {
            package.place_at(pivot, orientation);
            return true;
        }
    }
    false
}

/// Attempts to place `package` at a single pivot point.
///
/// Returns `Ok(true)` and commits position plus orientation on the package
/// if some orientation fits; `Ok(false)` if none does. `Err` only signals a
/// repository fault (a membership id that does not resolve, or a storage
/// failure), never a geometric non-fit.
pub fn try_place<P>(
    container: &Container,
    package: &mut Package,
    pivot: Position,
    packages: &P,
) -> Result<bool>
where
    P: Store<Package>,
{
    let loaded = resolve_loaded(container, packages)?;
    Ok(try_place_resolved(container, package, pivot, &loaded))
}

/// Runs the full placement search for one package in one container.
///
/// An empty container gets a single trial at the origin. Otherwise the
/// candidate pivots derived from the loaded packages are tried in their
/// fixed order, short-circuiting on the first success. On failure the
/// package is left untouched (still Unassigned from the caller's view).
pub fn place_in_container<P>(
    container: &Container,
    package: &mut Package,
    packages: &P,
) -> Result<bool>
where
    P: Store<Package>,
{
    let loaded = resolve_loaded(container, packages)?;

    if loaded.is_empty() {
        return Ok(try_place_resolved(
            container,
            package,
            Position::ORIGIN,
            &loaded,
        ));
    }

    for pivot in candidate_pivots(&loaded) {
        if try_place_resolved(container, package, pivot, &loaded) {
            return Ok(true);
        }
    }

    log::debug!(
        "no pivot/orientation fits package {} in container {}",
        package.id(),
        container.id()
    );
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::VecStore;

    fn store_with(packages: &[Package]) -> VecStore<Package> {
        let mut store = VecStore::new();
        for p in packages {
            store.save(p).unwrap();
        }
        store
    }

    #[test]
    fn test_empty_container_places_at_origin() {
        let container = Container::new("C1", 10, 10, 10);
        let mut package = Package::new("A", 4, 4, 4);
        let store = store_with(&[]);

        assert!(place_in_container(&container, &mut package, &store).unwrap());
        assert_eq!(package.position(), Position::ORIGIN);
        assert_eq!(package.orientation(), Orientation::Wld);
    }

    #[test]
    fn test_oversized_package_fails_and_is_untouched() {
        let container = Container::new("C1", 10, 10, 10);
        let mut package = Package::new("A", 11, 11, 11);
        let store = store_with(&[]);

        assert!(!place_in_container(&container, &mut package, &store).unwrap());
        assert!(!package.is_placed());
        assert_eq!(package.position(), Position::ORIGIN);
        assert_eq!(package.orientation(), Orientation::Wld);
    }

    #[test]
    fn test_first_fitting_orientation_wins() {
        // A 1x1x4 box in a 4x4x1 container: the identity orientation is too
        // deep, Wdl (1x4x1) is the first in search order that fits.
        let container = Container::new("C1", 4, 4, 1);
        let mut package = Package::new("A", 1, 1, 4);
        let store = store_with(&[]);

        assert!(place_in_container(&container, &mut package, &store).unwrap());
        assert_eq!(package.orientation(), Orientation::Wdl);
        assert_eq!(package.position(), Position::ORIGIN);
    }

    #[test]
    fn test_second_package_lands_on_derived_pivot() {
        let mut container = Container::new("C1", 10, 10, 10);
        let mut a = Package::new("A", 4, 4, 4);
        let empty = store_with(&[]);
        assert!(place_in_container(&container, &mut a, &empty).unwrap());

        a.assign_to("C1");
        container.push_package("A");
        let store = store_with(std::slice::from_ref(&a));

        let mut b = Package::new("B", 4, 4, 4);
        assert!(place_in_container(&container, &mut b, &store).unwrap());
        assert_eq!(b.position(), Position::new(4, 0, 0));
        assert!(!crate::collision::intersect(&a, &b));
        assert!(container.fits_within(b.position(), b.oriented_dims()));
    }

    #[test]
    fn test_search_exhaustion_after_two_loads() {
        // A and B (4x4x4) loaded, then an 8x8x8
        // package finds no pivot/orientation combination.
        let mut container = Container::new("C1", 10, 10, 10);
        let mut store = store_with(&[]);

        for id in ["A", "B"] {
            let mut p = Package::new(id, 4, 4, 4);
            assert!(place_in_container(&container, &mut p, &store).unwrap());
            p.assign_to("C1");
            container.push_package(id);
            store.save(&p).unwrap();
        }

        let mut c = Package::new("C", 8, 8, 8);
        assert!(!place_in_container(&container, &mut c, &store).unwrap());
        assert!(!c.is_placed());
        assert_eq!(c.position(), Position::ORIGIN);
    }

    #[test]
    fn test_collision_rejects_pivot_but_search_continues() {
        // A at (0,0,0) and B at (4,0,0) in a 12x4x4 row. For a third cube
        // the first candidate pivot (A's width face, (4,0,0)) collides with
        // B in every orientation; the search moves on to B's width face.
        let mut container = Container::new("C1", 12, 4, 4);
        let mut store = store_with(&[]);

        for id in ["A", "B"] {
            let mut p = Package::new(id, 4, 4, 4);
            assert!(place_in_container(&container, &mut p, &store).unwrap());
            p.assign_to("C1");
            container.push_package(id);
            store.save(&p).unwrap();
        }

        let mut c = Package::new("C", 4, 4, 4);
        assert!(place_in_container(&container, &mut c, &store).unwrap());
        assert_eq!(c.position(), Position::new(8, 0, 0));
    }

    #[test]
    fn test_try_place_at_explicit_pivot() {
        let container = Container::new("C1", 10, 10, 10);
        let mut package = Package::new("A", 4, 4, 4);
        let store = store_with(&[]);

        let pivot = Position::new(6, 6, 6);
        assert!(try_place(&container, &mut package, pivot, &store).unwrap());
        assert_eq!(package.position(), pivot);

        let mut too_far = Package::new("B", 5, 5, 5);
        assert!(!try_place(&container, &mut too_far, pivot, &store).unwrap());
        assert_eq!(too_far.position(), Position::ORIGIN);
    }

    #[test]
    fn test_unresolvable_membership_id_is_an_error() {
        let mut container = Container::new("C1", 10, 10, 10);
        container.push_package("ghost");
        let store = store_with(&[]);

        let mut package = Package::new("A", 4, 4, 4);
        let err = place_in_container(&container, &mut package, &store).unwrap_err();
        assert!(matches!(err, Error::PackageNotFound(id) if id == "ghost"));
    }
}
