//! Container selection and load commit.
//!
//! The loader sits between callers and the placement engine: it picks the
//! target container (pinned or first-fit over the listing), runs the search,
//! and on success commits the placement through the repositories.

use crate::container::Container;
use crate::engine::place_in_container;
use crate::package::Package;
use crate::store::Store;
use crate::{Error, Result};

/// Outcome of a load request.
///
/// Search exhaustion is a value, not an error; only a dangling container
/// reference or a repository fault surfaces as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The package was placed and both records were persisted.
    Loaded {
        /// Id of the container the package was loaded into.
        container_id: String,
    },
    /// No container/pivot/orientation combination could take the package.
    NoFit,
}

/// Loads packages into containers through a pair of repositories.
pub struct Loader<'a, C, P> {
    containers: &'a mut C,
    packages: &'a mut P,
}

impl<'a, C, P> Loader<'a, C, P>
where
    C: Store<Container>,
    P: Store<Package>,
{
    /// Creates a loader over the given repositories.
    pub fn new(containers: &'a mut C, packages: &'a mut P) -> Self {
        Self {
            containers,
            packages,
        }
    }

    /// Places `package` into a container and persists the result.
    ///
    /// With `target` pinned, only that container is tried; a dangling id is
    /// `Err(ContainerNotFound)`, distinct from `NoFit`. Without a target the
    /// containers are scanned in listing order and the first that fits wins.
    ///
    /// On success the package's `container_id` is set, the container's
    /// membership gains the package id, and both entities are saved.
    pub fn load(&mut self, package: &mut Package, target: Option<&str>) -> Result<LoadOutcome> {
        if let Some(id) = target {
            let container = self
                .containers
                .get_by_id(id)?
                .ok_or_else(|| Error::ContainerNotFound(id.to_string()))?;

            if place_in_container(&container, package, self.packages)? {
                return self.commit(container, package);
            }
            return Ok(LoadOutcome::NoFit);
        }

        for container in self.containers.get_all()? {
            if place_in_container(&container, package, self.packages)? {
                return self.commit(container, package);
            }
        }
        Ok(LoadOutcome::NoFit)
    }

    fn commit(&mut self, mut container: Container, package: &mut Package) -> Result<LoadOutcome> {
        package.assign_to(container.id());
        self.packages.save(package)?;

        container.push_package(package.id());
        self.containers.save(&container)?;

        log::debug!(
            "loaded package {} into container {} at {:?}",
            package.id(),
            container.id(),
            package.position()
        );
        Ok(LoadOutcome::Loaded {
            container_id: container.id().to_string(),
        })
    }
}
