//! Persisted record shapes and entity <-> record conversion.
//!
//! Records are what actually lands in storage: the entity id is the record
//! key, not a field, and the remaining fields match the legacy JSON data
//! files so existing data stays readable.

use loadpack_core::{Container, Dims, Orientation, Package, Position, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Conversion between a domain entity and its persisted record.
pub trait Persist: Sized {
    /// The serialized record shape.
    type Record: Serialize + DeserializeOwned;

    /// The record key.
    fn id(&self) -> &str;

    /// Builds the record for this entity.
    fn to_record(&self) -> Self::Record;

    /// Rebuilds the entity from a keyed record. Fails on malformed data
    /// such as an out-of-range rotation code.
    fn from_record(id: String, record: Self::Record) -> Result<Self>;
}

/// Persisted shape of a package record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Container the package is loaded into, if placed.
    #[serde(default)]
    pub container_id: Option<String>,
    /// Rotation orientation wire code (0..=5).
    pub rotation_orientation: u8,
    /// Anchor position as `[x, y, z]`.
    pub position: [u32; 3],
    pub length: u32,
    pub width: u32,
    pub depth: u32,
}

impl Persist for Package {
    type Record = PackageRecord;

    fn id(&self) -> &str {
        self.id()
    }

    fn to_record(&self) -> PackageRecord {
        let dims = self.dims();
        PackageRecord {
            container_id: self.container_id().map(str::to_string),
            rotation_orientation: self.orientation().code(),
            position: self.position().into(),
            length: dims.length,
            width: dims.width,
            depth: dims.depth,
        }
    }

    fn from_record(id: String, record: PackageRecord) -> Result<Package> {
        Ok(Package::from_parts(
            id,
            Dims::new(record.width, record.length, record.depth),
            record.container_id,
            Position::from(record.position),
            Orientation::from_code(record.rotation_orientation)?,
        ))
    }
}

/// Persisted shape of a container record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerRecord {
    /// Ids of loaded packages, in load order.
    #[serde(default)]
    pub packages: Vec<String>,
    pub length: u32,
    pub width: u32,
    pub depth: u32,
}

impl Persist for Container {
    type Record = ContainerRecord;

    fn id(&self) -> &str {
        self.id()
    }

    fn to_record(&self) -> ContainerRecord {
        let dims = self.dims();
        ContainerRecord {
            packages: self.package_ids().to_vec(),
            length: dims.length,
            width: dims.width,
            depth: dims.depth,
        }
    }

    fn from_record(id: String, record: ContainerRecord) -> Result<Container> {
        Ok(Container::from_parts(
            id,
            Dims::new(record.width, record.length, record.depth),
            record.packages,
        ))
    }
}
