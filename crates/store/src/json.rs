//! JSON file-as-database repository.
//!
//! One JSON object per entity kind, keyed by id, with the legacy record
//! layout (see [`crate::record`]). Every operation goes through the file:
//! reads load the full collection, saves rewrite it with one record
//! upserted. Key order is preserved (serde_json `preserve_order`), so
//! `get_all` reflects creation order and the container scan order is
//! stable across restarts.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::record::Persist;
use loadpack_core::{Error, Result, Store};

fn storage_err(context: &str, err: impl std::fmt::Display) -> Error {
    Error::Storage(format!("{context}: {err}"))
}

/// A file-backed store holding one JSON object keyed by entity id.
#[derive(Debug)]
pub struct JsonStore<T> {
    path: PathBuf,
    _entity: PhantomData<T>,
}

impl<T> JsonStore<T> {
    /// Opens the store at `path`, creating an empty database file if none
    /// exists yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            fs::write(&path, "{}").map_err(|e| storage_err("failed to create database", e))?;
            log::debug!("created empty database at {}", path.display());
        }
        Ok(Self {
            path,
            _entity: PhantomData,
        })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| storage_err("failed to read database", e))?;
        serde_json::from_str(&content).map_err(|e| storage_err("malformed database", e))
    }

    fn write_all(&self, records: &Map<String, Value>) -> Result<()> {
        let content = serde_json::to_string(records)
            .map_err(|e| storage_err("failed to encode database", e))?;
        fs::write(&self.path, content).map_err(|e| storage_err("failed to write database", e))
    }
}

impl<T: Persist> Store<T> for JsonStore<T> {
    fn get_by_id(&self, id: &str) -> Result<Option<T>> {
        let records = self.read_all()?;
        match records.get(id) {
            Some(value) => {
                let record = serde_json::from_value(value.clone())
                    .map_err(|e| storage_err("malformed record", e))?;
                T::from_record(id.to_string(), record).map(Some)
            }
            None => Ok(None),
        }
    }

    fn get_all(&self) -> Result<Vec<T>> {
        self.read_all()?
            .into_iter()
            .map(|(id, value)| {
                let record = serde_json::from_value(value)
                    .map_err(|e| storage_err("malformed record", e))?;
                T::from_record(id, record)
            })
            .collect()
    }

    fn save(&mut self, entity: &T) -> Result<()> {
        let mut records = self.read_all()?;
        let value = serde_json::to_value(entity.to_record())
            .map_err(|e| storage_err("failed to encode record", e))?;
        // Insert keeps the position of an existing key; new keys append,
        // so listing order stays creation order.
        records.insert(Persist::id(entity).to_string(), value);
        self.write_all(&records)
    }
}
