//! Repository interface the placement core consumes.
//!
//! The core never touches storage directly; it resolves and persists
//! entities through this trait, polymorphic over any backing engine.

use crate::Result;

/// A repository of one entity kind.
pub trait Store<T> {
    /// Looks up one entity by id.
    fn get_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Lists all entities. The listing order is meaningful: it is the order
    /// in which the container selector scans candidate containers.
    fn get_all(&self) -> Result<Vec<T>>;

    /// Idempotent full upsert of one entity's record.
    fn save(&mut self, entity: &T) -> Result<()>;
}
