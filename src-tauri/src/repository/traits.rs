//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity, returning it with store-assigned fields filled in
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Extension for entities with an editable name
#[async_trait]
pub trait RenameRepository<T: Entity>: Repository<T> {
    /// Change the entity's name and bump `updated_at`. Missing ids are not an error.
    async fn rename(&self, id: T::Id, name: &str) -> DomainResult<()>;
}

/// Extension for entities that belong to a parent record by reference
#[async_trait]
pub trait ChildRepository<T: Entity>: Repository<T> {
    /// All children of a parent, `order` ascending
    async fn list_by_parent(&self, parent_id: u32) -> DomainResult<Vec<T>>;

    /// Delete every child of a parent, returning how many rows went away
    async fn delete_by_parent(&self, parent_id: u32) -> DomainResult<usize>;
}
