//! Backend delegation boundary.
//!
//! The adapter is schema-unaware: it operates purely on (type, id, payload)
//! tuples. It is injected via [`crate::RequestContext`], never looked up
//! ambiently, and its errors propagate to the caller unchanged.

use async_trait::async_trait;

use nodus_proto::{EntityType, GlobalId};

use crate::error::StorageError;

/// Materialized field values of one record, keyed by field name.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Update payload: field name to new value.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// Storage operations the hosting system must supply.
///
/// Every operation is invoked with exactly `(type, id[, expression])`, in that
/// order. A `false` / `None` result means the operation completed and found
/// nothing to do; `Err` means the backend itself failed.
#[async_trait]
pub trait CrudAdapter: Send + Sync {
    async fn exists_node(&self, entity_type: &EntityType, id: &GlobalId) -> Result<bool, StorageError>;

    async fn get_node(&self, entity_type: &EntityType, id: &GlobalId) -> Result<Option<Attributes>, StorageError>;

    async fn delete_node(&self, entity_type: &EntityType, id: &GlobalId) -> Result<bool, StorageError>;

    async fn update_node(&self, entity_type: &EntityType, id: &GlobalId, expression: &FieldMap) -> Result<bool, StorageError>;
}
