//! Public error types for nodus.
//!
//! Absence is never an error here: a fetch that finds nothing, a delete or
//! update the backend did not apply, all come back as `Ok(None)` / `Ok(false)`
//! from the operations on [`crate::Node`].

use nodus_proto::{DecodeError, EntityType};
use thiserror::Error;

/// A schema lookup named a type or relation field the schema does not declare.
///
/// This is a configuration/programmer error, not a normal runtime outcome -
/// the schema arrives here already validated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaLookupError {
    #[error("unknown entity type: {0}")]
    UnknownType(EntityType),

    #[error("unknown relation field: {entity_type}.{field}")]
    UnknownRelation { entity_type: EntityType, field: String },
}

/// Shape of a rejected update expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionKind {
    Null,
    Bool,
    Number,
    String,
    Array,
}

/// An update expression was not a plain field map.
///
/// The message is fixed so callers can pattern-match on it. The backend is
/// never called when this is raised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Update expression must be an object expression")]
pub struct ValidationError {
    pub found: ExpressionKind,
}

/// Failure raised by the [`crate::CrudAdapter`] itself.
///
/// The core never catches, wraps, or retries these - they propagate to the
/// caller unchanged. Retry/backoff policy belongs to the adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("backend error: {0}")]
    BackendError(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl StorageError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self { StorageError::BackendError(Box::new(err)) }
}

impl From<anyhow::Error> for StorageError {
    fn from(err: anyhow::Error) -> Self { StorageError::BackendError(err.into()) }
}

/// Error type for retrieval operations.
///
/// Returned from: `Node::exists`, `Node::get`
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// A global identifier could not be decoded
    #[error("malformed id: {0}")]
    MalformedId(#[from] DecodeError),

    /// The backend adapter failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Error type for mutation operations.
///
/// Returned from: `Node::delete`, `Node::update`
#[derive(Debug, Error)]
pub enum MutationError {
    /// The update expression failed the shape check (backend never called)
    #[error("{0}")]
    InvalidExpression(#[from] ValidationError),

    /// The backend adapter failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
