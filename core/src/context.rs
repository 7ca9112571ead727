use std::sync::Arc;

use nodus_proto::{EntityType, GlobalId};
use serde::{Deserialize, Serialize};

use crate::{crud::CrudAdapter, schema::SchemaModel};

/// Opaque mutation metadata, passed through unexamined by this layer.
///
/// Exists purely for downstream consumers (transport, audit); the core stores
/// and exposes it but never interprets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationInfo {
    pub name: String,
    pub client_mutation_id: Option<String>,
    pub related_ids: Vec<GlobalId>,
}

/// Everything one [`crate::Node`] needs for the lifetime of one logical
/// operation: the validated schema, the storage adapter, the mutation
/// metadata, and the identity (type + id) the node is bound to.
///
/// Cheap to clone - the collaborators are Arc-shared. Immutable after
/// construction.
#[derive(Clone)]
pub struct RequestContext {
    pub schema: Arc<SchemaModel>,
    pub crud: Arc<dyn CrudAdapter>,
    pub mutation: MutationInfo,
    pub entity_type: EntityType,
    pub id: GlobalId,
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("mutation", &self.mutation)
            .field("entity_type", &self.entity_type)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
