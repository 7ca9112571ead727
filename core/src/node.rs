use std::ops::Deref;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use nodus_proto::{EntityType, GlobalId};

use crate::{
    connection::NodeConnection,
    context::{MutationInfo, RequestContext},
    crud::{Attributes, CrudAdapter, FieldMap},
    error::{ExpressionKind, MutationError, RetrievalError, SchemaLookupError, ValidationError},
    schema::{RelationDef, SchemaModel},
};

/// Identity-bound handle to one entity: a (type, id) pair plus the request
/// context it operates under.
///
/// Type and id are fixed at construction and never mutated in place;
/// operations that change state return a new `Node` / [`NodeObject`] or
/// `None`. Each operation is a single delegation to the context's
/// [`crate::CrudAdapter`] - no internal fan-out, no queuing, no caught
/// adapter errors.
#[derive(Clone)]
pub struct Node {
    ctx: RequestContext,
}

impl Node {
    pub fn new(ctx: RequestContext) -> Self { Self { ctx } }

    /// Bind a node to a client-supplied encoded id.
    ///
    /// The entity type is taken from the id itself; a string that does not
    /// decode fails with [`RetrievalError::MalformedId`] before any backend
    /// contact.
    pub fn from_encoded(
        schema: Arc<SchemaModel>,
        crud: Arc<dyn CrudAdapter>,
        mutation: MutationInfo,
        encoded: &str,
    ) -> Result<Self, RetrievalError> {
        let id = GlobalId::from_base64(encoded)?;
        let entity_type = id.entity_type().clone();
        Ok(Self { ctx: RequestContext { schema, crud, mutation, entity_type, id } })
    }

    pub fn entity_type(&self) -> &EntityType { &self.ctx.entity_type }

    pub fn id(&self) -> &GlobalId { &self.ctx.id }

    pub fn context(&self) -> &RequestContext { &self.ctx }

    /// One backend existence check; returns the backend's boolean untouched.
    pub async fn exists(&self) -> Result<bool, RetrievalError> {
        debug!("Node.exists {}", self);
        Ok(self.ctx.crud.exists_node(&self.ctx.entity_type, &self.ctx.id).await?)
    }

    /// Fetch the record behind this identity.
    ///
    /// Absence is a normal outcome: a backend miss is `Ok(None)`, not an
    /// error. On a hit the record is wrapped into a [`NodeObject`] bound to
    /// the same context, with the encoded id materialized under `"id"`.
    pub async fn get(&self) -> Result<Option<NodeObject>, RetrievalError> {
        debug!("Node.get {}", self);
        match self.ctx.crud.get_node(&self.ctx.entity_type, &self.ctx.id).await? {
            Some(mut attributes) => {
                attributes.insert("id".to_string(), Value::String(self.ctx.id.to_base64()));
                Ok(Some(NodeObject { node: self.clone(), attributes }))
            }
            None => Ok(None),
        }
    }

    /// Delete the record behind this identity.
    ///
    /// Returns the node's own id when the backend reports success, `None`
    /// when it reports nothing to do. No pre-existence check is made - that
    /// is the backend's responsibility.
    pub async fn delete(&self) -> Result<Option<GlobalId>, MutationError> {
        debug!("Node.delete {}", self);
        let applied = self.ctx.crud.delete_node(&self.ctx.entity_type, &self.ctx.id).await?;
        Ok(applied.then(|| self.ctx.id.clone()))
    }

    /// Apply a field-map update to the record behind this identity.
    ///
    /// The expression shape is validated before dispatch: only a plain field
    /// map is accepted. Anything else fails with
    /// [`MutationError::InvalidExpression`] and the backend is never called.
    /// On success returns a new `Node` with the same type/id/context, `None`
    /// when the backend reports the update did not apply.
    pub async fn update(&self, expression: Value) -> Result<Option<Node>, MutationError> {
        let fields = validate_expression(expression)?;
        debug!("Node.update {}", self);
        let applied = self.ctx.crud.update_node(&self.ctx.entity_type, &self.ctx.id, &fields).await?;
        Ok(applied.then(|| self.clone()))
    }

    /// The [`NodeConnection`] declared on this node's type under `field`.
    ///
    /// Derived purely from schema metadata plus this node's id - no backend
    /// call, legal even before any attributes are materialized.
    pub fn connection(&self, field: &str) -> Result<NodeConnection, SchemaLookupError> {
        let relation = self.ctx.schema.relation(&self.ctx.entity_type, field)?;
        Ok(self.derive_connection(relation))
    }

    /// Connections for every relation declared on this node's type.
    pub fn connections(&self) -> Result<Vec<NodeConnection>, SchemaLookupError> {
        Ok(self.ctx.schema.relations(&self.ctx.entity_type)?.map(|relation| self.derive_connection(relation)).collect())
    }

    fn derive_connection(&self, relation: &RelationDef) -> NodeConnection {
        NodeConnection {
            node_id: self.ctx.id.clone(),
            node_field: relation.own_field.clone(),
            related_field: relation.inverse_field.clone(),
            node_type: relation.related_type.clone(),
            edge_type: relation.edge_type.clone(),
        }
    }
}

/// A [`Node`] plus the materialized record it was fetched with.
///
/// Constructed only by [`Node::get`] on a successful fetch; owns its
/// attributes exclusively. All identity operations and relation accessors of
/// the underlying node remain available through deref.
pub struct NodeObject {
    node: Node,
    attributes: Attributes,
}

impl NodeObject {
    pub fn attributes(&self) -> &Attributes { &self.attributes }

    pub fn attribute(&self, name: &str) -> Option<&Value> { self.attributes.get(name) }
}

impl Deref for NodeObject {
    type Target = Node;
    fn deref(&self) -> &Node { &self.node }
}

fn validate_expression(expression: Value) -> Result<FieldMap, ValidationError> {
    match expression {
        Value::Object(fields) => Ok(fields),
        Value::Null => Err(ValidationError { found: ExpressionKind::Null }),
        Value::Bool(_) => Err(ValidationError { found: ExpressionKind::Bool }),
        Value::Number(_) => Err(ValidationError { found: ExpressionKind::Number }),
        Value::String(_) => Err(ValidationError { found: ExpressionKind::String }),
        Value::Array(_) => Err(ValidationError { found: ExpressionKind::Array }),
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({}/{:#})", self.ctx.entity_type, self.ctx.id)
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node").field("entity_type", &self.ctx.entity_type).field("id", &self.ctx.id).finish()
    }
}

impl std::fmt::Debug for NodeObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeObject").field("node", &self.node).field("attributes", &self.attributes).finish()
    }
}
