use nodus_proto::{EntityType, GlobalId};
use serde::{Deserialize, Serialize};

/// Descriptor of one declared relation instance: which node it originates
/// from, the field it is addressed by, the inverse field on the related type,
/// the related type itself, and the edge type when the relation carries edge
/// attributes.
///
/// Pure data, derived from schema metadata plus the node's id - never from a
/// backend read. It is the handoff point to the out-of-core connection
/// resolution layer that materializes the related set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConnection {
    pub node_id: GlobalId,
    pub node_field: String,
    pub related_field: String,
    pub node_type: EntityType,
    pub edge_type: Option<EntityType>,
}

impl std::fmt::Display for NodeConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeConnection({:#} {} <-> {}.{})", self.node_id, self.node_field, self.node_type, self.related_field)
    }
}
