pub mod connection;
pub mod context;
pub mod crud;
pub mod error;
pub mod node;
pub mod schema;

pub use connection::NodeConnection;
pub use context::{MutationInfo, RequestContext};
pub use crud::{Attributes, CrudAdapter, FieldMap};
pub use node::{Node, NodeObject};
pub use schema::{RelationDef, SchemaBuilder, SchemaModel, TypeDef};

pub use nodus_proto as proto;
pub use nodus_proto::GlobalId;
