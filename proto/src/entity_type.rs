use serde::{Deserialize, Serialize};

/// Name of one entity type declared by the schema, e.g. `Post` or `Comment`.
///
/// Type names are plain identifier tokens. They must not contain the global id
/// separator `:` - the schema validator enforces that upstream, not this crate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityType(String);

impl EntityType {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for EntityType {
    fn from(val: &str) -> Self { EntityType(val.to_string()) }
}

impl From<String> for EntityType {
    fn from(val: String) -> Self { EntityType(val) }
}

impl PartialEq<str> for EntityType {
    fn eq(&self, other: &str) -> bool { self.0 == other }
}

impl From<EntityType> for String {
    fn from(entity_type: EntityType) -> Self { entity_type.0 }
}

impl AsRef<str> for EntityType {
    fn as_ref(&self) -> &str { &self.0 }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}
