//! Read-only view of the entity schema.
//!
//! The schema is produced upstream by a parse -> analyze -> validate pipeline
//! and consumed here via [`crate::RequestContext`]. This module never mutates
//! schema state; [`SchemaBuilder`] is the assembly path that pipeline (and the
//! tests) use to hand a finished [`SchemaModel`] to the core.

use std::collections::{BTreeMap, BTreeSet};

use nodus_proto::EntityType;
use serde::{Deserialize, Serialize};

use crate::error::SchemaLookupError;

/// One declared relation field, as seen from the owning type.
///
/// `own_field` and `inverse_field` are the two ends of a bidirectional
/// relation declared once in the schema. `edge_type` is set only for
/// relations carrying edge attributes (many-to-many with properties).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDef {
    pub own_field: String,
    pub inverse_field: String,
    pub related_type: EntityType,
    pub edge_type: Option<EntityType>,
}

/// Field declarations of one entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub scalar_fields: BTreeSet<String>,
    pub relations: BTreeMap<String, RelationDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModel {
    types: BTreeMap<EntityType, TypeDef>,
}

impl SchemaModel {
    pub fn builder() -> SchemaBuilder { SchemaBuilder::default() }

    pub fn type_def(&self, entity_type: &EntityType) -> Result<&TypeDef, SchemaLookupError> {
        self.types.get(entity_type).ok_or_else(|| SchemaLookupError::UnknownType(entity_type.clone()))
    }

    pub fn relation(&self, entity_type: &EntityType, field: &str) -> Result<&RelationDef, SchemaLookupError> {
        self.type_def(entity_type)?
            .relations
            .get(field)
            .ok_or_else(|| SchemaLookupError::UnknownRelation { entity_type: entity_type.clone(), field: field.to_string() })
    }

    /// All relations declared on `entity_type`, in field-name order.
    pub fn relations(&self, entity_type: &EntityType) -> Result<impl Iterator<Item = &RelationDef>, SchemaLookupError> {
        Ok(self.type_def(entity_type)?.relations.values())
    }
}

/// Assembles a [`SchemaModel`]. Declaring a field implicitly registers its
/// owning type; each end of a bidirectional relation is declared separately by
/// the upstream validator.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    types: BTreeMap<EntityType, TypeDef>,
}

impl SchemaBuilder {
    pub fn entity_type(mut self, name: impl Into<EntityType>) -> Self {
        self.types.entry(name.into()).or_default();
        self
    }

    pub fn scalar(mut self, entity_type: impl Into<EntityType>, field: impl Into<String>) -> Self {
        self.types.entry(entity_type.into()).or_default().scalar_fields.insert(field.into());
        self
    }

    pub fn relation(
        self,
        entity_type: impl Into<EntityType>,
        own_field: impl Into<String>,
        inverse_field: impl Into<String>,
        related_type: impl Into<EntityType>,
    ) -> Self {
        self.insert_relation(entity_type, own_field, inverse_field, related_type, None)
    }

    pub fn relation_with_edge(
        self,
        entity_type: impl Into<EntityType>,
        own_field: impl Into<String>,
        inverse_field: impl Into<String>,
        related_type: impl Into<EntityType>,
        edge_type: impl Into<EntityType>,
    ) -> Self {
        self.insert_relation(entity_type, own_field, inverse_field, related_type, Some(edge_type.into()))
    }

    fn insert_relation(
        mut self,
        entity_type: impl Into<EntityType>,
        own_field: impl Into<String>,
        inverse_field: impl Into<String>,
        related_type: impl Into<EntityType>,
        edge_type: Option<EntityType>,
    ) -> Self {
        let own_field = own_field.into();
        let def = RelationDef {
            own_field: own_field.clone(),
            inverse_field: inverse_field.into(),
            related_type: related_type.into(),
            edge_type,
        };
        self.types.entry(entity_type.into()).or_default().relations.insert(own_field, def);
        self
    }

    pub fn build(self) -> SchemaModel { SchemaModel { types: self.types } }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> SchemaModel {
        SchemaModel::builder()
            .scalar("Post", "text")
            .relation("Post", "comments", "commentOn", "Comment")
            .relation_with_edge("Post", "tags", "tagOn", "Tag", "PostTag")
            .entity_type("Comment")
            .build()
    }

    #[test]
    fn relation_lookup() {
        let schema = schema();
        let rel = schema.relation(&"Post".into(), "comments").unwrap();
        assert_eq!(rel.own_field, "comments");
        assert_eq!(rel.inverse_field, "commentOn");
        assert_eq!(rel.related_type, EntityType::from("Comment"));
        assert_eq!(rel.edge_type, None);

        let rel = schema.relation(&"Post".into(), "tags").unwrap();
        assert_eq!(rel.edge_type, Some("PostTag".into()));
    }

    #[test]
    fn unknown_type_and_field() {
        let schema = schema();
        assert_eq!(schema.type_def(&"Album".into()).unwrap_err(), SchemaLookupError::UnknownType("Album".into()));
        assert_eq!(
            schema.relation(&"Post".into(), "likes").unwrap_err(),
            SchemaLookupError::UnknownRelation { entity_type: "Post".into(), field: "likes".to_string() }
        );
        // a declared type with no relations is not a lookup error
        assert_eq!(schema.relations(&"Comment".into()).unwrap().count(), 0);
    }

    #[test]
    fn relations_iterate_in_field_order() {
        let schema = schema();
        let fields: Vec<_> = schema.relations(&"Post".into()).unwrap().map(|r| r.own_field.as_str()).collect();
        assert_eq!(fields, vec!["comments", "tags"]);
    }
}
