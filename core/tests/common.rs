use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::Level;

use nodus_core::error::StorageError;
use nodus_core::{Attributes, CrudAdapter, FieldMap, MutationInfo, RequestContext, SchemaModel};
use nodus_proto::{EntityType, GlobalId};

/// One recorded adapter invocation, argument tuple included.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Exists(EntityType, GlobalId),
    Get(EntityType, GlobalId),
    Delete(EntityType, GlobalId),
    Update(EntityType, GlobalId, FieldMap),
}

/// Recording CrudAdapter stub: every call is logged, results are scripted.
#[derive(Default)]
pub struct MockCrud {
    pub calls: Mutex<Vec<Call>>,
    pub exists_result: bool,
    pub get_result: Option<Attributes>,
    pub delete_result: bool,
    pub update_result: bool,
    /// When set, every operation fails with a backend error after recording.
    pub fail: Option<String>,
}

impl MockCrud {
    pub fn calls(&self) -> Vec<Call> { self.calls.lock().unwrap().clone() }

    fn maybe_fail(&self) -> Result<(), StorageError> {
        match &self.fail {
            Some(msg) => Err(StorageError::from(anyhow::anyhow!("{msg}"))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CrudAdapter for MockCrud {
    async fn exists_node(&self, entity_type: &EntityType, id: &GlobalId) -> Result<bool, StorageError> {
        self.calls.lock().unwrap().push(Call::Exists(entity_type.clone(), id.clone()));
        self.maybe_fail()?;
        Ok(self.exists_result)
    }

    async fn get_node(&self, entity_type: &EntityType, id: &GlobalId) -> Result<Option<Attributes>, StorageError> {
        self.calls.lock().unwrap().push(Call::Get(entity_type.clone(), id.clone()));
        self.maybe_fail()?;
        Ok(self.get_result.clone())
    }

    async fn delete_node(&self, entity_type: &EntityType, id: &GlobalId) -> Result<bool, StorageError> {
        self.calls.lock().unwrap().push(Call::Delete(entity_type.clone(), id.clone()));
        self.maybe_fail()?;
        Ok(self.delete_result)
    }

    async fn update_node(&self, entity_type: &EntityType, id: &GlobalId, expression: &FieldMap) -> Result<bool, StorageError> {
        self.calls.lock().unwrap().push(Call::Update(entity_type.clone(), id.clone(), expression.clone()));
        self.maybe_fail()?;
        Ok(self.update_result)
    }
}

/// Post/Comment/Like/Tag fixture schema: one-to-many, many-to-many, and a
/// many-to-many with edge attributes.
pub fn schema() -> Arc<SchemaModel> {
    Arc::new(
        SchemaModel::builder()
            .scalar("Post", "text")
            .relation("Post", "comments", "commentOn", "Comment")
            .relation("Post", "likes", "likeOn", "Like")
            .relation_with_edge("Post", "tags", "tagOn", "Tag", "PostTag")
            .entity_type("Comment")
            .build(),
    )
}

pub fn context(crud: Arc<MockCrud>, entity_type: &str, id: GlobalId) -> RequestContext {
    RequestContext {
        schema: schema(),
        crud,
        mutation: MutationInfo {
            name: "updatePost".to_string(),
            client_mutation_id: Some("client-1".to_string()),
            related_ids: vec![],
        },
        entity_type: entity_type.into(),
        id,
    }
}

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_test_writer()
        .init();
}
