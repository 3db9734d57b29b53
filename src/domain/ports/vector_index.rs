use crate::domain::entities::review::ReviewMetadata;
use crate::domain::entities::vector_record::VectorRecord;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Shape of a serverless index to create.
#[derive(Debug, Clone, Serialize)]
pub struct IndexSpec {
    pub dimension: usize,
    pub metric: String,
    pub cloud: String,
    pub region: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    pub dimension: usize,
    pub total_vector_count: usize,
    pub namespaces: HashMap<String, NamespaceStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamespaceStats {
    pub vector_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryMatch {
    pub id: String,
    pub score: f32,
    #[serde(default)]
    pub metadata: Option<ReviewMetadata>,
}

#[async_trait::async_trait]
pub trait VectorIndex: Send + Sync {
    async fn list_indexes(&self) -> Result<Vec<String>, DomainError>;

    async fn create_index(&self, name: &str, spec: &IndexSpec) -> Result<(), DomainError>;

    async fn delete_index(&self, name: &str) -> Result<(), DomainError>;

    /// Insert-or-update records under a namespace. Returns the upserted count.
    async fn upsert(
        &self,
        index: &str,
        namespace: &str,
        records: &[VectorRecord],
    ) -> Result<usize, DomainError>;

    async fn describe_stats(&self, index: &str) -> Result<IndexStats, DomainError>;

    async fn query(
        &self,
        index: &str,
        namespace: &str,
        vector: &[f32],
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<QueryMatch>, DomainError>;
}
