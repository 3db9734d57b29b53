use crate::application::SeedConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_index::{QueryMatch, VectorIndex};
use std::sync::Arc;

/// Embeds a free-text question and returns the nearest reviews.
pub struct QueryUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    config: SeedConfig,
}

impl QueryUseCase {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        config: SeedConfig,
    ) -> Self {
        Self { embedder, index, config }
    }

    pub async fn execute(&self, text: &str, top_k: usize) -> Result<Vec<QueryMatch>, DomainError> {
        let vectors = self.embedder.embed(&[text.to_string()]).await?;
        let vector = vectors
            .first()
            .ok_or_else(|| DomainError::Embedding("empty embedding response".into()))?;
        self.index
            .query(
                &self.config.index_name,
                &self.config.namespace,
                vector,
                top_k,
                true,
            )
            .await
    }
}
