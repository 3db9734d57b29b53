use crate::application::SeedConfig;
use crate::domain::entities::review::Review;
use crate::domain::entities::vector_record::VectorRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_index::VectorIndex;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub embedded: usize,
    pub batches: usize,
    pub upserted: usize,
}

/// Embeds each review and upserts the resulting records in capped batches.
pub struct LoadReviewsUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    config: SeedConfig,
}

impl LoadReviewsUseCase {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        config: SeedConfig,
    ) -> Self {
        Self { embedder, index, config }
    }

    pub async fn execute(&self, reviews: &[Review]) -> Result<LoadReport, DomainError> {
        let dimension = self.embedder.dimension();

        // One embedding call per review, sequentially.
        let mut records = Vec::with_capacity(reviews.len());
        for review in reviews {
            let mut vectors = self
                .embedder
                .embed(std::slice::from_ref(&review.review))
                .await?;
            let values = vectors.pop().ok_or_else(|| {
                DomainError::Embedding(format!(
                    "no embedding returned for '{}'",
                    review.professor
                ))
            })?;
            records.push(VectorRecord::from_review(review, values, dimension)?);
        }

        let mut batches = 0;
        let mut upserted = 0;
        for chunk in records.chunks(self.config.batch_size) {
            let count = self
                .index
                .upsert(&self.config.index_name, &self.config.namespace, chunk)
                .await?;
            batches += 1;
            upserted += count;
            println!("Batch {batches} upserted count: {count}");
        }

        Ok(LoadReport {
            embedded: records.len(),
            batches,
            upserted,
        })
    }
}
