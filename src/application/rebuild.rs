use crate::application::SeedConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_index::{IndexSpec, VectorIndex};
use std::sync::Arc;

/// Recreates the target index from scratch: delete it if it exists, create
/// it fresh, then wait out eventual consistency with fixed pauses.
pub struct RebuildIndexUseCase {
    index: Arc<dyn VectorIndex>,
    config: SeedConfig,
}

impl RebuildIndexUseCase {
    pub fn new(index: Arc<dyn VectorIndex>, config: SeedConfig) -> Self {
        Self { index, config }
    }

    pub async fn execute(&self) -> Result<(), DomainError> {
        let existing = self.index.list_indexes().await?;
        if existing.iter().any(|n| n == &self.config.index_name) {
            println!("Deleting existing '{}' index...", self.config.index_name);
            self.index.delete_index(&self.config.index_name).await?;
            tokio::time::sleep(self.config.delete_wait).await;
        }

        println!("Creating '{}' index...", self.config.index_name);
        let spec = IndexSpec {
            dimension: self.config.dimension,
            metric: self.config.metric.clone(),
            cloud: self.config.cloud.clone(),
            region: self.config.region.clone(),
        };
        self.index.create_index(&self.config.index_name, &spec).await?;

        println!("Waiting for index to be created...");
        tokio::time::sleep(self.config.create_wait).await;
        Ok(())
    }
}
