use crate::application::SeedConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_index::{IndexStats, VectorIndex};
use std::sync::Arc;

pub struct StatsUseCase {
    index: Arc<dyn VectorIndex>,
    config: SeedConfig,
}

impl StatsUseCase {
    pub fn new(index: Arc<dyn VectorIndex>, config: SeedConfig) -> Self {
        Self { index, config }
    }

    pub async fn execute(&self) -> Result<IndexStats, DomainError> {
        self.index.describe_stats(&self.config.index_name).await
    }
}
