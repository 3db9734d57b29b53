pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::load::{LoadReport, LoadReviewsUseCase};
use crate::application::query::QueryUseCase;
use crate::application::rebuild::RebuildIndexUseCase;
use crate::application::stats::StatsUseCase;
use crate::application::verify::{VerifyReport, VerifyUseCase};
use crate::application::SeedConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_index::{IndexStats, QueryMatch, VectorIndex};
use crate::infrastructure::dataset;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::pinecone::client::PineconeClient;
use std::sync::Arc;

/// Result of a full seeding run: the load figures plus the verification
/// probes that follow the settle wait.
#[derive(Debug)]
pub struct SeedOutcome {
    pub load: LoadReport,
    pub verify: VerifyReport,
}

pub struct RagSeed {
    rebuild_uc: RebuildIndexUseCase,
    load_uc: LoadReviewsUseCase,
    verify_uc: VerifyUseCase,
    query_uc: QueryUseCase,
    stats_uc: StatsUseCase,
    config: SeedConfig,
}

impl RagSeed {
    /// Wire the production adapters from the environment.
    pub fn new() -> Result<Self, DomainError> {
        let pinecone_key = std::env::var("PINECONE_API_KEY")
            .map_err(|_| DomainError::Config("PINECONE_API_KEY not set".into()))?;
        let openai_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| DomainError::Config("OPENAI_API_KEY not set".into()))?;
        let model = std::env::var("RAGSEED_EMBEDDING_MODEL").ok();

        let embedder: Arc<dyn EmbeddingProvider> = Arc::new(OpenAiProvider::new(openai_key, model));
        let index: Arc<dyn VectorIndex> = Arc::new(PineconeClient::new(pinecone_key));
        Self::with_providers(embedder, index, SeedConfig::default())
    }

    pub fn with_providers(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        config: SeedConfig,
    ) -> Result<Self, DomainError> {
        let dim = embedder.dimension();
        if dim != config.dimension {
            return Err(DomainError::Config(format!(
                "embedding provider produces {dim}-dimensional vectors but the index is configured for {}",
                config.dimension
            )));
        }

        Ok(Self {
            rebuild_uc: RebuildIndexUseCase::new(index.clone(), config.clone()),
            load_uc: LoadReviewsUseCase::new(embedder.clone(), index.clone(), config.clone()),
            verify_uc: VerifyUseCase::new(index.clone(), config.clone()),
            query_uc: QueryUseCase::new(embedder, index.clone(), config.clone()),
            stats_uc: StatsUseCase::new(index, config.clone()),
            config,
        })
    }

    /// Run the full pipeline: (re)create the index, embed and upsert the
    /// dataset, wait for indexing, then verify. With `keep_index` the
    /// existing index is reused and only the load and verify steps run.
    pub async fn seed(&self, file: &str, keep_index: bool) -> Result<SeedOutcome, DomainError> {
        if !keep_index {
            self.rebuild_uc.execute().await?;
        }

        let reviews = dataset::load_reviews(file)?;
        println!("Loaded {} reviews from {file}", reviews.len());

        let load = self.load_uc.execute(&reviews).await?;

        println!("Waiting for indexing to complete...");
        tokio::time::sleep(self.config.settle_wait).await;

        let verify = self.verify_uc.execute().await;
        Ok(SeedOutcome { load, verify })
    }

    pub async fn verify(&self) -> VerifyReport {
        self.verify_uc.execute().await
    }

    pub async fn query(&self, text: &str, top_k: usize) -> Result<Vec<QueryMatch>, DomainError> {
        self.query_uc.execute(text, top_k).await
    }

    pub async fn stats(&self) -> Result<IndexStats, DomainError> {
        self.stats_uc.execute().await
    }
}
