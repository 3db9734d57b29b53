use crate::application::SeedConfig;
use crate::domain::ports::vector_index::{IndexStats, QueryMatch, VectorIndex};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of the post-load smoke test. Failures of the two probes are
/// recorded here instead of propagated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyReport {
    pub stats: Option<IndexStats>,
    pub probe: Vec<QueryMatch>,
    pub errors: Vec<String>,
}

/// Checks the freshly loaded index: fetch stats, then run one dummy-vector
/// query with metadata. Each call is guarded individually.
pub struct VerifyUseCase {
    index: Arc<dyn VectorIndex>,
    config: SeedConfig,
}

impl VerifyUseCase {
    pub fn new(index: Arc<dyn VectorIndex>, config: SeedConfig) -> Self {
        Self { index, config }
    }

    pub async fn execute(&self) -> VerifyReport {
        let mut report = VerifyReport::default();

        match self.index.describe_stats(&self.config.index_name).await {
            Ok(stats) => report.stats = Some(stats),
            Err(e) => report
                .errors
                .push(format!("Error getting index statistics: {e}")),
        }

        let dummy = vec![0.1_f32; self.config.dimension];
        match self
            .index
            .query(&self.config.index_name, &self.config.namespace, &dummy, 1, true)
            .await
        {
            Ok(matches) => report.probe = matches,
            Err(e) => report.errors.push(format!("Error querying index: {e}")),
        }

        report
    }
}
