pub mod load;
pub mod query;
pub mod rebuild;
pub mod stats;
pub mod verify;

use std::time::Duration;

/// Pipeline settings shared by the seeding use cases. Defaults mirror the
/// production index layout: a 1536-dimensional cosine index named "rag" on
/// serverless aws/us-east-1, loaded under namespace "ns1".
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub index_name: String,
    pub namespace: String,
    pub dimension: usize,
    pub metric: String,
    pub cloud: String,
    pub region: String,
    pub batch_size: usize,
    /// Pause after deleting an existing index.
    pub delete_wait: Duration,
    /// Pause after creating the index.
    pub create_wait: Duration,
    /// Pause between the last upsert and verification.
    pub settle_wait: Duration,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            index_name: "rag".into(),
            namespace: "ns1".into(),
            dimension: 1536,
            metric: "cosine".into(),
            cloud: "aws".into(),
            region: "us-east-1".into(),
            batch_size: 100,
            delete_wait: Duration::from_secs(10),
            create_wait: Duration::from_secs(60),
            settle_wait: Duration::from_secs(60),
        }
    }
}
