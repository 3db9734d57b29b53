//! Shared test helpers.

use ragseed::application::SeedConfig;
use ragseed::domain::entities::review::Review;
use ragseed::infrastructure::embeddings::stub::StubProvider;
use ragseed::infrastructure::memory::InMemoryIndex;
use ragseed::RagSeed;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub fn fast_config() -> SeedConfig {
    SeedConfig {
        delete_wait: Duration::ZERO,
        create_wait: Duration::ZERO,
        settle_wait: Duration::ZERO,
        ..SeedConfig::default()
    }
}

pub fn setup() -> (RagSeed, Arc<InMemoryIndex>) {
    let index = Arc::new(InMemoryIndex::new());
    let rs = RagSeed::with_providers(
        Arc::new(StubProvider::new(1536)),
        index.clone(),
        fast_config(),
    )
    .unwrap();
    (rs, index)
}

pub fn review(professor: &str, text: &str) -> Review {
    Review {
        professor: professor.to_string(),
        review: text.to_string(),
        subject: "Physics".to_string(),
        stars: 4.0,
        university: "State U".to_string(),
    }
}

/// Write a reviews.json fixture; the TempDir keeps it alive.
pub fn write_dataset(reviews: &[Review]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reviews.json");
    let body = serde_json::json!({ "reviews": reviews });
    std::fs::write(&path, serde_json::to_string(&body).unwrap()).unwrap();
    (dir, path)
}
