mod common;

use common::{fast_config, review, setup, write_dataset};
use ragseed::domain::error::DomainError;
use ragseed::domain::ports::embedding_port::EmbeddingProvider;
use ragseed::infrastructure::memory::InMemoryIndex;
use ragseed::RagSeed;
use std::sync::Arc;

#[tokio::test]
async fn test_seed_builds_records_with_full_metadata() {
    let (rs, index) = setup();
    let reviews = vec![
        review("Dr. Smith", "Great lectures, fair exams"),
        review("Dr. Jones", "Hard grader but you learn a lot"),
        review("Dr. Patel", "Office hours were a lifesaver"),
    ];
    let (_dir, path) = write_dataset(&reviews);

    let outcome = rs.seed(path.to_str().unwrap(), false).await.unwrap();

    assert_eq!(outcome.load.embedded, 3);
    assert_eq!(outcome.load.upserted, 3);
    assert!(index.has_index("rag"));
    assert_eq!(index.count("rag", "ns1"), 3);

    let record = index.record("rag", "ns1", "Dr. Smith").unwrap();
    assert_eq!(record.values.len(), 1536);
    assert_eq!(record.metadata.professor, "Dr. Smith");
    assert_eq!(record.metadata.review, "Great lectures, fair exams");
    assert_eq!(record.metadata.subject, "Physics");
    assert_eq!(record.metadata.stars, 4.0);
    assert_eq!(record.metadata.university, "State U");
}

#[tokio::test]
async fn test_seed_batches_capped_at_100() {
    let (rs, index) = setup();
    let reviews: Vec<_> = (0..250)
        .map(|i| review(&format!("Prof {i}"), &format!("review number {i}")))
        .collect();
    let (_dir, path) = write_dataset(&reviews);

    let outcome = rs.seed(path.to_str().unwrap(), false).await.unwrap();

    assert_eq!(outcome.load.batches, 3);
    assert_eq!(outcome.load.upserted, 250);
    let sizes = index.batch_sizes("rag");
    assert_eq!(sizes, vec![100, 100, 50]);
    assert!(sizes.iter().all(|s| *s <= 100));
}

#[tokio::test]
async fn test_seed_recreates_existing_index() {
    let (rs, index) = setup();

    let (_d1, first) = write_dataset(&[review("Dr. Old", "will be wiped")]);
    rs.seed(first.to_str().unwrap(), false).await.unwrap();
    assert_eq!(index.count("rag", "ns1"), 1);

    let (_d2, second) = write_dataset(&[review("Dr. New", "fresh data")]);
    rs.seed(second.to_str().unwrap(), false).await.unwrap();

    assert_eq!(index.count("rag", "ns1"), 1);
    assert!(index.record("rag", "ns1", "Dr. Old").is_none());
    assert!(index.record("rag", "ns1", "Dr. New").is_some());
}

#[tokio::test]
async fn test_keep_index_appends_to_existing() {
    let (rs, index) = setup();

    let (_d1, first) = write_dataset(&[review("Dr. A", "first load")]);
    rs.seed(first.to_str().unwrap(), false).await.unwrap();

    let (_d2, second) = write_dataset(&[review("Dr. B", "second load")]);
    rs.seed(second.to_str().unwrap(), true).await.unwrap();

    assert_eq!(index.count("rag", "ns1"), 2);
}

#[tokio::test]
async fn test_duplicate_professor_last_wins() {
    let (rs, index) = setup();
    let reviews = vec![
        review("Dr. Smith", "first opinion"),
        review("Dr. Smith", "second opinion"),
    ];
    let (_dir, path) = write_dataset(&reviews);

    rs.seed(path.to_str().unwrap(), false).await.unwrap();

    assert_eq!(index.count("rag", "ns1"), 1);
    let record = index.record("rag", "ns1", "Dr. Smith").unwrap();
    assert_eq!(record.metadata.review, "second opinion");
}

#[tokio::test]
async fn test_seed_empty_dataset_still_verifies() {
    let (rs, index) = setup();
    let (_dir, path) = write_dataset(&[]);

    let outcome = rs.seed(path.to_str().unwrap(), false).await.unwrap();

    assert_eq!(outcome.load.embedded, 0);
    assert_eq!(outcome.load.batches, 0);
    assert!(index.batch_sizes("rag").is_empty());
    assert!(outcome.verify.errors.is_empty());
    assert_eq!(outcome.verify.stats.unwrap().total_vector_count, 0);
    assert!(outcome.verify.probe.is_empty());
}

/// Declares the configured dimension but embeds into shorter vectors.
struct ShortVectorProvider;

#[async_trait::async_trait]
impl EmbeddingProvider for ShortVectorProvider {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts.iter().map(|_| vec![0.5_f32; 8]).collect())
    }

    fn dimension(&self) -> usize {
        1536
    }
}

#[tokio::test]
async fn test_wrong_dimension_embedding_rejected_before_upsert() {
    let index = Arc::new(InMemoryIndex::new());
    let rs = RagSeed::with_providers(
        Arc::new(ShortVectorProvider),
        index.clone(),
        fast_config(),
    )
    .unwrap();
    let (_dir, path) = write_dataset(&[review("Dr. Smith", "solid course")]);

    let err = rs
        .seed(path.to_str().unwrap(), false)
        .await
        .map(|_| ())
        .unwrap_err();

    assert!(matches!(err, DomainError::Embedding(_)));
    assert_eq!(index.count("rag", "ns1"), 0);
    assert!(index.batch_sizes("rag").is_empty());
}

#[tokio::test]
async fn test_seed_missing_file_is_dataset_error() {
    let (rs, _index) = setup();
    let err = rs.seed("/no/such/reviews.json", false).await.unwrap_err();
    assert!(matches!(err, DomainError::Dataset(_)));
}

#[tokio::test]
async fn test_seed_verify_reports_stats_and_probe() {
    let (rs, _index) = setup();
    let (_dir, path) = write_dataset(&[review("Dr. Smith", "solid course")]);

    let outcome = rs.seed(path.to_str().unwrap(), false).await.unwrap();

    assert!(outcome.verify.errors.is_empty());
    let stats = outcome.verify.stats.unwrap();
    assert_eq!(stats.dimension, 1536);
    assert_eq!(stats.total_vector_count, 1);
    assert_eq!(stats.namespaces["ns1"].vector_count, 1);

    // Dummy-vector probe asks for top_k = 1 with metadata.
    assert_eq!(outcome.verify.probe.len(), 1);
    assert!(outcome.verify.probe[0].metadata.is_some());
}
