mod common;

use common::{review, setup, write_dataset};

#[tokio::test]
async fn test_query_returns_nearest_review() {
    let (rs, _index) = setup();
    let reviews = vec![
        review("Dr. Smith", "Great lectures, fair exams"),
        review("Dr. Jones", "Hard grader but you learn a lot"),
        review("Dr. Patel", "Office hours were a lifesaver"),
    ];
    let (_dir, path) = write_dataset(&reviews);
    rs.seed(path.to_str().unwrap(), false).await.unwrap();

    // The stub embeds identical texts identically, so the exact review text
    // is its own nearest neighbor.
    let matches = rs.query("Hard grader but you learn a lot", 1).await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "Dr. Jones");
    assert!((matches[0].score - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn test_query_includes_metadata() {
    let (rs, _index) = setup();
    let (_dir, path) = write_dataset(&[review("Dr. Smith", "solid course")]);
    rs.seed(path.to_str().unwrap(), false).await.unwrap();

    let matches = rs.query("solid course", 3).await.unwrap();
    let meta = matches[0].metadata.as_ref().unwrap();
    assert_eq!(meta.professor, "Dr. Smith");
    assert_eq!(meta.review, "solid course");
    assert_eq!(meta.university, "State U");
}

#[tokio::test]
async fn test_query_respects_limit() {
    let (rs, _index) = setup();
    let reviews: Vec<_> = (0..5)
        .map(|i| review(&format!("Prof {i}"), &format!("review {i}")))
        .collect();
    let (_dir, path) = write_dataset(&reviews);
    rs.seed(path.to_str().unwrap(), false).await.unwrap();

    let matches = rs.query("review", 2).await.unwrap();
    assert_eq!(matches.len(), 2);
}

#[tokio::test]
async fn test_stats_after_seed() {
    let (rs, _index) = setup();
    let reviews: Vec<_> = (0..4)
        .map(|i| review(&format!("Prof {i}"), &format!("review {i}")))
        .collect();
    let (_dir, path) = write_dataset(&reviews);
    rs.seed(path.to_str().unwrap(), false).await.unwrap();

    let stats = rs.stats().await.unwrap();
    assert_eq!(stats.dimension, 1536);
    assert_eq!(stats.total_vector_count, 4);
    assert_eq!(stats.namespaces["ns1"].vector_count, 4);
}
