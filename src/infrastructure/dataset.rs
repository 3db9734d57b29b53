use crate::domain::entities::review::Review;
use crate::domain::error::DomainError;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct ReviewFile {
    reviews: Vec<Review>,
}

/// Parse the review dataset document: `{ "reviews": [ ... ] }`.
pub fn parse_reviews(raw: &str) -> Result<Vec<Review>, DomainError> {
    let file: ReviewFile = serde_json::from_str(raw)
        .map_err(|e| DomainError::Parse(format!("invalid review data: {e}")))?;
    Ok(file.reviews)
}

/// Read and parse a review dataset from disk.
pub fn load_reviews(path: impl AsRef<Path>) -> Result<Vec<Review>, DomainError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Dataset(format!("cannot read {}: {e}", path.display())))?;
    parse_reviews(&raw)
}
