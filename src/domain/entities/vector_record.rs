use crate::domain::entities::review::{Review, ReviewMetadata};
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// A vector-store entry: one embedded review keyed by professor name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: ReviewMetadata,
}

impl VectorRecord {
    /// Build a record from a review and its embedding. Rejects vectors that
    /// don't match the index dimension before anything reaches the store.
    pub fn from_review(
        review: &Review,
        values: Vec<f32>,
        dimension: usize,
    ) -> Result<Self, DomainError> {
        if values.len() != dimension {
            return Err(DomainError::Embedding(format!(
                "embedding for '{}' has {} dimensions, index expects {dimension}",
                review.professor,
                values.len()
            )));
        }
        Ok(Self {
            id: review.professor.clone(),
            values,
            metadata: ReviewMetadata::from(review),
        })
    }
}
