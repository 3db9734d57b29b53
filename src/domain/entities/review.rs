use serde::{Deserialize, Serialize};

/// One professor review as it appears in the source dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub professor: String,
    pub review: String,
    pub subject: String,
    pub stars: f64,
    pub university: String,
}

/// Metadata stored alongside each vector: the five source fields verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewMetadata {
    pub professor: String,
    pub review: String,
    pub subject: String,
    pub stars: f64,
    pub university: String,
}

impl From<&Review> for ReviewMetadata {
    fn from(r: &Review) -> Self {
        Self {
            professor: r.professor.clone(),
            review: r.review.clone(),
            subject: r.subject.clone(),
            stars: r.stars,
            university: r.university.clone(),
        }
    }
}
