use crate::domain::error::DomainError;

#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed each text into a fixed-length float vector.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError>;
    fn dimension(&self) -> usize;
}
