use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;

/// Deterministic offline provider: folds the text's bytes into a
/// fixed-length vector. Identical texts embed identically, so similarity
/// ranking is stable in tests.
pub struct StubProvider {
    dimension: usize,
}

impl StubProvider {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn vector_for(text: &str, dimension: usize) -> Vec<f32> {
        let mut v = vec![0.0_f32; dimension];
        for (i, b) in text.bytes().enumerate() {
            v[i % dimension] += f32::from(b) / 255.0;
        }
        if text.is_empty() {
            v[0] = 1.0;
        }
        v
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for StubProvider {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts
            .iter()
            .map(|t| Self::vector_for(t, self.dimension))
            .collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
