use crate::domain::entities::vector_record::VectorRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_index::{
    IndexSpec, IndexStats, NamespaceStats, QueryMatch, VectorIndex,
};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct IndexState {
    dimension: usize,
    namespaces: HashMap<String, HashMap<String, VectorRecord>>,
    batch_sizes: Vec<usize>,
}

/// In-process vector index used by the test suites. Mirrors the remote
/// service's observable behavior: create fails on a duplicate name, upserts
/// overwrite by id, queries rank by cosine similarity.
#[derive(Default)]
pub struct InMemoryIndex {
    inner: Mutex<HashMap<String, IndexState>>,
}

impl InMemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_index(&self, index: &str) -> bool {
        self.inner
            .lock()
            .map(|m| m.contains_key(index))
            .unwrap_or(false)
    }

    pub fn record(&self, index: &str, namespace: &str, id: &str) -> Option<VectorRecord> {
        let map = self.inner.lock().ok()?;
        map.get(index)?.namespaces.get(namespace)?.get(id).cloned()
    }

    pub fn count(&self, index: &str, namespace: &str) -> usize {
        self.inner
            .lock()
            .ok()
            .and_then(|m| {
                m.get(index)
                    .and_then(|s| s.namespaces.get(namespace).map(HashMap::len))
            })
            .unwrap_or(0)
    }

    /// Sizes of the upsert batches received for an index, in arrival order.
    pub fn batch_sizes(&self, index: &str) -> Vec<usize> {
        self.inner
            .lock()
            .ok()
            .and_then(|m| m.get(index).map(|s| s.batch_sizes.clone()))
            .unwrap_or_default()
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }
        let mut dot = 0.0_f64;
        let mut norm_a = 0.0_f64;
        let mut norm_b = 0.0_f64;
        for (x, y) in a.iter().zip(b.iter()) {
            let x = f64::from(*x);
            let y = f64::from(*y);
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        let denom = norm_a.sqrt() * norm_b.sqrt();
        if denom == 0.0 {
            0.0
        } else {
            dot / denom
        }
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, IndexState>>, DomainError> {
        self.inner
            .lock()
            .map_err(|e| DomainError::Index(e.to_string()))
    }
}

#[async_trait::async_trait]
impl VectorIndex for InMemoryIndex {
    async fn list_indexes(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.locked()?.keys().cloned().collect())
    }

    async fn create_index(&self, name: &str, spec: &IndexSpec) -> Result<(), DomainError> {
        let mut map = self.locked()?;
        if map.contains_key(name) {
            return Err(DomainError::Index(format!("index '{name}' already exists")));
        }
        map.insert(
            name.to_string(),
            IndexState {
                dimension: spec.dimension,
                ..IndexState::default()
            },
        );
        Ok(())
    }

    async fn delete_index(&self, name: &str) -> Result<(), DomainError> {
        let mut map = self.locked()?;
        map.remove(name)
            .map(|_| ())
            .ok_or_else(|| DomainError::Index(format!("index '{name}' not found")))
    }

    async fn upsert(
        &self,
        index: &str,
        namespace: &str,
        records: &[VectorRecord],
    ) -> Result<usize, DomainError> {
        let mut map = self.locked()?;
        let state = map
            .get_mut(index)
            .ok_or_else(|| DomainError::Index(format!("index '{index}' not found")))?;
        state.batch_sizes.push(records.len());
        let ns = state.namespaces.entry(namespace.to_string()).or_default();
        for record in records {
            ns.insert(record.id.clone(), record.clone());
        }
        Ok(records.len())
    }

    async fn describe_stats(&self, index: &str) -> Result<IndexStats, DomainError> {
        let map = self.locked()?;
        let state = map
            .get(index)
            .ok_or_else(|| DomainError::Index(format!("index '{index}' not found")))?;
        let namespaces: HashMap<String, NamespaceStats> = state
            .namespaces
            .iter()
            .map(|(ns, records)| {
                (
                    ns.clone(),
                    NamespaceStats {
                        vector_count: records.len(),
                    },
                )
            })
            .collect();
        Ok(IndexStats {
            dimension: state.dimension,
            total_vector_count: namespaces.values().map(|n| n.vector_count).sum(),
            namespaces,
        })
    }

    async fn query(
        &self,
        index: &str,
        namespace: &str,
        vector: &[f32],
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<QueryMatch>, DomainError> {
        let map = self.locked()?;
        let state = map
            .get(index)
            .ok_or_else(|| DomainError::Index(format!("index '{index}' not found")))?;
        let mut scored: Vec<QueryMatch> = state
            .namespaces
            .get(namespace)
            .map(|records| {
                records
                    .values()
                    .map(|r| QueryMatch {
                        id: r.id.clone(),
                        score: Self::cosine_similarity(vector, &r.values) as f32,
                        metadata: include_metadata.then(|| r.metadata.clone()),
                    })
                    .collect()
            })
            .unwrap_or_default();
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        Ok(scored)
    }
}
