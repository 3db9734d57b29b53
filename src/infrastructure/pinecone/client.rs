use crate::domain::entities::vector_record::VectorRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_index::{
    IndexSpec, IndexStats, NamespaceStats, QueryMatch, VectorIndex,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

const DEFAULT_CONTROL_URL: &str = "https://api.pinecone.io";

/// Pinecone REST client covering the control plane (index lifecycle) and the
/// data plane (upsert/stats/query against the per-index host).
pub struct PineconeClient {
    client: Client,
    api_key: String,
    control_url: String,
    /// Per-index data-plane hosts, resolved once via describe-index.
    hosts: Mutex<HashMap<String, String>>,
}

#[derive(Deserialize)]
struct IndexList {
    #[serde(default)]
    indexes: Vec<IndexDescription>,
}

#[derive(Deserialize)]
struct IndexDescription {
    name: String,
    #[serde(default)]
    host: String,
}

#[derive(Serialize)]
struct CreateIndexRequest<'a> {
    name: &'a str,
    dimension: usize,
    metric: &'a str,
    spec: CreateIndexSpec<'a>,
}

#[derive(Serialize)]
struct CreateIndexSpec<'a> {
    serverless: ServerlessSpec<'a>,
}

#[derive(Serialize)]
struct ServerlessSpec<'a> {
    cloud: &'a str,
    region: &'a str,
}

#[derive(Serialize)]
struct UpsertRequest<'a> {
    vectors: &'a [VectorRecord],
    namespace: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpsertResponse {
    #[serde(default)]
    upserted_count: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    #[serde(default)]
    dimension: usize,
    #[serde(default)]
    total_vector_count: usize,
    #[serde(default)]
    namespaces: HashMap<String, NamespaceSummary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NamespaceSummary {
    #[serde(default)]
    vector_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    namespace: &'a str,
    top_k: usize,
    include_metadata: bool,
    vector: &'a [f32],
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

impl PineconeClient {
    pub fn new(api_key: String) -> Self {
        Self::with_control_url(api_key, DEFAULT_CONTROL_URL.to_string())
    }

    pub fn with_control_url(api_key: String, control_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key,
            control_url,
            hosts: Mutex::new(HashMap::new()),
        }
    }

    async fn check(resp: reqwest::Response, what: &str) -> Result<reqwest::Response, DomainError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(DomainError::Index(format!("{what}: {status}: {body}")))
    }

    async fn host_for(&self, index: &str) -> Result<String, DomainError> {
        if let Some(host) = self
            .hosts
            .lock()
            .ok()
            .and_then(|h| h.get(index).cloned())
        {
            return Ok(host);
        }

        let url = format!("{}/indexes/{index}", self.control_url);
        let resp = self
            .client
            .get(&url)
            .header("Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| DomainError::Index(format!("describe index failed: {e}")))?;
        let resp = Self::check(resp, "describe index").await?;
        let desc: IndexDescription = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Parse error: {e}")))?;

        if desc.host.is_empty() {
            return Err(DomainError::Index(format!(
                "index '{index}' has no data-plane host yet"
            )));
        }
        let host = if desc.host.starts_with("http") {
            desc.host
        } else {
            format!("https://{}", desc.host)
        };
        if let Ok(mut hosts) = self.hosts.lock() {
            hosts.insert(index.to_string(), host.clone());
        }
        Ok(host)
    }
}

#[async_trait::async_trait]
impl VectorIndex for PineconeClient {
    async fn list_indexes(&self) -> Result<Vec<String>, DomainError> {
        let url = format!("{}/indexes", self.control_url);
        let resp = self
            .client
            .get(&url)
            .header("Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| DomainError::Index(format!("list indexes failed: {e}")))?;
        let resp = Self::check(resp, "list indexes").await?;
        let list: IndexList = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Parse error: {e}")))?;
        Ok(list.indexes.into_iter().map(|i| i.name).collect())
    }

    async fn create_index(&self, name: &str, spec: &IndexSpec) -> Result<(), DomainError> {
        let url = format!("{}/indexes", self.control_url);
        let resp = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .json(&CreateIndexRequest {
                name,
                dimension: spec.dimension,
                metric: &spec.metric,
                spec: CreateIndexSpec {
                    serverless: ServerlessSpec {
                        cloud: &spec.cloud,
                        region: &spec.region,
                    },
                },
            })
            .send()
            .await
            .map_err(|e| DomainError::Index(format!("create index failed: {e}")))?;
        Self::check(resp, "create index").await?;
        Ok(())
    }

    async fn delete_index(&self, name: &str) -> Result<(), DomainError> {
        let url = format!("{}/indexes/{name}", self.control_url);
        let resp = self
            .client
            .delete(&url)
            .header("Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| DomainError::Index(format!("delete index failed: {e}")))?;
        Self::check(resp, "delete index").await?;
        if let Ok(mut hosts) = self.hosts.lock() {
            hosts.remove(name);
        }
        Ok(())
    }

    async fn upsert(
        &self,
        index: &str,
        namespace: &str,
        records: &[VectorRecord],
    ) -> Result<usize, DomainError> {
        let host = self.host_for(index).await?;
        let resp = self
            .client
            .post(format!("{host}/vectors/upsert"))
            .header("Api-Key", &self.api_key)
            .json(&UpsertRequest {
                vectors: records,
                namespace,
            })
            .send()
            .await
            .map_err(|e| DomainError::Index(format!("upsert failed: {e}")))?;
        let resp = Self::check(resp, "upsert").await?;
        let result: UpsertResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Parse error: {e}")))?;
        Ok(result.upserted_count)
    }

    async fn describe_stats(&self, index: &str) -> Result<IndexStats, DomainError> {
        let host = self.host_for(index).await?;
        let resp = self
            .client
            .post(format!("{host}/describe_index_stats"))
            .header("Api-Key", &self.api_key)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| DomainError::Index(format!("describe stats failed: {e}")))?;
        let resp = Self::check(resp, "describe stats").await?;
        let stats: StatsResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Parse error: {e}")))?;
        Ok(IndexStats {
            dimension: stats.dimension,
            total_vector_count: stats.total_vector_count,
            namespaces: stats
                .namespaces
                .into_iter()
                .map(|(ns, s)| {
                    (
                        ns,
                        NamespaceStats {
                            vector_count: s.vector_count,
                        },
                    )
                })
                .collect(),
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
        let host = self.host_for(index).await?;
        let resp = self
            .client
            .post(format!("{host}/query"))
            .header("Api-Key", &self.api_key)
            .json(&QueryRequest {
                namespace,
                top_k,
                include_metadata,
                vector,
            })
            .send()
            .await
            .map_err(|e| DomainError::Index(format!("query failed: {e}")))?;
        let resp = Self::check(resp, "query").await?;
        let result: QueryResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("Parse error: {e}")))?;
        Ok(result.matches)
    }
}
