use crate::config::HuggingFaceConfig;
use crate::embedding::base::{Embedding, EmbeddingProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://router.huggingface.co/hf-inference";
pub const DEFAULT_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";
pub const DEFAULT_DIMENSIONS: usize = 384;

#[derive(Serialize)]
struct FeatureExtractionRequest<'a> {
    inputs: &'a [String],
}

// The endpoint answers `[[...]]` for batched inputs and sometimes `[...]` for one input.
#[derive(Deserialize)]
#[serde(untagged)]
enum FeatureExtractionResponse {
    Batch(Vec<Embedding>),
    Single(Embedding),
}

impl FeatureExtractionResponse {
    fn into_embeddings(self) -> Vec<Embedding> {
        match self {
            FeatureExtractionResponse::Batch(embeddings) => embeddings,
            FeatureExtractionResponse::Single(embedding) => vec![embedding],
        }
    }
}

#[derive(Error, Debug)]
pub enum HuggingFaceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: status {status}, body {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected embedding format: {0}")]
    Decode(String),

    #[error("Unexpected embedding format: empty vector")]
    EmptyEmbedding,

    #[error("Expected {expected} embeddings, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

/// Feature extraction through the HuggingFace inference router.
pub struct HuggingFaceEmbeddingProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    dimensions: usize,
}

impl HuggingFaceEmbeddingProvider {
    pub fn new(config: HuggingFaceConfig) -> Self {
        let endpoint = format!(
            "{}/models/{}/pipeline/feature-extraction",
            config.api_url.trim_end_matches('/'),
            config.model
        );
        HuggingFaceEmbeddingProvider {
            client: Client::new(),
            endpoint,
            api_key: config.api_key,
            dimensions: config.dimensions,
        }
    }

    async fn feature_extraction(
        &self,
        spans: &[String],
    ) -> Result<Vec<Embedding>, HuggingFaceError> {
        log::debug!("requesting {} embeddings from {}", spans.len(), self.endpoint);
        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&FeatureExtractionRequest { inputs: spans })
            .send()
            .await
            .map_err(|e| HuggingFaceError::Network(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(HuggingFaceError::Api { status, body });
        }

        let embeddings = res
            .json::<FeatureExtractionResponse>()
            .await
            .map_err(|e| HuggingFaceError::Decode(e.to_string()))?
            .into_embeddings();

        if embeddings.len() != spans.len() {
            return Err(HuggingFaceError::CountMismatch {
                expected: spans.len(),
                actual: embeddings.len(),
            });
        }
        if embeddings.iter().any(|embedding| embedding.is_empty()) {
            return Err(HuggingFaceError::EmptyEmbedding);
        }

        Ok(embeddings)
    }
}

#[async_trait]
impl EmbeddingProvider for HuggingFaceEmbeddingProvider {
    async fn embed(&self, spans: Vec<String>) -> anyhow::Result<Vec<Embedding>> {
        anyhow::Ok(self.feature_extraction(&spans).await?)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
