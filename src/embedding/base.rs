use async_trait::async_trait;

pub type Embedding = Vec<f32>;

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Returns one embedding per span, in the order given.
    async fn embed(&self, spans: Vec<String>) -> anyhow::Result<Vec<Embedding>>;

    /// Length of every embedding this provider produces.
    fn dimensions(&self) -> usize;
}

/// Hands back the same vector for every span.
pub struct FakeEmbeddingProvider {
    embedding: Embedding,
}

impl FakeEmbeddingProvider {
    pub fn new(embedding: Embedding) -> Self {
        FakeEmbeddingProvider { embedding }
    }
}

impl Default for FakeEmbeddingProvider {
    fn default() -> Self {
        FakeEmbeddingProvider::new([0.32; 5].to_vec())
    }
}

#[async_trait]
impl EmbeddingProvider for FakeEmbeddingProvider {
    async fn embed(&self, spans: Vec<String>) -> anyhow::Result<Vec<Embedding>> {
        let mut embeddings = Vec::<Embedding>::new();
        for _ in spans {
            embeddings.push(self.embedding.clone());
        }

        anyhow::Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        self.embedding.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_fake_provider_embeds_every_span() {
        let provider = FakeEmbeddingProvider::new(vec![1.0, 0.0]);
        let embeddings = provider
            .embed(vec!["Fire".to_string(), "Water".to_string()])
            .await
            .unwrap();

        assert_eq!(embeddings, vec![vec![1.0, 0.0], vec![1.0, 0.0]]);
        assert_eq!(provider.dimensions(), 2);
        assert_eq!(FakeEmbeddingProvider::default().dimensions(), 5);
    }
}
