use anyhow::{anyhow, Context};

use crate::db::ElementStore;
use crate::element::{normalize_name, ElementRecord};
use crate::embedding::EmbeddingProvider;

pub const BASE_ELEMENTS: [&str; 4] = ["Fire", "Water", "Air", "Earth"];
pub const ELEMENTS_TABLE: &str = "elements";

/// Seeds the base elements into the `elements` table.
pub async fn seed(
    provider: &dyn EmbeddingProvider,
    store: &dyn ElementStore,
) -> anyhow::Result<usize> {
    seed_elements(provider, store, ELEMENTS_TABLE, &BASE_ELEMENTS).await
}

/// Embeds and upserts each name in order, with ids counting up from 1.
/// Names are normalized before embedding, so the stored vector is the one for the stored name.
///
/// The first failure stops the run; rows written before it stay written.
pub async fn seed_elements(
    provider: &dyn EmbeddingProvider,
    store: &dyn ElementStore,
    table: &str,
    names: &[&str],
) -> anyhow::Result<usize> {
    let mut seeded = 0;
    for (idx, raw_name) in names.iter().enumerate() {
        let name = normalize_name(raw_name);
        let embedding = embed_one(provider, &name)
            .await
            .with_context(|| format!("failed to embed {}", name))?;
        log::debug!("embedding size for {}: {}", name, embedding.len());

        let record = ElementRecord::base(idx as i64 + 1, &name, embedding);
        store
            .upsert(table, &record)
            .await
            .with_context(|| format!("failed to save {}", name))?;

        log::info!("saved {}", name);
        seeded += 1;
    }

    anyhow::Ok(seeded)
}

async fn embed_one(provider: &dyn EmbeddingProvider, name: &str) -> anyhow::Result<Vec<f32>> {
    let mut embeddings = provider.embed(vec![name.to_string()]).await?;
    if embeddings.len() != 1 {
        return Err(anyhow!(
            "expected 1 embedding, provider returned {}",
            embeddings.len()
        ));
    }
    let embedding = embeddings
        .pop()
        .ok_or_else(|| anyhow!("provider returned no embedding"))?;

    if embedding.len() != provider.dimensions() {
        return Err(anyhow!(
            "invalid vector dimension: expected {}, got {}",
            provider.dimensions(),
            embedding.len()
        ));
    }

    anyhow::Ok(embedding)
}
