use log::LevelFilter;
use simple_logger::SimpleLogger;

use grimoire_seed::config::{SeedConfig, StoreConfig};
use grimoire_seed::db::PostgresElementStore;
use grimoire_seed::embedding::{EmbeddingProvider, HuggingFaceEmbeddingProvider};
use grimoire_seed::rest_db::RestElementStore;
use grimoire_seed::seeding::{seed, ELEMENTS_TABLE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let config = SeedConfig::from_env()?;
    log::debug!("loaded config: {:?}", config);

    let provider = HuggingFaceEmbeddingProvider::new(config.embedding);

    let seeded = match config.store {
        StoreConfig::Postgres { database_url } => {
            let store = PostgresElementStore::connect(&database_url).await?;
            let seeded = match store
                .create_tables(ELEMENTS_TABLE, provider.dimensions())
                .await
            {
                Ok(()) => seed(&provider, &store).await,
                Err(err) => Err(err),
            };
            store.close().await;
            seeded?
        }
        StoreConfig::Rest { url, service_key } => {
            let store = RestElementStore::new(&url, &service_key);
            seed(&provider, &store).await?
        }
    };

    log::info!("seeded {} base elements", seeded);
    Ok(())
}
