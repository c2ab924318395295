use anyhow::{anyhow, Context};
use async_trait::async_trait;
use pgvector::Vector;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, Pool, Postgres};

use crate::element::ElementRecord;

/// Insert-or-replace persistence for element rows, keyed on `id`.
#[async_trait]
pub trait ElementStore: Send + Sync {
    async fn upsert(&self, table: &str, record: &ElementRecord) -> anyhow::Result<()>;
}

/// Only plain identifiers are interpolated into SQL.
pub(crate) fn validate_table_name(table: &str) -> anyhow::Result<&str> {
    let mut chars = table.chars();
    let valid_start = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        anyhow::Ok(table)
    } else {
        Err(anyhow!("invalid table name: {:?}", table))
    }
}

fn create_table_statement(table: &str, dimensions: usize) -> anyhow::Result<String> {
    let table = validate_table_name(table)?;
    anyhow::Ok(format!(
        "CREATE TABLE IF NOT EXISTS {} (
            id BIGINT PRIMARY KEY,
            name TEXT NOT NULL,
            is_base_element BOOLEAN NOT NULL DEFAULT FALSE,
            image_url TEXT,
            embedding vector({})
        )",
        table, dimensions
    ))
}

fn upsert_statement(table: &str) -> anyhow::Result<String> {
    let table = validate_table_name(table)?;
    anyhow::Ok(format!(
        "INSERT INTO {} (id, name, is_base_element, image_url, embedding) VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, is_base_element = EXCLUDED.is_base_element, \
         image_url = EXCLUDED.image_url, embedding = EXCLUDED.embedding",
        table
    ))
}

#[derive(Clone)]
pub struct PostgresElementStore {
    pool: Pool<Postgres>,
}

impl PostgresElementStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        log::debug!("connecting to postgres");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(database_url)
            .await
            .context("failed to connect to postgres")?;

        anyhow::Ok(PostgresElementStore { pool })
    }

    pub async fn create_tables(&self, table: &str, dimensions: usize) -> anyhow::Result<()> {
        self.pool
            .execute("CREATE EXTENSION IF NOT EXISTS vector")
            .await?;

        log::debug!("creating table {} in database", table);
        self.pool
            .execute(create_table_statement(table, dimensions)?.as_str())
            .await?;

        anyhow::Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ElementStore for PostgresElementStore {
    async fn upsert(&self, table: &str, record: &ElementRecord) -> anyhow::Result<()> {
        let sql = upsert_statement(table)?;
        sqlx::query(&sql)
            .bind(record.id)
            .bind(&record.name)
            .bind(record.is_base_element)
            .bind(record.image_url.as_deref())
            .bind(Vector::from(record.embedding.clone()))
            .execute(&self.pool)
            .await?;

        log::debug!("upserted {} into {}", record.id, table);
        anyhow::Ok(())
    }
}
