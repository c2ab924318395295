use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::db::{validate_table_name, ElementStore};
use crate::element::ElementRecord;

#[derive(Error, Debug)]
pub enum RestError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: status {status}, body {body}")]
    Api { status: u16, body: String },
}

/// Writes rows through a PostgREST endpoint (`{url}/rest/v1/{table}`), as hosted by Supabase.
pub struct RestElementStore {
    client: Client,
    url: String,
    service_key: String,
}

impl RestElementStore {
    pub fn new(url: &str, service_key: &str) -> Self {
        RestElementStore {
            client: Client::new(),
            url: url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        }
    }
}

#[async_trait]
impl ElementStore for RestElementStore {
    async fn upsert(&self, table: &str, record: &ElementRecord) -> anyhow::Result<()> {
        let endpoint = format!("{}/rest/v1/{}", self.url, validate_table_name(table)?);
        log::debug!("upserting {} via {}", record.id, endpoint);

        let res = self
            .client
            .post(&endpoint)
            .query(&[("on_conflict", "id")])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| RestError::Network(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(RestError::Api { status, body }.into());
        }

        anyhow::Ok(())
    }
}
