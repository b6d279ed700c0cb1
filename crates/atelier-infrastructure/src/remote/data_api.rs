//! DataApiClient - remote document mirror over an Atlas-style Data API.
//!
//! Every action is a JSON `POST {endpoint}/action/{name}` carrying the data
//! source, database and collection names, authenticated with an `api-key`
//! header.

use async_trait::async_trait;
use atelier_core::config::RemoteSettings;
use atelier_core::error::{AtelierError, Result};
use atelier_core::persistence::{Collection, RemoteMirror};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;

/// Remote mirror that talks to the document Data API.
#[derive(Clone)]
pub struct DataApiClient {
    client: Client,
    endpoint: String,
    data_source: String,
    database: String,
    api_key: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ActionRequest<'a> {
    data_source: &'a str,
    database: &'a str,
    collection: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upsert: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    #[serde(default)]
    documents: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
    error_code: Option<String>,
}

impl DataApiClient {
    pub fn new(settings: &RemoteSettings, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            data_source: settings.data_source.clone(),
            database: settings.database.clone(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }

    fn request(&self, collection: Collection) -> ActionRequest<'_> {
        ActionRequest {
            data_source: &self.data_source,
            database: &self.database,
            collection: collection.remote_name(),
            filter: None,
            document: None,
            update: None,
            upsert: None,
        }
    }

    async fn post_action(&self, action: &str, body: &ActionRequest<'_>) -> Result<Value> {
        let url = format!("{}/action/{}", self.endpoint, action);

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| AtelierError::transport(format!("Data API {} failed: {}", action, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Data API error body".to_string());
            let message = serde_json::from_str::<ErrorResponse>(&body_text)
                .ok()
                .and_then(|e| match (e.error_code, e.error) {
                    (Some(code), Some(msg)) => Some(format!("{code}: {msg}")),
                    (None, Some(msg)) => Some(msg),
                    _ => None,
                })
                .unwrap_or(body_text);
            return Err(AtelierError::transport(format!(
                "Data API {} returned {}: {}",
                action,
                status.as_u16(),
                message
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AtelierError::transport(format!("Failed to parse Data API response: {}", e)))
    }
}

#[async_trait]
impl RemoteMirror for DataApiClient {
    fn is_configured(&self) -> bool {
        true
    }

    async fn find(&self, collection: Collection) -> Result<Vec<Value>> {
        let mut body = self.request(collection);
        body.filter = Some(json!({}));

        let value = self.post_action("find", &body).await?;
        let parsed: FindResponse = serde_json::from_value(value)?;

        tracing::debug!(
            "[DataApi] find {} returned {} documents",
            collection,
            parsed.documents.len()
        );
        Ok(parsed.documents)
    }

    async fn insert_one(&self, collection: Collection, document: Value) -> Result<()> {
        let mut body = self.request(collection);
        body.document = Some(document);

        self.post_action("insertOne", &body).await?;
        Ok(())
    }

    async fn update_one(&self, collection: Collection, id: &str, document: Value) -> Result<()> {
        let mut body = self.request(collection);
        body.filter = Some(json!({ "id": id }));
        body.update = Some(json!({ "$set": document }));
        body.upsert = Some(true);

        self.post_action("updateOne", &body).await?;
        Ok(())
    }
}
