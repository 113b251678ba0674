//! Shopping List API Client
//!
//! HTTP bindings to the two read endpoints. On wasm, reqwest goes through
//! the browser's `fetch`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use list_sync::{decode_list, decode_updated, Endpoint, FetchError, FetchResult, ListItem, ListSource};

use crate::config::ListViewConfig;

pub struct HttpListSource {
    client: reqwest::Client,
    list_url: String,
    updated_url: String,
}

impl HttpListSource {
    pub fn new(config: &ListViewConfig, origin: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            list_url: config.list_url(origin),
            updated_url: config.updated_url(origin),
        }
    }

    async fn get_body(&self, endpoint: Endpoint, url: &str) -> FetchResult<String> {
        let fail = |e: reqwest::Error| FetchError::new(endpoint, e.to_string());
        self.client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(fail)?
            .text()
            .await
            .map_err(fail)
    }
}

#[async_trait(?Send)]
impl ListSource for HttpListSource {
    async fn fetch_list(&self) -> FetchResult<Vec<ListItem>> {
        let body = self.get_body(Endpoint::List, &self.list_url).await?;
        decode_list(&body).map_err(|e| FetchError::new(Endpoint::List, format!("invalid JSON: {}", e)))
    }

    async fn fetch_server_updated(&self) -> FetchResult<DateTime<Utc>> {
        let body = self.get_body(Endpoint::Updated, &self.updated_url).await?;
        decode_updated(&body).map_err(|e| FetchError::new(Endpoint::Updated, format!("invalid JSON: {}", e)))
    }
}
