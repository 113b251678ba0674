//! List Source
//!
//! Abstract interface for the two read endpoints.
//! The browser implementation goes over HTTP; tests use a scripted source.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::FetchResult;
use crate::model::ListItem;

/// Read access to the shopping list server.
///
/// Futures are not `Send`: on wasm they wrap browser promises.
#[async_trait(?Send)]
pub trait ListSource {
    /// `GET /api/list`
    async fn fetch_list(&self) -> FetchResult<Vec<ListItem>>;

    /// `GET /api/updated`
    async fn fetch_server_updated(&self) -> FetchResult<DateTime<Utc>>;
}
