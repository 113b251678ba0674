//! Fetch Errors
//!
//! One undifferentiated error kind shared by both endpoints. Network
//! failures, bad statuses and undecodable bodies all end up here.

use std::fmt;

/// Which read operation produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /api/list`
    List,
    /// `GET /api/updated`
    Updated,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::List => "list",
            Endpoint::Updated => "updated",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed fetch, kept in view state as the last error seen
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fetch {endpoint} failed: {message}")]
pub struct FetchError {
    pub endpoint: Endpoint,
    pub message: String,
}

impl FetchError {
    pub fn new(endpoint: Endpoint, message: impl Into<String>) -> Self {
        Self {
            endpoint,
            message: message.into(),
        }
    }
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
