//! Wire Models
//!
//! Response shapes of the two read endpoints.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One row of the shopping list (matches server)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub name: String,
    pub count: i64,
}

impl ListItem {
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Body of `GET /api/updated`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdatedResponse {
    pub timestamp: ServerTimestamp,
}

/// Server modification time, normalised to UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTimestamp")]
pub struct ServerTimestamp(pub DateTime<Utc>);

/// Anything a JS `Date` constructor would have accepted from the server
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

impl TryFrom<RawTimestamp> for ServerTimestamp {
    type Error = String;

    fn try_from(raw: RawTimestamp) -> Result<Self, Self::Error> {
        match raw {
            RawTimestamp::Millis(ms) => DateTime::from_timestamp_millis(ms)
                .map(ServerTimestamp)
                .ok_or_else(|| format!("timestamp out of range: {}", ms)),
            RawTimestamp::Text(text) => parse_timestamp(&text).map(ServerTimestamp),
        }
    }
}

/// Offset-less layouts, read as browser-local time the way `new Date(..)`
/// does. `%.f` also matches no fraction at all.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a server timestamp string into a UTC instant
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(local_to_utc)
        .ok_or_else(|| format!("unrecognised timestamp: {:?}", raw))
}

fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match naive.and_local_timezone(Local).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Inside a DST gap: shift by the offset in force at that wall time.
        None => (naive - Local.offset_from_utc_datetime(&naive)).and_utc(),
    }
}

/// Decode a `/api/list` body, keeping server order
pub fn decode_list(body: &str) -> Result<Vec<ListItem>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Decode a `/api/updated` body into its instant
pub fn decode_updated(body: &str) -> Result<DateTime<Utc>, serde_json::Error> {
    let response: UpdatedResponse = serde_json::from_str(body)?;
    Ok(response.timestamp.0)
}
