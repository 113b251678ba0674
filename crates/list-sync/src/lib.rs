//! Shopping List Sync
//!
//! Platform-neutral core of the shopping list view:
//! - model: wire types for `/api/list` and `/api/updated`
//! - staleness: the local/server timestamp pair and the re-fetch predicate
//! - state: component-local view state and its pure projection to rows
//! - source: the fetch contract implemented by the HTTP client
//! - sync: mount/tick/unmount engine driving a source into the state
//! - poller: fixed-interval loop over the engine

mod clock;
mod error;
mod model;
mod poller;
mod source;
mod staleness;
mod state;
mod sync;

#[cfg(test)]
mod testing;

pub use clock::{Clock, SystemClock};
pub use error::{Endpoint, FetchError, FetchResult};
pub use model::{decode_list, decode_updated, parse_timestamp, ListItem, ServerTimestamp, UpdatedResponse};
pub use poller::run_poller;
pub use source::ListSource;
pub use staleness::{is_stale, Staleness};
pub use state::{render, ListViewState, Rendered, Row, HEADING, NOTHING_TO_BUY};
pub use sync::{Lifecycle, ListSync, SharedState, StateHandle, TickOutcome};
