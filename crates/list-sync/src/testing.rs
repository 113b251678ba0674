//! Test Harness
//!
//! Scripted list source and a pinned clock for engine and poller tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::clock::Clock;
use crate::error::{Endpoint, FetchResult};
use crate::model::ListItem;
use crate::source::ListSource;

/// `2024-01-01T00:00:00Z` shifted by `secs`
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(secs)
}

#[derive(Clone)]
pub struct ManualClock(Rc<Cell<DateTime<Utc>>>);

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Rc::new(Cell::new(now)))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }
}

/// Answers every call with whatever was last scripted, counting calls.
/// Each endpoint can be held back on tokio's clock to force an order.
pub struct ScriptedSource {
    list: RefCell<FetchResult<Vec<ListItem>>>,
    updated: RefCell<FetchResult<DateTime<Utc>>>,
    list_hook: RefCell<Option<Box<dyn Fn()>>>,
    list_calls: Cell<usize>,
    updated_calls: Cell<usize>,
    list_delay: Cell<StdDuration>,
    updated_delay: Cell<StdDuration>,
    completed: RefCell<Vec<Endpoint>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            list: RefCell::new(Ok(Vec::new())),
            updated: RefCell::new(Ok(at(0))),
            list_hook: RefCell::new(None),
            list_calls: Cell::new(0),
            updated_calls: Cell::new(0),
            list_delay: Cell::new(StdDuration::ZERO),
            updated_delay: Cell::new(StdDuration::ZERO),
            completed: RefCell::new(Vec::new()),
        }
    }

    pub fn set_list(&self, response: FetchResult<Vec<ListItem>>) {
        *self.list.borrow_mut() = response;
    }

    pub fn set_updated(&self, response: FetchResult<DateTime<Utc>>) {
        *self.updated.borrow_mut() = response;
    }

    /// Run `hook` while a list request is in flight
    pub fn on_list(&self, hook: impl Fn() + 'static) {
        *self.list_hook.borrow_mut() = Some(Box::new(hook));
    }

    pub fn delay_list(&self, delay: StdDuration) {
        self.list_delay.set(delay);
    }

    pub fn delay_updated(&self, delay: StdDuration) {
        self.updated_delay.set(delay);
    }

    /// Endpoints in the order their responses resolved
    pub fn completed(&self) -> Vec<Endpoint> {
        self.completed.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub fn updated_calls(&self) -> usize {
        self.updated_calls.get()
    }
}

#[async_trait(?Send)]
impl ListSource for ScriptedSource {
    async fn fetch_list(&self) -> FetchResult<Vec<ListItem>> {
        self.list_calls.set(self.list_calls.get() + 1);
        hold(self.list_delay.get()).await;
        if let Some(hook) = self.list_hook.borrow().as_ref() {
            hook();
        }
        self.completed.borrow_mut().push(Endpoint::List);
        self.list.borrow().clone()
    }

    async fn fetch_server_updated(&self) -> FetchResult<DateTime<Utc>> {
        self.updated_calls.set(self.updated_calls.get() + 1);
        hold(self.updated_delay.get()).await;
        self.completed.borrow_mut().push(Endpoint::Updated);
        self.updated.borrow().clone()
    }
}

async fn hold(delay: StdDuration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
