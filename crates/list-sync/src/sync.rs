//! List Sync Engine
//!
//! Drives a [`ListSource`] into view state: one full load on mount, then a
//! timestamp check per tick with a corrective list fetch only when stale.
//! State is always read through the handle at the moment it is needed, so a
//! tick never acts on values captured earlier.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::source::ListSource;
use crate::state::ListViewState;

/// Shared, mutable access to one view's state
pub trait StateHandle {
    fn read<R>(&self, f: impl FnOnce(&ListViewState) -> R) -> R;
    fn update(&self, f: impl FnOnce(&mut ListViewState));
}

/// Plain shared state for hosts without a reactive runtime
pub type SharedState = Rc<RefCell<ListViewState>>;

impl StateHandle for Rc<RefCell<ListViewState>> {
    fn read<R>(&self, f: impl FnOnce(&ListViewState) -> R) -> R {
        f(&self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut ListViewState)) {
        f(&mut self.borrow_mut())
    }
}

/// Mounted flag shared between the engine, its poller and the host's
/// cleanup hook. Atomic because Leptos cleanup closures must be
/// `Send + Sync`.
#[derive(Debug, Clone)]
pub struct Lifecycle(Arc<AtomicBool>);

impl Lifecycle {
    fn mounted() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Stop polling and discard any response still in flight
    pub fn unmount(&self) {
        if self.0.swap(false, Ordering::AcqRel) {
            info!("list view unmounted");
        }
    }
}

/// What a single poll tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Local list is at least as new as the server's
    Fresh,
    /// List was behind and has been re-fetched
    Corrected,
    /// List was behind but the corrective fetch failed; retried next tick
    CorrectionFailed,
    /// View is gone; nothing was applied
    Unmounted,
}

enum Applied {
    Ok,
    Failed,
    Discarded,
}

pub struct ListSync<S, H, C = SystemClock> {
    source: Rc<S>,
    state: H,
    clock: C,
    lifecycle: Lifecycle,
}

impl<S, H: Clone, C: Clone> Clone for ListSync<S, H, C> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            state: self.state.clone(),
            clock: self.clock.clone(),
            lifecycle: self.lifecycle.clone(),
        }
    }
}

impl<S, H, C> ListSync<S, H, C>
where
    S: ListSource,
    H: StateHandle,
    C: Clock,
{
    /// Create an engine for a freshly mounted view
    pub fn new(source: S, state: H, clock: C) -> Self {
        Self {
            source: Rc::new(source),
            state,
            clock,
            lifecycle: Lifecycle::mounted(),
        }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    #[cfg(test)]
    pub(crate) fn source_for_tests(&self) -> Rc<S> {
        Rc::clone(&self.source)
    }

    /// Initial load: stamp local time, then fetch list and server time
    /// concurrently. Completion order between the two is not fixed. If the
    /// list fails the stamp is withdrawn, leaving the view stale for the
    /// first tick to correct.
    pub async fn mount(&self) {
        if !self.is_mounted() {
            return;
        }
        let now = self.clock.now();
        info!("loading shopping list (local stamp {})", now);
        self.state.update(|s| s.stamp_local(now));
        let (list, _) = futures::future::join(self.refresh_list(), self.refresh_server_updated()).await;
        if let Applied::Failed = list {
            // No list arrived, so the stamp must not count as a refresh.
            self.state.update(|s| s.clear_local_stamp());
        }
    }

    /// One poll tick: refresh the server time, then re-fetch the list only
    /// if the local copy predates it.
    pub async fn tick(&self) -> TickOutcome {
        if !self.is_mounted() {
            return TickOutcome::Unmounted;
        }
        if let Applied::Discarded = self.refresh_server_updated().await {
            return TickOutcome::Unmounted;
        }

        let (target, lag) = self
            .state
            .read(|s| (s.staleness().corrective_target(), s.staleness().lag()));
        let Some(target) = target else {
            return TickOutcome::Fresh;
        };

        debug!("list is behind server by {:?}, re-fetching", lag);
        match self.refresh_list().await {
            Applied::Ok => {
                self.state.update(|s| s.mark_synced(target));
                TickOutcome::Corrected
            }
            Applied::Failed => TickOutcome::CorrectionFailed,
            Applied::Discarded => TickOutcome::Unmounted,
        }
    }

    async fn refresh_list(&self) -> Applied {
        let result = self.source.fetch_list().await;
        if !self.is_mounted() {
            debug!("dropping list response after unmount");
            return Applied::Discarded;
        }
        match result {
            Ok(items) => {
                debug!("list refreshed: {} items", items.len());
                self.state.update(|s| s.replace_items(items));
                Applied::Ok
            }
            Err(e) => {
                warn!("{}", e);
                self.state.update(|s| s.record_error(e));
                Applied::Failed
            }
        }
    }

    async fn refresh_server_updated(&self) -> Applied {
        let result = self.source.fetch_server_updated().await;
        if !self.is_mounted() {
            debug!("dropping server timestamp after unmount");
            return Applied::Discarded;
        }
        match result {
            Ok(at) => {
                self.state.update(|s| s.set_server_updated(at));
                Applied::Ok
            }
            Err(e) => {
                warn!("{}", e);
                self.state.update(|s| s.record_error(e));
                Applied::Failed
            }
        }
    }
}
