//! List View Component
//!
//! Owns one view's state, loads it on mount and polls until unmount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use list_sync::{
    render, run_poller, ListSync, ListViewState, Rendered, StateHandle, SystemClock, HEADING,
    NOTHING_TO_BUY,
};

use crate::api::HttpListSource;
use crate::components::ShoppingTable;
use crate::config::ListViewConfig;

/// Reactive state handle; reads are untracked so polling never subscribes
#[derive(Clone, Copy)]
struct SignalState(RwSignal<ListViewState>);

impl StateHandle for SignalState {
    fn read<R>(&self, f: impl FnOnce(&ListViewState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut ListViewState)) {
        self.0.update(f);
    }
}

#[component]
pub fn ListView(config: ListViewConfig, origin: String) -> impl IntoView {
    let state = RwSignal::new(ListViewState::default());

    let source = HttpListSource::new(&config, &origin);
    let sync = ListSync::new(source, SignalState(state), SystemClock);

    // Stops the poller and drops late responses
    let lifecycle = sync.lifecycle();
    on_cleanup(move || lifecycle.unmount());

    let interval = config.poll_interval();
    spawn_local(async move {
        sync.mount().await;
        run_poller(sync, interval, gloo_timers::future::sleep).await;
    });

    let rendered = Memo::new(move |_| state.with(|s| render(s.items())));

    view! {
        <div id="main">
            {move || match rendered.get() {
                Rendered::NothingToBuy => view! { <h1>{NOTHING_TO_BUY}</h1> }.into_any(),
                Rendered::Table(rows) => view! {
                    <h1>{HEADING}</h1>
                    <ShoppingTable rows=rows />
                }.into_any(),
            }}
        </div>
    }
}
