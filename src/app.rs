//! Shopping List Frontend App
//!
//! Root component hosting the list view.

use leptos::prelude::*;

use crate::components::ListView;
use crate::config::ListViewConfig;

#[component]
pub fn App(config: ListViewConfig, origin: String) -> impl IntoView {
    view! {
        <main class="app-layout">
            <ListView config=config origin=origin />
        </main>
    }
}
