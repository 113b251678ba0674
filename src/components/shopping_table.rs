//! Shopping Table Component
//!
//! One `<tr>` per list row, name then count.

use leptos::prelude::*;
use list_sync::Row;

#[component]
pub fn ShoppingTable(rows: Vec<Row>) -> impl IntoView {
    view! {
        <table>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <td>{row.name}</td>
                            <td>{row.count}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
