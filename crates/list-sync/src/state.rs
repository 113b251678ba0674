//! List View State
//!
//! Component-local state and the pure projection used by the renderer.

use chrono::{DateTime, Utc};

use crate::error::FetchError;
use crate::model::ListItem;
use crate::staleness::Staleness;

pub const HEADING: &str = "Shopping List";
pub const NOTHING_TO_BUY: &str = "There is nothing to buy.";

/// Everything the list view knows, owned by one component instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListViewState {
    items: Vec<ListItem>,
    staleness: Staleness,
    last_error: Option<FetchError>,
}

impl ListViewState {
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn staleness(&self) -> &Staleness {
        &self.staleness
    }

    /// Last fetch error; kept for diagnostics, never rendered
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Replace the whole list with a fresh server snapshot
    pub fn replace_items(&mut self, items: Vec<ListItem>) {
        self.items = items;
    }

    pub fn stamp_local(&mut self, now: DateTime<Utc>) {
        self.staleness.stamp_local(now);
    }

    pub fn clear_local_stamp(&mut self) {
        self.staleness.clear_local();
    }

    pub fn set_server_updated(&mut self, at: DateTime<Utc>) {
        self.staleness.set_server_updated(at);
    }

    pub fn mark_synced(&mut self, at: DateTime<Utc>) {
        self.staleness.mark_synced(at);
    }

    pub fn record_error(&mut self, error: FetchError) {
        self.last_error = Some(error);
    }
}

/// One table row, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub count: String,
}

/// What the view shows for a given list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    NothingToBuy,
    Table(Vec<Row>),
}

/// Project list items to display rows, one per item, in list order
pub fn render(items: &[ListItem]) -> Rendered {
    if items.is_empty() {
        return Rendered::NothingToBuy;
    }
    Rendered::Table(
        items
            .iter()
            .map(|item| Row {
                name: item.name.clone(),
                count: item.count.to_string(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Endpoint;

    #[test]
    fn test_single_row() {
        let items = vec![ListItem::new("milk", 2)];
        assert_eq!(
            render(&items),
            Rendered::Table(vec![Row {
                name: "milk".to_string(),
                count: "2".to_string(),
            }])
        );
    }

    #[test]
    fn test_rows_follow_list_order() {
        let items = vec![
            ListItem::new("eggs", 12),
            ListItem::new("butter", 1),
            ListItem::new("coffee", 3),
        ];
        let Rendered::Table(rows) = render(&items) else {
            panic!("expected a table");
        };
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["eggs", "butter", "coffee"]);
    }

    #[test]
    fn test_empty_list_is_placeholder() {
        assert_eq!(render(&[]), Rendered::NothingToBuy);
        assert_eq!(render(ListViewState::default().items()), Rendered::NothingToBuy);
    }

    #[test]
    fn test_error_does_not_touch_items() {
        let mut state = ListViewState::default();
        state.replace_items(vec![ListItem::new("milk", 2)]);
        state.record_error(FetchError::new(Endpoint::List, "offline"));

        assert_eq!(state.items(), &[ListItem::new("milk", 2)]);
        assert_eq!(state.last_error().map(|e| e.endpoint), Some(Endpoint::List));
    }
}
