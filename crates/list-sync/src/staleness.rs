//! Staleness Tracker
//!
//! Holds the two timestamps that decide whether the local list may be
//! behind the server.

use chrono::{DateTime, Duration, Utc};

/// True when the server reports a modification newer than our last refresh.
///
/// An unknown server time is never stale; an unknown local time with a
/// known server time always is.
pub fn is_stale(local_updated: Option<DateTime<Utc>>, server_updated: Option<DateTime<Utc>>) -> bool {
    match (local_updated, server_updated) {
        (_, None) => false,
        (None, Some(_)) => true,
        (Some(local), Some(server)) => local < server,
    }
}

/// Local refresh time and last known server modification time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Staleness {
    local_updated: Option<DateTime<Utc>>,
    server_updated: Option<DateTime<Utc>>,
}

impl Staleness {
    pub fn local_updated(&self) -> Option<DateTime<Utc>> {
        self.local_updated
    }

    pub fn server_updated(&self) -> Option<DateTime<Utc>> {
        self.server_updated
    }

    /// Stamp the start of a fetch cycle
    pub fn stamp_local(&mut self, now: DateTime<Utc>) {
        self.local_updated = Some(now);
    }

    /// Withdraw a stamp whose fetch cycle never delivered a list
    pub fn clear_local(&mut self) {
        self.local_updated = None;
    }

    pub fn set_server_updated(&mut self, at: DateTime<Utc>) {
        self.server_updated = Some(at);
    }

    pub fn is_stale(&self) -> bool {
        is_stale(self.local_updated, self.server_updated)
    }

    /// Server time to adopt after a corrective fetch, if one is needed
    pub fn corrective_target(&self) -> Option<DateTime<Utc>> {
        if self.is_stale() {
            self.server_updated
        } else {
            None
        }
    }

    /// Record that the list now reflects the server as of `at`
    pub fn mark_synced(&mut self, at: DateTime<Utc>) {
        self.local_updated = Some(at);
    }

    /// How far local lags the server; `None` when not behind
    pub(crate) fn lag(&self) -> Option<Duration> {
        match (self.local_updated, self.server_updated) {
            (Some(local), Some(server)) if local < server => Some(server - local),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, secs).unwrap()
    }

    #[test]
    fn test_predicate() {
        assert!(!is_stale(None, None));
        assert!(!is_stale(Some(at(5)), None));
        assert!(is_stale(None, Some(at(5))));
        assert!(is_stale(Some(at(1)), Some(at(5))));
        assert!(!is_stale(Some(at(5)), Some(at(5))));
        assert!(!is_stale(Some(at(9)), Some(at(5))));
    }

    #[test]
    fn test_corrective_target_only_when_behind() {
        let mut staleness = Staleness::default();
        staleness.stamp_local(at(10));
        staleness.set_server_updated(at(3));
        assert_eq!(staleness.corrective_target(), None);
        assert_eq!(staleness.lag(), None);

        staleness.set_server_updated(at(12));
        assert_eq!(staleness.corrective_target(), Some(at(12)));
        assert_eq!(staleness.lag(), Some(Duration::seconds(2)));
    }

    #[test]
    fn test_cleared_stamp_is_stale_against_known_server() {
        let mut staleness = Staleness::default();
        staleness.stamp_local(at(10));
        staleness.set_server_updated(at(3));
        staleness.clear_local();
        assert_eq!(staleness.corrective_target(), Some(at(3)));
    }

    #[test]
    fn test_mark_synced_clears_staleness() {
        let mut staleness = Staleness::default();
        staleness.stamp_local(at(0));
        staleness.set_server_updated(at(30));
        assert!(staleness.is_stale());

        staleness.mark_synced(at(30));
        assert!(!staleness.is_stale());
        assert_eq!(staleness.local_updated(), staleness.server_updated());
    }
}
