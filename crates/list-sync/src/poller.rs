//! Poller
//!
//! Fixed-interval loop over [`ListSync::tick`]. The timer is injected so the
//! same loop runs on browser timeouts and on tokio's test clock.

use std::future::Future;
use std::time::Duration;

use log::{debug, info};

use crate::clock::Clock;
use crate::source::ListSource;
use crate::sync::{ListSync, StateHandle, TickOutcome};

/// Tick every `interval` until the view unmounts. Returns the number of
/// ticks that ran.
///
/// The next sleep starts only after the previous tick settles, so slow
/// responses never stack up.
pub async fn run_poller<S, H, C, F, Fut>(sync: ListSync<S, H, C>, interval: Duration, mut sleep: F) -> u64
where
    S: ListSource,
    H: StateHandle,
    C: Clock,
    F: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    info!("polling every {:?}", interval);
    let mut ticks = 0;
    loop {
        sleep(interval).await;
        match sync.tick().await {
            TickOutcome::Unmounted => break,
            outcome => {
                ticks += 1;
                if outcome != TickOutcome::Fresh {
                    debug!("tick {}: {:?}", ticks, outcome);
                }
            }
        }
    }
    info!("poller stopped after {} ticks", ticks);
    ticks
}
