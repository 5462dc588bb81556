//! Background eviction of abandoned sessions.
//!
//! Challenges nobody ever answers would otherwise live for the lifetime of
//! the process. The sweep only touches open sessions; anything claimed for
//! resolution is removed by the submit path that claimed it.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::store::sessions::SessionStore;

/// Spawn the TTL sweep task. A zero TTL disables sweeping entirely.
pub fn spawn(store: Arc<SessionStore>, ttl_secs: u64) -> Option<JoinHandle<()>> {
    if ttl_secs == 0 {
        return None;
    }

    let ttl = time::Duration::seconds(ttl_secs as i64);
    let period = std::time::Duration::from_secs(ttl_secs.clamp(1, 60));

    Some(tokio::spawn(async move {
        let mut tick = tokio::time::interval(period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tick.tick().await;
            for session_id in store.evict_older_than(ttl) {
                info!(session_id = %session_id, ttl_secs, "evicted abandoned session");
            }
        }
    }))
}
