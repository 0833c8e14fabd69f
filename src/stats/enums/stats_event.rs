//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Every counter that can be incremented or set.
///
/// Used with `FileTracker::update_stats()` and `FileTracker::set_stats()`.
///
/// # Example
///
/// ```rust,ignore
/// use rendezvous_tracker::stats::enums::stats_event::StatsEvent;
///
/// tracker.update_stats(StatsEvent::SharesHandled, 1);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    TimestampSweep,
    TimestampConsole,
    SharesHandled,
    GetsHandled,
    KeepAlivesHandled,
    InvalidRequests,
    ResponsesSent,
    SendFailures,
    PeersEvicted,
}
