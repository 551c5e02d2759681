//! AppMessage enum for async communication within the application.
//!
//! Every spawned task reports back through one of these; app state is only
//! ever mutated on the event-loop task when a message is applied.

use crate::models::{ShortenResponse, StatsSnapshot, TopEntry};

/// Messages received from async operations (network calls, timers).
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Statistics snapshot fetched successfully.
    StatsLoaded(StatsSnapshot),
    /// Statistics fetch failed; the previous snapshot is retained.
    StatsLoadFailed { error: String },
    /// Leaderboard fetched successfully, in server order.
    TopUrlsLoaded(Vec<TopEntry>),
    /// Leaderboard fetch failed; the previous list is retained.
    TopUrlsLoadFailed { error: String },
    /// Shorten request completed successfully.
    ShortenCompleted(ShortenResponse),
    /// Shorten request failed with a display-ready message.
    ShortenFailed { error: String },
    /// The post-submit settle delay elapsed; refresh both snapshots.
    RefreshDue,
    /// A copy-feedback reset timer fired. Ignored unless `generation` is
    /// still current.
    CopyFeedbackExpired { generation: u64 },
}
