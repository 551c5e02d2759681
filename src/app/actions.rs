//! User-triggered operations that spawn async work.
//!
//! Each action clones the client and message sender into a `tokio::spawn`ed
//! task and returns immediately; the task reports back with an [`AppMessage`].
//! A send to a dropped receiver fails silently, which is what makes a
//! completion that outlives the app an explicit no-op.

use super::{App, AppMessage};
use crate::api::{SHORTEN_FALLBACK, STATS_FALLBACK, TOP_FALLBACK};
use crate::clipboard;

impl App {
    /// Kick off the two initial fetches, regardless of the active tab, so
    /// the Stats and Top tabs have data without an extra round trip.
    pub fn spawn_initial_fetches(&self) {
        self.refresh_stats();
        self.refresh_top();
    }

    /// Submit the current URL input for shortening.
    ///
    /// No-op while a submission is already in flight or the trimmed input is
    /// empty. Clears the previous result and error before issuing the call.
    pub fn submit(&mut self) {
        if self.submitting {
            return;
        }
        let url = self.url_input.trim().to_string();
        if url.is_empty() {
            return;
        }

        self.submit_error = None;
        self.submit_result = None;
        self.submitting = true;
        self.mark_dirty();

        let client = self.client.clone();
        let strategy = self.strategy;
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match client.shorten(&url, strategy).await {
                Ok(result) => {
                    let _ = tx.send(AppMessage::ShortenCompleted(result));
                }
                Err(e) => {
                    tracing::warn!("shorten request failed: {e}");
                    let _ = tx.send(AppMessage::ShortenFailed {
                        error: e.user_message(SHORTEN_FALLBACK),
                    });
                }
            }
        });
    }

    /// Fetch a fresh statistics snapshot.
    pub fn refresh_stats(&self) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match client.stats().await {
                Ok(snapshot) => {
                    let _ = tx.send(AppMessage::StatsLoaded(snapshot));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::StatsLoadFailed {
                        error: format!("{}: {e}", STATS_FALLBACK),
                    });
                }
            }
        });
    }

    /// Fetch a fresh leaderboard.
    pub fn refresh_top(&self) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match client.top_urls().await {
                Ok(entries) => {
                    let _ = tx.send(AppMessage::TopUrlsLoaded(entries));
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::TopUrlsLoadFailed {
                        error: format!("{}: {e}", TOP_FALLBACK),
                    });
                }
            }
        });
    }

    /// Schedule the post-submit refresh of both snapshots after the
    /// configured settle delay. Fire-and-forget: the eventual refresh
    /// failures are logged, never surfaced.
    pub(super) fn schedule_post_submit_refresh(&self) {
        let delay = self.config.post_submit_refresh;
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppMessage::RefreshDue);
        });
    }

    /// Copy text to the system clipboard and arm the "copied" indicator.
    ///
    /// Clipboard failure is logged and otherwise ignored; the indicator still
    /// arms, matching the fire-and-forget copy affordance. The reset timer
    /// carries the generation returned by `arm`, so a timer superseded by a
    /// later copy expires into a no-op.
    pub fn copy_to_clipboard(&mut self, text: String) {
        if let Err(e) = clipboard::copy_text(&text) {
            tracing::warn!("clipboard copy failed: {e}");
        }
        let generation = self.copy_feedback.arm();
        self.mark_dirty();

        let timeout = self.config.copy_feedback_timeout;
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            let _ = tx.send(AppMessage::CopyFeedbackExpired { generation });
        });
    }

    /// Copy the short URL of the last submission result.
    pub fn copy_result_url(&mut self) {
        if let Some(result) = &self.submit_result {
            let url = result.short_url.clone();
            self.copy_to_clipboard(url);
        }
    }

    /// Copy the short link of the selected leaderboard entry.
    pub fn copy_selected_top_url(&mut self) {
        if let Some(entry) = self.top_urls.get(self.top_selected) {
            let url = self.client.short_link(&entry.short_code);
            self.copy_to_clipboard(url);
        }
    }

    /// Open the short URL of the last submission result in the browser.
    pub fn open_result_url(&self) {
        if let Some(result) = &self.submit_result {
            open_in_browser(&result.short_url);
        }
    }

    /// Open the selected leaderboard entry's short link in the browser.
    pub fn open_selected_top_url(&self) {
        if let Some(entry) = self.top_urls.get(self.top_selected) {
            open_in_browser(&self.client.short_link(&entry.short_code));
        }
    }
}

fn open_in_browser(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!("failed to open {url}: {e}");
    }
}
