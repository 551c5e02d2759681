//! Message handling for the App.

use super::{App, AppMessage, Focus};

impl App {
    /// Apply an incoming async message.
    ///
    /// Runs on the event-loop task, so each snapshot replacement is atomic
    /// with respect to rendering. All message handlers mark the app dirty
    /// since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::StatsLoaded(snapshot) => {
                self.stats = Some(snapshot);
            }
            AppMessage::StatsLoadFailed { error } => {
                // Stale-but-available: keep the previous snapshot.
                tracing::warn!("{error}");
            }
            AppMessage::TopUrlsLoaded(entries) => {
                self.top_urls = entries;
                if self.top_selected >= self.top_urls.len() {
                    self.top_selected = self.top_urls.len().saturating_sub(1);
                }
            }
            AppMessage::TopUrlsLoadFailed { error } => {
                tracing::warn!("{error}");
            }
            AppMessage::ShortenCompleted(result) => {
                self.submit_result = Some(result);
                self.submit_error = None;
                self.url_input.clear();
                self.submitting = false;
                self.focus = Focus::Result;
                self.schedule_post_submit_refresh();
            }
            AppMessage::ShortenFailed { error } => {
                // Input is left untouched so the user can correct and resubmit.
                self.submit_error = Some(error);
                self.submitting = false;
            }
            AppMessage::RefreshDue => {
                self.refresh_stats();
                self.refresh_top();
            }
            AppMessage::CopyFeedbackExpired { generation } => {
                self.copy_feedback.expire(generation);
            }
        }
    }
}
