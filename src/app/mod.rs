//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Tab`] - Which tab is currently displayed
//! - [`Focus`] - Which part of the Shorten tab has focus
//! - [`AppMessage`] - Messages for async communication
//!
//! `App` owns all view state. It is mutated only through the named methods
//! here and in the sibling impl files, either from key handling or from
//! [`App::handle_message`] when a spawned task reports back.

mod actions;
mod handlers;
mod keys;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, Tab};

use tokio::sync::mpsc;

use crate::api::TinyUrlClient;
use crate::clipboard::CopyFeedback;
use crate::config::Config;
use crate::models::{CollisionStrategy, ShortenResponse, StatsSnapshot, TopEntry};

/// Top-level application state.
pub struct App {
    /// Resolved configuration (base URL, timer durations).
    pub config: Config,
    /// Backend client; cloned into spawned tasks.
    pub client: TinyUrlClient,

    /// Currently displayed tab.
    pub active_tab: Tab,
    /// Focus within the Shorten tab.
    pub focus: Focus,
    /// URL input line.
    pub url_input: String,
    /// Selected collision-resolution strategy.
    pub strategy: CollisionStrategy,

    /// A shorten request is in flight. While set, `submit` is a no-op.
    pub submitting: bool,
    /// Result of the last successful submission.
    pub submit_result: Option<ShortenResponse>,
    /// Display message of the last failed submission.
    pub submit_error: Option<String>,

    /// Last successfully fetched statistics snapshot, kept across failed
    /// refreshes.
    pub stats: Option<StatsSnapshot>,
    /// Last successfully fetched leaderboard, in server order.
    pub top_urls: Vec<TopEntry>,
    /// Selected row on the Top tab.
    pub top_selected: usize,

    /// Transient "copied" indicator.
    pub copy_feedback: CopyFeedback,

    /// Sender cloned into every spawned task.
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,

    /// Event loop exit flag.
    pub should_quit: bool,
    /// Redraw needed on the next loop iteration.
    pub needs_redraw: bool,
    /// Tick counter driving the submit spinner.
    pub tick_count: u64,
}

impl App {
    /// Create the app with all state at rest. No fetches are issued here;
    /// call [`App::spawn_initial_fetches`] before entering the event loop.
    pub fn new(config: Config) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let client = TinyUrlClient::with_base_url(config.base_url.clone());
        Self {
            config,
            client,
            active_tab: Tab::Shorten,
            focus: Focus::Input,
            url_input: String::new(),
            strategy: CollisionStrategy::default(),
            submitting: false,
            submit_result: None,
            submit_error: None,
            stats: None,
            top_urls: Vec::new(),
            top_selected: 0,
            copy_feedback: CopyFeedback::new(),
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    /// Switch to a tab. Pure state transition: never issues a network call,
    /// only changes which cached data renders.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.mark_dirty();
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    /// Advance the animation tick. Only dirties the frame while a spinner is
    /// visible so an idle app does not redraw at tick rate.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.submitting {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
