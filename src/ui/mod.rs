//! UI rendering for the TinyURL terminal client.
//!
//! Layout: header with title, tab bar, the active tab's body, and a footer
//! with keybind hints. Rendering is pure over [`App`] state.

pub mod components;
pub mod helpers;
mod shorten;
mod stats;
mod theme;
mod top;

pub use theme::*;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus, Tab};
use components::{render_tab_selector, TabItem};

/// Render the full UI for the current frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(2), // tab bar
            Constraint::Min(0),    // body
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_tabs(frame, app, chunks[1]);

    let body = body_margin(chunks[2]);
    match app.active_tab {
        Tab::Shorten => shorten::render(frame, app, body),
        Tab::Stats => stats::render(frame, app, body),
        Tab::Top => top::render(frame, app, body),
    }

    render_footer(frame, app, chunks[3]);
}

fn body_margin(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(4),
        height: area.height,
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from(vec![
        Span::styled(
            "  TinyURL",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  ·  URL shortener with custom data structures",
            Style::default().fg(COLOR_DIM),
        ),
    ])];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<TabItem> = Tab::ALL.iter().map(|t| TabItem::new(t.title())).collect();
    let line = render_tab_selector(&items, app.active_tab.index());
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match (app.active_tab, app.focus) {
        (Tab::Shorten, Focus::Input) => {
            "Enter shorten · ↑/↓ strategy · Tab switch view · Ctrl+C quit"
        }
        (Tab::Shorten, Focus::Result) => {
            "c copy · o open · i edit · Tab switch view · q quit"
        }
        (Tab::Stats, _) => "r refresh · Tab switch view · q quit",
        (Tab::Top, _) => "↑/↓ select · c copy · o open · r refresh · q quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("  {hints}"),
            Style::default().fg(COLOR_DIM),
        ))),
        area,
    );
}
