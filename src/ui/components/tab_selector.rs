//! Tab Selector Component
//!
//! A horizontal tab selector with a `▶` marker for the active item.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector.
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Label displayed in the bar.
    pub label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

/// Render a horizontal tab selector as a single line.
///
/// The selected item is marked with `▶` and rendered in the accent color;
/// the rest are dimmed.
pub fn render_tab_selector(items: &[TabItem<'_>], selected: usize) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    spans.push(Span::raw("  "));

    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(COLOR_DIM)));
        }
        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                item.label.to_string(),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                item.label.to_string(),
                Style::default().fg(COLOR_DIM),
            ));
        }
    }

    Line::from(spans)
}
