//! Top URLs tab: the click leaderboard, rendered in server order.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::TopEntry;
use crate::ui::helpers::{format_created_at, truncate_to_width};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_RANK_1, COLOR_RANK_2, COLOR_RANK_3, COLOR_WARNING,
};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.top_urls.is_empty() {
        render_placeholder(frame, area);
        return;
    }

    let width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .top_urls
        .iter()
        .enumerate()
        .map(|(rank, entry)| entry_item(rank, entry, width))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.top_selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled("No URLs yet", Style::default().fg(COLOR_DIM))),
        Line::from(Span::styled(
            "Start shortening URLs to see analytics here",
            Style::default().fg(COLOR_DIM),
        )),
    ]);
    frame.render_widget(text, area);
}

fn rank_color(rank: usize) -> Color {
    match rank {
        0 => COLOR_RANK_1,
        1 => COLOR_RANK_2,
        2 => COLOR_RANK_3,
        _ => COLOR_DIM,
    }
}

fn entry_item(rank: usize, entry: &TopEntry, width: usize) -> ListItem<'static> {
    let mut first = vec![
        Span::styled(
            format!("#{:<3}", rank + 1),
            Style::default()
                .fg(rank_color(rank))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("/{}", entry.short_code),
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::styled(
            format!("   {} clicks", entry.clicks),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(
            format!("   {}", format_created_at(&entry.created_at)),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if entry.collision_resolved {
        let strategy = entry.resolution_strategy.as_deref().unwrap_or("?");
        first.push(Span::styled(
            format!("   ⚠ collision ({strategy})"),
            Style::default().fg(COLOR_WARNING),
        ));
    }

    let second = Line::from(vec![
        Span::raw("    "),
        Span::styled(
            truncate_to_width(&entry.original_url, width),
            Style::default().fg(COLOR_DIM),
        ),
    ]);

    ListItem::new(vec![Line::from(first), second, Line::default()])
}
