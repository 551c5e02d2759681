//! Statistics tab: the four snapshot sections as labeled value grids.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::StatsSnapshot;
use crate::ui::helpers::{format_percent, format_ratio_percent};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(stats) = &app.stats else {
        render_placeholder(frame, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    render_section(frame, chunks[0], "Hash Map", hash_map_rows(stats));
    render_section(frame, chunks[1], "LRU Cache", lru_rows(stats));
    render_section(frame, chunks[2], "Trie", trie_rows(stats));
    render_section(
        frame,
        chunks[3],
        "Collision Detection",
        collision_rows(stats),
    );

    let hint = Paragraph::new(Line::from(Span::styled(
        "r refresh",
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(hint, chunks[4]);
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            "No statistics yet",
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(COLOR_DIM),
        )),
    ]);
    frame.render_widget(text, area);
}

fn hash_map_rows(stats: &StatsSnapshot) -> Vec<(String, String)> {
    let h = &stats.hash_map;
    vec![
        (
            "Entries".into(),
            format!("{} / {} capacity", h.size, h.capacity),
        ),
        (
            "Load factor".into(),
            format!("{} (optimal < 75%)", format_ratio_percent(h.load_factor)),
        ),
        (
            "Collisions".into(),
            format!(
                "{} (avg chain {:.2}, max {}, {} non-empty buckets)",
                h.collision_count, h.avg_chain_length, h.max_chain_length, h.non_empty_buckets
            ),
        ),
    ]
}

fn lru_rows(stats: &StatsSnapshot) -> Vec<(String, String)> {
    let c = &stats.lru_cache;
    vec![
        ("Size".into(), format!("{} / {} capacity", c.size, c.capacity)),
        (
            "Hit rate".into(),
            format!(
                "{} ({} hits, {} misses)",
                format_percent(c.hit_rate),
                c.hits,
                c.misses
            ),
        ),
        (
            "Evictions".into(),
            format!("{} ({} utilization)", c.evictions, format_percent(c.utilization)),
        ),
    ]
}

fn trie_rows(stats: &StatsSnapshot) -> Vec<(String, String)> {
    let t = &stats.trie;
    vec![
        ("URLs indexed".into(), t.total_urls.to_string()),
        (
            "Nodes".into(),
            format!("{} ({:.2} per URL)", t.total_nodes, t.avg_nodes_per_url),
        ),
    ]
}

fn collision_rows(stats: &StatsSnapshot) -> Vec<(String, String)> {
    let d = &stats.collision_detector;
    vec![
        ("Total collisions".into(), d.total_collisions.to_string()),
        (
            "Linear probing".into(),
            format!(
                "{} ({})",
                d.linear_probing_used,
                format_percent(d.linear_probing_percentage)
            ),
        ),
        (
            "Regeneration".into(),
            format!(
                "{} ({}), worst case {} attempts",
                d.regeneration_used,
                format_percent(d.regeneration_percentage),
                d.max_attempts
            ),
        ),
    ]
}

fn render_section(frame: &mut Frame, area: Rect, title: &str, rows: Vec<(String, String)>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<18}"), Style::default().fg(COLOR_DIM)),
                Span::raw(value),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
