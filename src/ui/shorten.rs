//! Shorten tab: URL form, strategy selector, submit status, and result card.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::CollisionStrategy;
use crate::ui::components::{render_input_field, InputFieldConfig};
use crate::ui::helpers::{spinner_frame, truncate_to_width};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS, COLOR_WARNING,
};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // URL input
            Constraint::Length(5), // strategy selector
            Constraint::Length(2), // submit status
            Constraint::Min(0),    // error banner / result card
        ])
        .split(area);

    let input = InputFieldConfig::new("Enter URL to shorten", &app.url_input)
        .focused(app.focus == Focus::Input && !app.submitting)
        .placeholder("https://www.example.com/very/long/url");
    render_input_field(frame, chunks[0], &input);

    render_strategy_selector(frame, app, chunks[1]);
    render_submit_status(frame, app, chunks[2]);

    if let Some(error) = &app.submit_error {
        render_error_banner(frame, error, chunks[3]);
    } else if app.submit_result.is_some() {
        render_result_card(frame, app, chunks[3]);
    }
}

fn render_strategy_selector(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Collision Resolution Strategy (↑/↓ to change)",
        Style::default().fg(COLOR_DIM),
    ))];

    for strategy in CollisionStrategy::ALL {
        let selected = strategy == app.strategy;
        let marker = if selected { "● " } else { "○ " };
        let label_style = if selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(marker, label_style),
            Span::styled(format!("{:<16}", strategy.label()), label_style),
            Span::styled(strategy.hint(), Style::default().fg(COLOR_DIM)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_submit_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.submitting {
        Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(app.tick_count)),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled("Shortening…", Style::default().fg(COLOR_ACCENT)),
        ])
    } else {
        Line::from(Span::styled(
            "Press Enter to shorten",
            Style::default().fg(COLOR_DIM),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_error_banner(frame: &mut Frame, error: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ERROR))
        .title(" Error ");
    let text = Paragraph::new(Line::from(vec![
        Span::styled("✗ ", Style::default().fg(COLOR_ERROR)),
        Span::styled(error.to_string(), Style::default().fg(COLOR_ERROR)),
    ]))
    .block(block);
    frame.render_widget(text, area);
}

fn render_result_card(frame: &mut Frame, app: &App, area: Rect) {
    let Some(result) = &app.submit_result else {
        return;
    };
    let focused = app.focus == Focus::Result;
    let width = area.width.saturating_sub(4) as usize;

    let copy_hint = if app.copy_feedback.is_copied() {
        Span::styled("✓ Copied!", Style::default().fg(COLOR_SUCCESS))
    } else {
        Span::styled("c to copy", Style::default().fg(COLOR_DIM))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Your Short URL:  ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                result.short_url.clone(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            copy_hint,
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Short Code: ", Style::default().fg(COLOR_DIM)),
            Span::styled(result.short_code.clone(), Style::default().fg(COLOR_SUCCESS)),
            Span::styled("   Attempts: ", Style::default().fg(COLOR_DIM)),
            Span::raw(result.attempts.to_string()),
            Span::styled("   Cached: ", Style::default().fg(COLOR_DIM)),
            Span::raw(if result.cached { "Yes" } else { "No" }),
        ]),
    ];

    if result.collision_detected {
        let strategy = result.strategy_used.as_deref().unwrap_or("unknown");
        lines.push(Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(COLOR_WARNING)),
            Span::styled(
                format!("Collision detected and resolved (strategy: {strategy})"),
                Style::default().fg(COLOR_WARNING),
            ),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Original URL: ", Style::default().fg(COLOR_DIM)),
        Span::raw(truncate_to_width(&result.original_url, width.saturating_sub(14))),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        if focused {
            "c copy   o open   i edit another"
        } else {
            "Esc to select result"
        },
        Style::default().fg(COLOR_DIM),
    )));

    let border_color = if focused { COLOR_SUCCESS } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " ✓ URL Shortened Successfully ",
            Style::default().fg(COLOR_SUCCESS),
        ));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
