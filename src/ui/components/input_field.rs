//! Input Field Component
//!
//! A single-line text input with label, focus handling, placeholder, and
//! inline error display. Rounded borders.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field.
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input.
    pub label: &'a str,
    /// Current value of the input.
    pub value: &'a str,
    /// Whether the input is currently focused.
    pub focused: bool,
    /// Optional error message to display below the input.
    pub error: Option<&'a str>,
    /// Optional placeholder text when empty.
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows consumed by the field: label (1) + bordered input (3) + error (0/1).
pub fn input_field_height(config: &InputFieldConfig) -> u16 {
    if config.error.is_some() {
        5
    } else {
        4
    }
}

/// Render an input field with label, input box, and optional error.
/// Returns the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let mut y_offset = 0;

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );
    y_offset += 1;

    let input_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: 3,
    };
    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let showing_placeholder = config.value.is_empty() && config.placeholder.is_some();
    let mut content = if showing_placeholder {
        config.placeholder.unwrap_or_default().to_string()
    } else {
        config.value.to_string()
    };
    if config.focused && !showing_placeholder {
        content.push('\u{2588}'); // block cursor
    }
    let text_style = if showing_placeholder {
        Style::default().fg(COLOR_DIM)
    } else if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(content, text_style))).block(block),
        input_area,
    );
    y_offset += 3;

    if let Some(error) = config.error {
        let error_area = Rect {
            x: area.x,
            y: area.y + y_offset,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("✗ ", Style::default().fg(COLOR_ERROR)),
                Span::styled(error.to_string(), Style::default().fg(COLOR_ERROR)),
            ])),
            error_area,
        );
        y_offset += 1;
    }

    y_offset
}
