//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One option in a radio or checkbox group
pub struct ChoiceItem {
    pub label: String,
    pub checked: bool,
}

/// How a choice group marks its options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceStyle {
    Radio,
    Checkbox,
    Select,
}

/// Border and title styling shared by every field
fn field_block<'a>(label: &'a str, is_active: bool, error: Option<&'a str>) -> Block<'a> {
    let border_color = match (error, is_active) {
        (Some(_), _) => Color::Red,
        (None, true) => Color::Cyan,
        (None, false) => Color::DarkGray,
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a single-line text field with its inline error
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let display_value = if value.is_empty() && !is_active {
        Span::styled("(empty)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value, style)
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        display_value,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(content.block(field_block(label, is_active, error)), area);
}

/// Draw a group of radios, checkboxes or a select shown inline.
///
/// `highlighted` marks the option under the keyboard cursor (checkbox groups only).
#[allow(clippy::too_many_arguments)]
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    items: &[ChoiceItem],
    choice_style: ChoiceStyle,
    highlighted: Option<usize>,
    is_active: bool,
    error: Option<&str>,
) {
    let mut spans = Vec::with_capacity(items.len() * 2);

    if choice_style == ChoiceStyle::Select {
        let selected = items.iter().find(|i| i.checked).map(|i| i.label.as_str());
        let (text, style) = match selected {
            Some(text) => (text.to_string(), Style::default().fg(Color::White)),
            None => (
                format!("Select {label}"),
                Style::default().fg(Color::DarkGray),
            ),
        };
        spans.push(Span::styled("◂ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(text, style));
        spans.push(Span::styled(" ▸", Style::default().fg(Color::DarkGray)));
    } else {
        for (idx, item) in items.iter().enumerate() {
            let mark = match (choice_style, item.checked) {
                (ChoiceStyle::Checkbox, true) => "[x]",
                (ChoiceStyle::Checkbox, false) => "[ ]",
                (_, true) => "(•)",
                (_, false) => "( )",
            };
            let mut style = if item.checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            if is_active && highlighted == Some(idx) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("{mark} {}", item.label), style));
            spans.push(Span::raw("  "));
        }
    }

    let content = Paragraph::new(Line::from(spans));
    frame.render_widget(content.block(field_block(label, is_active, error)), area);
}
