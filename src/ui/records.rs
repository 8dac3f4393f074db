//! Submitted records table

use super::widgets::render_scrollable_table;
use crate::app::App;
use crate::platform::PASSWORD_MASK;
use crate::state::{FieldName, Focus, SubmittedRecord};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};
use strum::IntoEnumIterator;

/// Column headers in display order
const HEADERS: [&str; 9] = [
    "#", "Username", "Email", "Password", "Phone", "Gender", "Hobby", "Address", "City",
];

/// Draw the records table
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let records = app.controller.records();
    let is_focused = app.state.focus == Focus::Records;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" Submitted Data ({}) ", records.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if records.is_empty() {
        let content = Paragraph::new("No data submitted yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let edit_cursor = app.controller.edit_cursor();
    let rows: Vec<Row> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let style = if edit_cursor == Some(idx) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(record_cells(idx, record, app.state.show_password)).style(style)
        })
        .collect();

    let header = Row::new(HEADERS.map(Line::from)).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Min(10),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Min(8),
        Constraint::Min(8),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸");

    let selected = is_focused.then_some(app.state.selected_index);
    render_scrollable_table(frame, area, table, selected);
}

/// Cell text for one record
fn record_cells(idx: usize, record: &SubmittedRecord, show_password: bool) -> Vec<String> {
    let fields = record.fields();
    let mut cells = vec![(idx + 1).to_string()];
    cells.extend(FieldName::iter().map(|field| {
        if field == FieldName::Password && !show_password {
            PASSWORD_MASK.to_string().repeat(fields.password.chars().count())
        } else {
            fields.display_value(field)
        }
    }));
    cells
}
