//! Confirmation dialog for deleting a record

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::state::PendingDeleteAction;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render a confirmation dialog for delete action
pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingDeleteAction) {
    let message = format!(
        "Are you sure you want to delete record #{} ({})?",
        action.index + 1,
        action.record_display
    );

    // Cancel, Delete
    let options = [(false, "Cancel", Color::White), (true, "Delete", Color::Red)];
    let body = options
        .into_iter()
        .map(|(is_delete, label, color)| {
            let is_selected = action.selected_option == is_delete;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("{prefix}{label}"), style))
        })
        .collect();

    render_dialog(
        frame,
        DialogConfig {
            title: "Confirm Delete",
            title_color: Color::Red,
            border_color: Color::Red,
            message: &message,
            body,
            hint: Some(key_hint(&[
                ("↑↓", "select"),
                ("Enter", "confirm"),
                ("Esc", "cancel"),
            ])),
            max_width: 56,
        },
    );
}
