//! Layout components (panes and status bar)

use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: form pane and records pane
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(54), // Form
            Constraint::Min(0),     // Records table
        ])
        .split(rows[0]);

    (panes[0], panes[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Mode indicator
    let mode = match app.controller.edit_cursor() {
        Some(index) => Span::styled(
            format!(" EDIT #{} ", index + 1),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        None => Span::styled(" NEW ", Style::default().fg(Color::Black).bg(Color::Green)),
    };
    spans.push(mode);
    spans.push(Span::raw(" "));

    // View-specific hints
    spans.push(Span::styled(
        get_focus_hints(app.state.focus),
        Style::default().fg(Color::Gray),
    ));

    // Full error for the focused field; the inline one may be clipped
    let errors = app.controller.errors();
    let focused_error = app.state.focus.field().and_then(|field| errors.get(field));
    if let Some(error) = focused_error {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(error.to_string(), Style::default().fg(Color::Red)));
    } else if !errors.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} field(s) need attention", errors.len()),
            Style::default().fg(Color::Red),
        ));
    }

    // Latest notice
    if let Some(notice) = app.controller.notifier().latest() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(notice.message(), Style::default().fg(Color::Green)));
    }

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Key hints for the focused element
fn get_focus_hints(focus: Focus) -> String {
    match focus {
        Focus::Records => "↑↓:select e:edit d:delete y:copy Tab:form q:quit".to_string(),
        Focus::Gender | Focus::City => format!("←→:choose Tab:next {SUBMIT_SHORTCUT}:submit"),
        Focus::Hobby => format!("←→:move Space:toggle Tab:next {SUBMIT_SHORTCUT}:submit"),
        Focus::SubmitButton => "Enter:submit Tab:records".to_string(),
        Focus::Password => {
            format!("Tab:next {REVEAL_SHORTCUT}:show/hide {SUBMIT_SHORTCUT}:submit")
        }
        _ => format!("Tab:next S-Tab:prev {SUBMIT_SHORTCUT}:submit"),
    }
}
