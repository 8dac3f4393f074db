//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod records;
mod widgets;

use crate::app::App;
use components::{render_confirm_dialog, render_error_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Form on the left, records on the right, status bar below
    let (form_area, records_area) = layout::create_layout(area);

    forms::draw_registration_form(frame, form_area, app);
    records::draw(frame, records_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Modal overlays last so they sit on top
    if let Some(pending) = &app.state.pending_delete {
        render_confirm_dialog(frame, pending);
    }
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
