//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{Table, TableState},
    Frame,
};

/// Render a scrollable table that keeps the selected row visible.
///
/// Pass `None` to render without a highlighted row.
pub fn render_scrollable_table(
    frame: &mut Frame,
    area: Rect,
    table: Table,
    selected_index: Option<usize>,
) {
    let mut table_state = TableState::default().with_selected(selected_index);
    frame.render_stateful_widget(table, area, &mut table_state);
}
