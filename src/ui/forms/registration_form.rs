//! Registration form rendering (create and edit)

use super::field_renderer::{draw_choice_field, draw_text_field, ChoiceItem, ChoiceStyle};
use crate::app::App;
use crate::platform::PASSWORD_MASK;
use crate::state::{City, FieldName, Focus, FormFields, Gender, Hobby};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use strum::IntoEnumIterator;

/// Rows taken by one bordered field
const FIELD_HEIGHT: u16 = 3;

/// Draw the registration form with its submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.controller.edit_cursor() {
        Some(index) => format!(" Edit Record #{} ", index + 1),
        None => " Registration ".to_string(),
    };
    let border_color = if app.state.focus.is_form() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FieldName::iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row, field) in FieldName::iter().enumerate() {
        draw_form_field(frame, chunks[row], app, field);
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(chunks[FieldName::iter().count()]);

    let button_color = if app.controller.is_editing() {
        Color::Yellow
    } else {
        Color::Green
    };
    render_action_button(
        frame,
        button_row[0],
        app.controller.submit_label(),
        app.state.focus == Focus::SubmitButton,
        Some(button_color),
    );
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, field: FieldName) {
    let fields = app.controller.fields();
    let is_active = app.state.focus.field() == Some(field);
    let error = app
        .controller
        .errors()
        .get(field)
        .map(|e| e.to_string());
    let error = error.as_deref();

    match field {
        FieldName::Gender => {
            let items = choice_items::<Gender>(|g| fields.gender == Some(g));
            draw_choice_field(
                frame,
                area,
                field.label(),
                &items,
                ChoiceStyle::Radio,
                None,
                is_active,
                error,
            );
        }
        FieldName::Hobby => {
            let items = choice_items::<Hobby>(|h| fields.hobby.contains(&h));
            draw_choice_field(
                frame,
                area,
                field.label(),
                &items,
                ChoiceStyle::Checkbox,
                Some(app.state.hobby_cursor),
                is_active,
                error,
            );
        }
        FieldName::City => {
            let items = choice_items::<City>(|c| fields.city == Some(c));
            draw_choice_field(
                frame,
                area,
                field.label(),
                &items,
                ChoiceStyle::Select,
                None,
                is_active,
                error,
            );
        }
        text => {
            let value = text_display(fields, text, app.state.show_password);
            draw_text_field(frame, area, text.label(), &value, is_active, error);
        }
    }
}

fn choice_items<T>(is_checked: impl Fn(T) -> bool) -> Vec<ChoiceItem>
where
    T: IntoEnumIterator + ToString + Copy,
{
    T::iter()
        .map(|option| ChoiceItem {
            label: option.to_string(),
            checked: is_checked(option),
        })
        .collect()
}

/// Text shown for a text field, masking the password unless revealed
fn text_display(fields: &FormFields, field: FieldName, show_password: bool) -> String {
    let value = fields.text(field).unwrap_or_default();
    if field == FieldName::Password && !show_password {
        PASSWORD_MASK.to_string().repeat(value.chars().count())
    } else {
        value.to_string()
    }
}
