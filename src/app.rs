//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{
    cycle_option, AppState, FieldEvent, FieldName, Focus, FormController, NoticeQueue,
    PendingDeleteAction, Submitted,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Registration form and its records
    pub controller: FormController<NoticeQueue>,
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    #[allow(clippy::field_reassign_with_default)]
    pub fn new(config: TuiConfig) -> Self {
        let mut state = AppState::default();
        state.show_password = config.show_password();

        Self {
            state,
            controller: FormController::new(NoticeQueue::new(config.notice_ttl())),
            config,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Expire old notices; called once per loop iteration
    pub fn tick(&mut self) {
        self.controller.notifier_mut().prune();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle delete confirmation (modal)
        if self.state.pending_delete.is_some() {
            self.handle_confirm_delete_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        if key.modifiers.contains(SHORTCUT_MODIFIER) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit();
                    return Ok(());
                }
                KeyCode::Char('p') => {
                    self.state.show_password = !self.state.show_password;
                    return Ok(());
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            _ => match self.state.focus {
                Focus::Records => self.handle_records_key(key),
                Focus::SubmitButton => self.handle_submit_button_key(key),
                Focus::Gender | Focus::City => self.handle_select_key(key)?,
                Focus::Hobby => self.handle_hobby_key(key)?,
                focus => match focus.field() {
                    Some(field) if field.is_text() => self.handle_text_key(field, key)?,
                    _ => {}
                },
            },
        }
        Ok(())
    }

    /// Handle keys on a text input
    fn handle_text_key(&mut self, field: FieldName, key: KeyEvent) -> Result<()> {
        let current = self
            .controller
            .fields()
            .text(field)
            .unwrap_or_default()
            .to_string();

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut value = current;
                value.push(c);
                self.controller
                    .update_field(FieldEvent::input(field, value))?;
            }
            KeyCode::Backspace => {
                let mut value = current;
                if value.pop().is_some() {
                    self.controller
                        .update_field(FieldEvent::input(field, value))?;
                }
            }
            KeyCode::Enter | KeyCode::Down => self.state.next_focus(),
            KeyCode::Up => self.state.prev_focus(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the gender radios and the city select
    fn handle_select_key(&mut self, key: KeyEvent) -> Result<()> {
        let forward = match key.code {
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => true,
            KeyCode::Left | KeyCode::Char('h') => false,
            KeyCode::Enter | KeyCode::Down => {
                self.state.next_focus();
                return Ok(());
            }
            KeyCode::Up => {
                self.state.prev_focus();
                return Ok(());
            }
            _ => return Ok(()),
        };

        let fields = self.controller.fields();
        let event = match self.state.focus {
            Focus::Gender => FieldEvent::input(
                FieldName::Gender,
                label(cycle_option(fields.gender, forward)),
            ),
            Focus::City => {
                FieldEvent::input(FieldName::City, label(cycle_option(fields.city, forward)))
            }
            _ => return Ok(()),
        };
        self.controller.update_field(event)?;
        Ok(())
    }

    /// Handle keys on the hobby checkboxes
    fn handle_hobby_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.state.move_hobby_cursor(true),
            KeyCode::Left | KeyCode::Char('h') => self.state.move_hobby_cursor(false),
            KeyCode::Char(' ') => {
                if let Some(hobby) = self.state.highlighted_hobby() {
                    let checked = !self.controller.fields().hobby.contains(&hobby);
                    self.controller
                        .update_field(FieldEvent::checkbox(hobby.to_string(), checked))?;
                }
            }
            KeyCode::Enter | KeyCode::Down => self.state.next_focus(),
            KeyCode::Up => self.state.prev_focus(),
            _ => {}
        }
        Ok(())
    }

    fn handle_submit_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
            KeyCode::Down => self.state.next_focus(),
            KeyCode::Up => self.state.prev_focus(),
            _ => {}
        }
    }

    /// Handle keys in the records table
    fn handle_records_key(&mut self, key: KeyEvent) {
        let len = self.controller.records().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(len),
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Char('e') | KeyCode::Enter => self.begin_edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete_selected(),
            KeyCode::Char('y') => self.copy_selected_record(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys while the delete confirmation is open
    fn handle_confirm_delete_key(&mut self, key: KeyEvent) {
        let Some(pending) = self.state.pending_delete.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab => pending.selected_option = !pending.selected_option,
            KeyCode::Enter => {
                let confirmed = pending.selected_option;
                let index = pending.index;
                self.state.pending_delete = None;
                if confirmed {
                    self.delete_record(index);
                }
            }
            KeyCode::Esc => self.state.pending_delete = None,
            _ => {}
        }
    }

    /// Validate and store the form
    fn submit(&mut self) {
        match self.controller.submit() {
            Ok(outcome) => {
                if let Submitted::Updated(index) = outcome {
                    tracing::debug!(index, "edit finished");
                }
                self.state.selected_index = outcome.index();
                self.state.focus = Focus::Username;
            }
            Err(errors) => {
                if let Some(field) = errors.first_field() {
                    self.state.focus = Focus::from_field(field);
                }
            }
        }
    }

    fn begin_edit_selected(&mut self) {
        if self.controller.records().is_empty() {
            return;
        }
        match self.controller.begin_edit(self.state.selected_index) {
            Ok(()) => self.state.focus = Focus::Username,
            Err(err) => self.push_error(format!("Cannot edit record: {err}")),
        }
    }

    fn request_delete_selected(&mut self) {
        let index = self.state.selected_index;
        let Some(record) = self.controller.records().get(index) else {
            return;
        };

        if self.config.confirm_delete() {
            let fields = record.fields();
            self.state.pending_delete = Some(PendingDeleteAction {
                index,
                record_display: format!("{} <{}>", fields.username, fields.email),
                selected_option: false,
            });
        } else {
            self.delete_record(index);
        }
    }

    fn delete_record(&mut self, index: usize) {
        match self.controller.delete_record(index) {
            Ok(_) => self
                .state
                .clamp_selection(self.controller.records().len()),
            Err(err) => self.push_error(format!("Cannot delete record: {err}")),
        }
    }

    fn copy_selected_record(&mut self) {
        let Some(record) = self.controller.records().get(self.state.selected_index) else {
            return;
        };
        let result = record
            .to_json()
            .map_err(anyhow::Error::from)
            .and_then(|json| copy_to_clipboard(&json));
        match result {
            Ok(()) => self.copy_message = Some("Record copied to clipboard".to_string()),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err:#}");
                self.push_error(format!("Failed to copy record: {err}"));
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

/// Option label as sent by a select control
fn label<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{City, FormFields, Gender, Hobby, Notice};
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(TuiConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Fill every field through key presses, starting from the username field
    fn fill_form(app: &mut App, username: &str) {
        app.state.focus = Focus::Username;
        type_text(app, username);
        press(app, KeyCode::Tab);
        type_text(app, "a@b.com");
        press(app, KeyCode::Tab);
        type_text(app, "Abcdef1!");
        press(app, KeyCode::Tab);
        type_text(app, "555");
        press(app, KeyCode::Tab);
        // Gender: unset -> Male -> Female
        press(app, KeyCode::Right);
        press(app, KeyCode::Right);
        press(app, KeyCode::Tab);
        // Hobby: toggle Reading
        app.state.hobby_cursor = 0;
        press(app, KeyCode::Char(' '));
        press(app, KeyCode::Tab);
        type_text(app, "1 Rd");
        press(app, KeyCode::Tab);
        // City: unset -> Chicago (backwards)
        press(app, KeyCode::Left);
    }

    mod form_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = app();
            type_text(&mut app, "alice");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.controller.fields().username, "alic");
        }

        #[test]
        fn test_fill_form_sets_every_field() {
            let mut app = app();
            fill_form(&mut app, "alice");
            let fields = app.controller.fields();
            assert_eq!(fields.gender, Some(Gender::Female));
            assert!(fields.hobby.contains(&Hobby::Reading));
            assert_eq!(fields.city, Some(City::Chicago));
            assert_eq!(fields.address, "1 Rd");
        }

        #[test]
        fn test_typing_on_option_fields_is_ignored() {
            let mut app = app();
            app.state.focus = Focus::Gender;
            type_text(&mut app, "xyz");
            app.state.focus = Focus::SubmitButton;
            type_text(&mut app, "abc");
            assert_eq!(app.controller.fields(), &FormFields::default());
        }

        #[test]
        fn test_space_toggles_hobby_back_off() {
            let mut app = app();
            app.state.focus = Focus::Hobby;
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Char(' '));
            assert!(app.controller.fields().hobby.contains(&Hobby::Dancing));
            press(&mut app, KeyCode::Char(' '));
            assert!(app.controller.fields().hobby.is_empty());
        }

        #[test]
        fn test_ctrl_p_toggles_password_visibility() {
            let mut app = app();
            assert!(!app.state.show_password);
            ctrl(&mut app, 'p');
            assert!(app.state.show_password);
            assert_eq!(app.controller.fields().username, "");
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_submit_focuses_first_error() {
            let mut app = app();
            type_text(&mut app, "alice");
            ctrl(&mut app, 's');
            assert_eq!(app.state.focus, Focus::Email);
            assert_eq!(app.controller.errors().len(), 7);
            assert!(app.controller.records().is_empty());
        }

        #[test]
        fn test_submit_button_stores_record() {
            let mut app = app();
            fill_form(&mut app, "alice");
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.focus, Focus::SubmitButton);
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.controller.records().len(), 1);
            assert_eq!(app.controller.fields(), &FormFields::default());
            assert_eq!(app.state.focus, Focus::Username);
            assert_eq!(
                app.controller.notifier().latest(),
                Some(Notice::Submitted { index: 0 })
            );
        }
    }

    mod records {
        use super::*;
        use pretty_assertions::assert_eq;

        fn app_with_records(names: &[&str]) -> App {
            let mut app = app();
            for name in names {
                fill_form(&mut app, name);
                ctrl(&mut app, 's');
            }
            app.state.focus = Focus::Records;
            app.state.selected_index = 0;
            app
        }

        #[test]
        fn test_edit_selected_record() {
            let mut app = app_with_records(&["alice", "bob"]);
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Char('e'));

            assert_eq!(app.controller.edit_cursor(), Some(1));
            assert_eq!(app.state.focus, Focus::Username);
            type_text(&mut app, "by");
            ctrl(&mut app, 's');

            assert_eq!(app.controller.records()[1].fields().username, "bobby");
            assert_eq!(app.controller.records().len(), 2);
        }

        #[test]
        fn test_delete_asks_for_confirmation() {
            let mut app = app_with_records(&["alice", "bob"]);
            press(&mut app, KeyCode::Char('d'));
            let pending = app.state.pending_delete.clone().unwrap();
            assert_eq!(pending.index, 0);
            assert_eq!(pending.record_display, "alice <a@b.com>");
            assert!(!pending.selected_option);

            // Enter on the default option cancels
            press(&mut app, KeyCode::Enter);
            assert!(app.state.pending_delete.is_none());
            assert_eq!(app.controller.records().len(), 2);

            press(&mut app, KeyCode::Char('d'));
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.controller.records().len(), 1);
            assert_eq!(app.controller.records()[0].fields().username, "bob");
        }

        #[test]
        fn test_delete_without_confirmation() {
            let mut app = app_with_records(&["alice", "bob"]);
            app.config.confirm_delete = Some(false);
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Delete);
            assert_eq!(app.controller.records().len(), 1);
            assert_eq!(app.state.selected_index, 0);
        }

        #[test]
        fn test_esc_closes_confirmation() {
            let mut app = app_with_records(&["alice"]);
            press(&mut app, KeyCode::Char('d'));
            press(&mut app, KeyCode::Esc);
            assert!(app.state.pending_delete.is_none());
            assert_eq!(app.controller.records().len(), 1);
        }

        #[test]
        fn test_edit_on_empty_table_is_noop() {
            let mut app = app();
            app.state.focus = Focus::Records;
            press(&mut app, KeyCode::Char('e'));
            press(&mut app, KeyCode::Char('d'));
            assert!(!app.controller.is_editing());
            assert!(app.state.pending_delete.is_none());
            assert!(!app.state.has_errors());
        }

        #[test]
        fn test_q_quits_from_table() {
            let mut app = app();
            app.state.focus = Focus::Records;
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }
    }

    #[test]
    fn test_error_dialog_is_modal() {
        let mut app = app();
        app.push_error("boom");
        type_text(&mut app, "x");
        assert_eq!(app.controller.fields().username, "");
        press(&mut app, KeyCode::Enter);
        assert!(!app.state.has_errors());
    }
}
