//! Application state definitions

use super::forms::{FieldName, Hobby};
use std::collections::VecDeque;
use strum::IntoEnumIterator;

/// Which element of the screen receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Username,
    Email,
    Password,
    Phone,
    Gender,
    Hobby,
    Address,
    City,
    SubmitButton,
    Records,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Self::Username => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::Phone,
            Self::Phone => Self::Gender,
            Self::Gender => Self::Hobby,
            Self::Hobby => Self::Address,
            Self::Address => Self::City,
            Self::City => Self::SubmitButton,
            Self::SubmitButton => Self::Records,
            Self::Records => Self::Username,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Username => Self::Records,
            Self::Email => Self::Username,
            Self::Password => Self::Email,
            Self::Phone => Self::Password,
            Self::Gender => Self::Phone,
            Self::Hobby => Self::Gender,
            Self::Address => Self::Hobby,
            Self::City => Self::Address,
            Self::SubmitButton => Self::City,
            Self::Records => Self::SubmitButton,
        }
    }

    /// The form field under focus, if any
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::Username => Some(FieldName::Username),
            Self::Email => Some(FieldName::Email),
            Self::Password => Some(FieldName::Password),
            Self::Phone => Some(FieldName::Phone),
            Self::Gender => Some(FieldName::Gender),
            Self::Hobby => Some(FieldName::Hobby),
            Self::Address => Some(FieldName::Address),
            Self::City => Some(FieldName::City),
            Self::SubmitButton | Self::Records => None,
        }
    }

    pub fn from_field(field: FieldName) -> Self {
        match field {
            FieldName::Username => Self::Username,
            FieldName::Email => Self::Email,
            FieldName::Password => Self::Password,
            FieldName::Phone => Self::Phone,
            FieldName::Gender => Self::Gender,
            FieldName::Hobby => Self::Hobby,
            FieldName::Address => Self::Address,
            FieldName::City => Self::City,
        }
    }

    /// Returns true if the form pane (fields or button) has focus
    pub fn is_form(&self) -> bool {
        !matches!(self, Self::Records)
    }
}

/// Delete waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeleteAction {
    pub index: usize,
    /// Short description of the record shown in the dialog
    pub record_display: String,
    /// true = Delete, false = Cancel
    pub selected_option: bool,
}

/// Main application state (everything outside the form controller)
#[derive(Debug, Default)]
pub struct AppState {
    pub focus: Focus,
    /// Highlighted checkbox in the hobby group
    pub hobby_cursor: usize,
    /// Selected row in the records table
    pub selected_index: usize,
    pub show_password: bool,
    pub pending_delete: Option<PendingDeleteAction>,
    errors: VecDeque<String>,
}

impl AppState {
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Hobby currently under the checkbox cursor
    pub fn highlighted_hobby(&self) -> Option<Hobby> {
        Hobby::iter().nth(self.hobby_cursor)
    }

    pub fn move_hobby_cursor(&mut self, forward: bool) {
        let count = Hobby::iter().count();
        self.hobby_cursor = if forward {
            (self.hobby_cursor + 1) % count
        } else if self.hobby_cursor == 0 {
            count - 1
        } else {
            self.hobby_cursor - 1
        };
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep the selection inside a table of `len` rows
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_cycles_through_every_stop() {
            let mut focus = Focus::default();
            for _ in 0..10 {
                focus = focus.next();
            }
            assert_eq!(focus, Focus::Username);
        }

        #[test]
        fn test_prev_wraps_to_records() {
            assert_eq!(Focus::Username.prev(), Focus::Records);
        }

        #[test]
        fn test_prev_undoes_next() {
            let mut focus = Focus::Phone;
            for _ in 0..10 {
                assert_eq!(focus.next().prev(), focus);
                focus = focus.next();
            }
        }

        #[test]
        fn test_field_round_trip() {
            for field in FieldName::iter() {
                assert_eq!(Focus::from_field(field).field(), Some(field));
            }
            assert_eq!(Focus::SubmitButton.field(), None);
            assert!(!Focus::Records.is_form());
        }
    }

    mod selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_move_down_stops_at_end() {
            let mut state = AppState::default();
            state.move_selection_down(2);
            state.move_selection_down(2);
            assert_eq!(state.selected_index, 1);
        }

        #[test]
        fn test_move_up_stops_at_zero() {
            let mut state = AppState::default();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_clamp_after_shrink() {
            let mut state = AppState {
                selected_index: 4,
                ..Default::default()
            };
            state.clamp_selection(3);
            assert_eq!(state.selected_index, 2);
            state.clamp_selection(0);
            assert_eq!(state.selected_index, 0);
        }
    }

    #[test]
    fn test_hobby_cursor_wraps() {
        let mut state = AppState::default();
        assert_eq!(state.highlighted_hobby(), Some(Hobby::Reading));
        state.move_hobby_cursor(true);
        assert_eq!(state.highlighted_hobby(), Some(Hobby::Dancing));
        state.move_hobby_cursor(true);
        assert_eq!(state.highlighted_hobby(), Some(Hobby::Reading));
        state.move_hobby_cursor(false);
        assert_eq!(state.highlighted_hobby(), Some(Hobby::Dancing));
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }
}
