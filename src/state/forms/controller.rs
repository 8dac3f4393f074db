//! Registration form controller: field state, validation and submitted records

use super::error::FormError;
use super::field::{parse_option, City, Control, FieldEvent, FieldName, Gender, Hobby};
use super::form_state::{FormFields, SubmittedRecord};
use super::validation::ValidationErrors;
use crate::state::notice::{Notice, NoticeQueue, Notifier};
use std::str::FromStr;

/// Result of a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created(usize),
    Updated(usize),
}

impl Submitted {
    pub fn index(&self) -> usize {
        match self {
            Self::Created(index) | Self::Updated(index) => *index,
        }
    }
}

/// Owns the live form, its validation errors, the records table and the edit cursor.
///
/// Every operation runs to completion synchronously; the presentation layer
/// re-reads state through the accessors afterwards.
#[derive(Debug)]
pub struct FormController<N: Notifier = NoticeQueue> {
    fields: FormFields,
    errors: ValidationErrors,
    records: Vec<SubmittedRecord>,
    edit_cursor: Option<usize>,
    notifier: N,
}

impl<N: Notifier> FormController<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            fields: FormFields::default(),
            errors: ValidationErrors::default(),
            records: Vec::new(),
            edit_cursor: None,
            notifier,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn records(&self) -> &[SubmittedRecord] {
        &self.records
    }

    pub fn edit_cursor(&self) -> Option<usize> {
        self.edit_cursor
    }

    pub fn is_editing(&self) -> bool {
        self.edit_cursor.is_some()
    }

    /// Label for the submit button
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Submit"
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Apply a change event from the presentation layer.
    ///
    /// Text values are stored verbatim. Option fields take the option's label,
    /// with the empty string meaning unset. Validation errors are left as they are.
    pub fn update_field(&mut self, event: FieldEvent) -> Result<(), FormError> {
        let FieldEvent {
            name,
            value,
            control,
        } = event;

        match (name, control) {
            (FieldName::Hobby, Control::Checkbox { checked }) => {
                let hobby = Hobby::from_str(&value).map_err(|_| FormError::UnknownOption {
                    field: FieldName::Hobby,
                    value: value.clone(),
                })?;
                self.set_hobby(hobby, checked);
            }
            (FieldName::Hobby, Control::Input) | (_, Control::Checkbox { .. }) => {
                return Err(FormError::ControlMismatch(name));
            }
            (FieldName::Gender, Control::Input) => {
                self.set_gender(parse_option(name, &value)?);
            }
            (FieldName::City, Control::Input) => {
                self.set_city(parse_option(name, &value)?);
            }
            (_, Control::Input) => {
                self.set_text(name, value)?;
            }
        }
        Ok(())
    }

    /// Replace a text field's value
    pub fn set_text(&mut self, name: FieldName, value: impl Into<String>) -> Result<(), FormError> {
        let slot = self
            .fields
            .text_mut(name)
            .ok_or(FormError::ControlMismatch(name))?;
        *slot = value.into();
        tracing::trace!(field = %name, "field updated");
        Ok(())
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.fields.gender = gender;
        tracing::trace!(?gender, "gender updated");
    }

    pub fn set_city(&mut self, city: Option<City>) {
        self.fields.city = city;
        tracing::trace!(?city, "city updated");
    }

    /// Check or uncheck a hobby; repeating either is a no-op
    pub fn set_hobby(&mut self, hobby: Hobby, checked: bool) {
        if checked {
            self.fields.hobby.insert(hobby);
        } else {
            self.fields.hobby.remove(&hobby);
        }
        tracing::trace!(%hobby, checked, "hobby updated");
    }

    /// Recompute validation errors from scratch; true when the form is valid
    pub fn validate(&mut self) -> bool {
        self.errors = ValidationErrors::check(&self.fields);
        self.errors.is_empty()
    }

    /// Store the current form as a new record, or over the record being edited.
    ///
    /// On success the form resets and a notice is emitted. On failure nothing
    /// but the validation errors changes.
    pub fn submit(&mut self) -> Result<Submitted, ValidationErrors> {
        if !self.validate() {
            return Err(self.errors.clone());
        }

        let record = SubmittedRecord::from(std::mem::take(&mut self.fields));
        let outcome = match self.edit_cursor.take() {
            Some(index) if index < self.records.len() => {
                self.records[index] = record;
                Submitted::Updated(index)
            }
            stale => {
                if let Some(index) = stale {
                    tracing::warn!(index, "edit cursor out of range, appending instead");
                }
                self.records.push(record);
                Submitted::Created(self.records.len() - 1)
            }
        };

        let notice = match outcome {
            Submitted::Created(index) => Notice::Submitted { index },
            Submitted::Updated(index) => Notice::Updated { index },
        };
        tracing::info!(?outcome, records = self.records.len(), "record saved");
        self.notifier.notify(notice);

        self.errors.clear();
        Ok(outcome)
    }

    /// Load a stored record into the form for editing
    pub fn begin_edit(&mut self, index: usize) -> Result<(), FormError> {
        let record = self.record(index)?;
        self.fields = record.fields().clone();
        self.edit_cursor = Some(index);
        tracing::debug!(index, "editing record");
        Ok(())
    }

    /// Remove a stored record; later records move up by one.
    ///
    /// Deleting the record under edit leaves the form as it is but drops the
    /// cursor, so the next submit appends. Deleting an earlier record moves the
    /// cursor with the record it points at.
    pub fn delete_record(&mut self, index: usize) -> Result<SubmittedRecord, FormError> {
        self.record(index)?;
        let removed = self.records.remove(index);

        self.edit_cursor = match self.edit_cursor {
            Some(cursor) if cursor == index => None,
            Some(cursor) if cursor > index => Some(cursor - 1),
            other => other,
        };

        tracing::info!(index, records = self.records.len(), "record deleted");
        self.notifier.notify(Notice::Deleted { index });
        Ok(removed)
    }

    fn record(&self, index: usize) -> Result<&SubmittedRecord, FormError> {
        self.records.get(index).ok_or(FormError::RecordOutOfRange {
            index,
            len: self.records.len(),
        })
    }
}

impl Default for FormController<NoticeQueue> {
    fn default() -> Self {
        Self::new(NoticeQueue::new(std::time::Duration::from_secs(3)))
    }
}
