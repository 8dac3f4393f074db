//! Live form values and stored record snapshots

use super::field::{City, FieldName, Gender, Hobby};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current user input for every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub gender: Option<Gender>,
    pub hobby: BTreeSet<Hobby>,
    pub address: String,
    pub city: Option<City>,
}

impl FormFields {
    /// Borrow a text field's value (None for option fields)
    pub fn text(&self, name: FieldName) -> Option<&str> {
        match name {
            FieldName::Username => Some(&self.username),
            FieldName::Email => Some(&self.email),
            FieldName::Password => Some(&self.password),
            FieldName::Phone => Some(&self.phone),
            FieldName::Address => Some(&self.address),
            FieldName::Gender | FieldName::Hobby | FieldName::City => None,
        }
    }

    pub(super) fn text_mut(&mut self, name: FieldName) -> Option<&mut String> {
        match name {
            FieldName::Username => Some(&mut self.username),
            FieldName::Email => Some(&mut self.email),
            FieldName::Password => Some(&mut self.password),
            FieldName::Phone => Some(&mut self.phone),
            FieldName::Address => Some(&mut self.address),
            FieldName::Gender | FieldName::Hobby | FieldName::City => None,
        }
    }

    /// Comma separated hobbies in vocabulary order
    pub fn hobby_list(&self) -> String {
        self.hobby
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Get the display value for rendering
    pub fn display_value(&self, name: FieldName) -> String {
        match name {
            FieldName::Gender => self.gender.map(|g| g.to_string()).unwrap_or_default(),
            FieldName::Hobby => self.hobby_list(),
            FieldName::City => self.city.map(|c| c.to_string()).unwrap_or_default(),
            text => self.text(text).unwrap_or_default().to_string(),
        }
    }
}

/// Snapshot of a successful submission, addressed only by its position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedRecord(FormFields);

impl SubmittedRecord {
    pub fn fields(&self) -> &FormFields {
        &self.0
    }

    /// Pretty JSON used for clipboard export
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }
}

impl From<FormFields> for SubmittedRecord {
    fn from(fields: FormFields) -> Self {
        Self(fields)
    }
}
