//! Validation rules for the registration form

use super::field::FieldName;
use super::form_state::FormFields;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// A single failing field, displayed as its user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username is required.")]
    UsernameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Password is required.")]
    PasswordRequired,
    #[error(
        "Password must be at least 8 characters long, include an uppercase letter, \
         a lowercase letter, a number, and a special character."
    )]
    PasswordTooWeak,
    #[error("Phone number is required.")]
    PhoneRequired,
    #[error("Gender is required.")]
    GenderRequired,
    #[error("Select at least one hobby.")]
    HobbyRequired,
    #[error("Address is required.")]
    AddressRequired,
    #[error("City is required.")]
    CityRequired,
}

impl ValidationError {
    pub fn field(&self) -> FieldName {
        match self {
            Self::UsernameRequired => FieldName::Username,
            Self::EmailRequired => FieldName::Email,
            Self::PasswordRequired | Self::PasswordTooWeak => FieldName::Password,
            Self::PhoneRequired => FieldName::Phone,
            Self::GenderRequired => FieldName::Gender,
            Self::HobbyRequired => FieldName::Hobby,
            Self::AddressRequired => FieldName::Address,
            Self::CityRequired => FieldName::City,
        }
    }
}

/// The first pattern anchors length and alphabet, the others must each match somewhere.
static PASSWORD_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^[A-Za-z0-9@$!%*?&]{8,}$",
        r"[a-z]",
        r"[A-Z]",
        r"[0-9]",
        r"[@$!%*?&]",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("password pattern compiles"))
    .collect()
});

/// Check a password against the strength rules
pub fn is_strong_password(password: &str) -> bool {
    PASSWORD_RULES.iter().all(|rule| rule.is_match(password))
}

/// Errors for every field currently failing validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<FieldName, ValidationError>);

impl ValidationErrors {
    /// Run every rule against the given fields
    pub fn check(fields: &FormFields) -> Self {
        let mut errors = BTreeMap::new();
        let mut fail = |error: ValidationError| {
            errors.insert(error.field(), error);
        };

        if fields.username.is_empty() {
            fail(ValidationError::UsernameRequired);
        }
        if fields.email.is_empty() {
            fail(ValidationError::EmailRequired);
        }
        if fields.password.is_empty() {
            fail(ValidationError::PasswordRequired);
        } else if !is_strong_password(&fields.password) {
            fail(ValidationError::PasswordTooWeak);
        }
        if fields.phone.is_empty() {
            fail(ValidationError::PhoneRequired);
        }
        if fields.gender.is_none() {
            fail(ValidationError::GenderRequired);
        }
        if fields.hobby.is_empty() {
            fail(ValidationError::HobbyRequired);
        }
        if fields.address.is_empty() {
            fail(ValidationError::AddressRequired);
        }
        if fields.city.is_none() {
            fail(ValidationError::CityRequired);
        }

        Self(errors)
    }

    pub fn get(&self, field: FieldName) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First failing field in form order
    pub fn first_field(&self) -> Option<FieldName> {
        self.0.keys().next().copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
