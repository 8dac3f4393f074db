//! Form field names, option vocabularies and change events

use super::error::FormError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Names of the registration form fields
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum FieldName {
    Username,
    Email,
    Password,
    Phone,
    Gender,
    Hobby,
    Address,
    City,
}

impl FieldName {
    /// Label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Phone => "Phone Number",
            Self::Gender => "Gender",
            Self::Hobby => "Hobby",
            Self::Address => "Address",
            Self::City => "City",
        }
    }

    /// Whether the field holds free text
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Username | Self::Email | Self::Password | Self::Phone | Self::Address
        )
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Gender {
    Male,
    Female,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Hobby {
    Reading,
    Dancing,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum City {
    #[strum(serialize = "New York")]
    #[serde(rename = "New York")]
    NewYork,
    #[strum(serialize = "Los Angeles")]
    #[serde(rename = "Los Angeles")]
    LosAngeles,
    Chicago,
}

/// Step through `None, first, .., last` and wrap around.
pub fn cycle_option<T>(current: Option<T>, forward: bool) -> Option<T>
where
    T: IntoEnumIterator + PartialEq + Copy,
{
    let mut slots: Vec<Option<T>> = vec![None];
    slots.extend(T::iter().map(Some));

    let pos = slots.iter().position(|s| *s == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % slots.len()
    } else if pos == 0 {
        slots.len() - 1
    } else {
        pos - 1
    };
    slots[next]
}

/// Parse an option label; the empty string means unset.
pub fn parse_option<T: FromStr>(field: FieldName, value: &str) -> Result<Option<T>, FormError> {
    if value.is_empty() {
        return Ok(None);
    }
    T::from_str(value)
        .map(Some)
        .map_err(|_| FormError::UnknownOption {
            field,
            value: value.to_string(),
        })
}

/// Kind of input control that produced a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Input,
    Checkbox { checked: bool },
}

/// A single field change coming from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEvent {
    pub name: FieldName,
    pub value: String,
    pub control: Control,
}

impl FieldEvent {
    /// Change event for text inputs, radios and selects
    pub fn input(name: FieldName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            control: Control::Input,
        }
    }

    /// Change event for a hobby checkbox
    pub fn checkbox(value: impl Into<String>, checked: bool) -> Self {
        Self {
            name: FieldName::Hobby,
            value: value.into(),
            control: Control::Checkbox { checked },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parses_lowercase_names() {
            assert_eq!(FieldName::from_str("phone").unwrap(), FieldName::Phone);
            assert_eq!(FieldName::from_str("city").unwrap(), FieldName::City);
            assert!(FieldName::from_str("nickname").is_err());
        }

        #[test]
        fn test_display_is_lowercase() {
            assert_eq!(FieldName::Username.to_string(), "username");
            assert_eq!(FieldName::Hobby.to_string(), "hobby");
        }

        #[test]
        fn test_text_fields() {
            let text: Vec<_> = FieldName::iter().filter(|f| f.is_text()).collect();
            assert_eq!(
                text,
                vec![
                    FieldName::Username,
                    FieldName::Email,
                    FieldName::Password,
                    FieldName::Phone,
                    FieldName::Address,
                ]
            );
        }
    }

    mod options {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_city_labels_round_trip() {
            assert_eq!(City::NewYork.to_string(), "New York");
            assert_eq!(City::from_str("Los Angeles").unwrap(), City::LosAngeles);
        }

        #[test]
        fn test_city_serializes_with_label() {
            let json = serde_json::to_string(&City::NewYork).unwrap();
            assert_eq!(json, "\"New York\"");
        }

        #[test]
        fn test_parse_option_empty_is_unset() {
            let parsed: Option<Gender> = parse_option(FieldName::Gender, "").unwrap();
            assert_eq!(parsed, None);
        }

        #[test]
        fn test_parse_option_rejects_unknown_label() {
            let err = parse_option::<City>(FieldName::City, "Boston").unwrap_err();
            assert_eq!(
                err,
                FormError::UnknownOption {
                    field: FieldName::City,
                    value: "Boston".to_string(),
                }
            );
        }

        #[test]
        fn test_cycle_forward_wraps_through_unset() {
            let mut value = None;
            value = cycle_option::<Gender>(value, true);
            assert_eq!(value, Some(Gender::Male));
            value = cycle_option(value, true);
            assert_eq!(value, Some(Gender::Female));
            value = cycle_option(value, true);
            assert_eq!(value, None);
        }

        #[test]
        fn test_cycle_backward_from_unset_goes_to_last() {
            assert_eq!(cycle_option::<City>(None, false), Some(City::Chicago));
        }
    }
}
