//! Form domain layer
//!
//! Type-safe registration form handling: field vocabularies, validation
//! rules and the controller that owns the submitted records.

mod controller;
mod error;
mod field;
mod form_state;
mod validation;

pub use controller::{FormController, Submitted};
pub use field::{cycle_option, City, FieldEvent, FieldName, Gender, Hobby};
pub use form_state::{FormFields, SubmittedRecord};
