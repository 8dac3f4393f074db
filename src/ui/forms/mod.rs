//! Form rendering module
//!
//! - `field_renderer`: bordered text and choice fields with inline errors
//! - `registration_form`: the create/edit registration form

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration_form;
