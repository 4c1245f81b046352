//! Form domain layer
//!
//! Field value objects and the RSVP form built from them.

mod field;
mod rsvp_form;

pub use field::{FieldId, FormField};
pub use rsvp_form::{DinnerChoice, Form, RsvpForm, RsvpValues, SUBMIT_ROW};
