//! Submission of RSVP values to the form-collection endpoint

mod client;
mod error;
mod traits;

pub use client::HttpSubmitter;
pub use error::{SubmitError, SubmitOutcome};
pub use traits::FormSubmitter;

#[cfg(test)]
pub use traits::MockFormSubmitter;
