//! Form rendering module
//!
//! - `field_renderer`: text and choice field rendering, with inline errors
//! - `rsvp_form`: the scrolling RSVP form and its row geometry

mod field_renderer;
mod rsvp_form;

pub use rsvp_form::{draw_rsvp_form, option_at, row_at, row_heights};
