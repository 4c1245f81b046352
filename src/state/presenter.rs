//! Trait abstraction for the rendering surface, so the submission flow can
//! be driven and checked without a terminal

use super::forms::FieldId;
use super::validation::ValidationResult;

/// Everything the form controller needs to show feedback
#[cfg_attr(test, mockall::automock)]
pub trait Presenter {
    /// Remove every injected error message and reset highlights. Idempotent.
    fn clear_errors(&mut self);

    /// Attach a message to the field's group and highlight the field.
    /// A field without a group on the surface is ignored.
    fn show_error(&mut self, field: FieldId, message: &str);

    /// Bring the first errored group into view
    fn scroll_to_first_error(&mut self);

    /// Disable the submit button and show a busy label, or restore it
    fn set_submit_busy(&mut self, busy: bool);

    /// Show the success overlay and lock background scrolling
    fn show_success(&mut self);

    /// Hide the success overlay and restore scrolling
    fn hide_success(&mut self);

    /// Raise a blocking alert
    fn alert(&mut self, message: &str);

    /// Replace whatever is on screen with one pass of errors
    fn render_errors(&mut self, result: &ValidationResult) {
        self.clear_errors();
        for (field, error) in result.iter() {
            self.show_error(field, &error.message);
        }
    }
}
