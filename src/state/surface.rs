//! Concrete presenter backing the terminal UI

use super::forms::FieldId;
use super::presenter::Presenter;

/// Label shown on the submit button while a request is in flight
pub const BUSY_LABEL: &str = "Submitting...";

/// Error annotations for one form group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    pub field: FieldId,
    pub errors: Vec<String>,
    /// Red border on the field (every option, for a choice group)
    pub highlighted: bool,
}

impl FieldGroup {
    fn new(field: FieldId) -> Self {
        Self {
            field,
            errors: Vec::new(),
            highlighted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
}

/// What the form looks like apart from its values
#[derive(Debug, Clone)]
pub struct FormSurface {
    groups: Vec<FieldGroup>,
    pub submit_button: SubmitButton,
    original_label: String,
    pub success_visible: bool,
    pub scroll_locked: bool,
    pub alert: Option<String>,
    /// Group the view should scroll to, consumed by the UI
    pub scroll_target: Option<FieldId>,
}

impl FormSurface {
    pub fn new(fields: &[FieldId], submit_label: &str) -> Self {
        Self {
            groups: fields.iter().copied().map(FieldGroup::new).collect(),
            submit_button: SubmitButton {
                label: submit_label.to_string(),
                enabled: true,
            },
            original_label: submit_label.to_string(),
            success_visible: false,
            scroll_locked: false,
            alert: None,
            scroll_target: None,
        }
    }

    pub fn group(&self, field: FieldId) -> Option<&FieldGroup> {
        self.groups.iter().find(|g| g.field == field)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    /// Total number of error messages currently shown
    pub fn error_count(&self) -> usize {
        self.groups.iter().map(|g| g.errors.len()).sum()
    }

    pub fn take_scroll_target(&mut self) -> Option<FieldId> {
        self.scroll_target.take()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

impl Default for FormSurface {
    fn default() -> Self {
        Self::new(&FieldId::ALL, "Submit RSVP")
    }
}

impl Presenter for FormSurface {
    fn clear_errors(&mut self) {
        for group in &mut self.groups {
            group.errors.clear();
            group.highlighted = false;
        }
    }

    fn show_error(&mut self, field: FieldId, message: &str) {
        let Some(group) = self.groups.iter_mut().find(|g| g.field == field) else {
            tracing::debug!("No group for {field:?}, dropping error");
            return;
        };
        group.errors.push(message.to_string());
        group.highlighted = true;
    }

    fn scroll_to_first_error(&mut self) {
        self.scroll_target = self
            .groups
            .iter()
            .filter(|g| !g.errors.is_empty())
            .map(|g| g.field)
            .min();
    }

    fn set_submit_busy(&mut self, busy: bool) {
        if busy {
            self.submit_button.label = BUSY_LABEL.to_string();
            self.submit_button.enabled = false;
        } else {
            self.submit_button.label = self.original_label.clone();
            self.submit_button.enabled = true;
        }
    }

    fn show_success(&mut self) {
        self.success_visible = true;
        self.scroll_locked = true;
    }

    fn hide_success(&mut self) {
        self.success_visible = false;
        self.scroll_locked = false;
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::RsvpValues;
    use crate::state::validation::validate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_show_error_annotates_and_highlights() {
        let mut surface = FormSurface::default();
        surface.show_error(FieldId::Phone, "Phone number is required");

        let group = surface.group(FieldId::Phone).unwrap();
        assert_eq!(group.errors, vec!["Phone number is required".to_string()]);
        assert!(group.highlighted);
        assert!(!surface.group(FieldId::Name).unwrap().highlighted);
    }

    #[test]
    fn test_show_error_for_missing_group_is_noop() {
        let mut surface = FormSurface::new(&[FieldId::Name], "Submit");
        surface.show_error(FieldId::Venmo, "Venmo username is required");
        assert_eq!(surface.error_count(), 0);
    }

    #[test]
    fn test_clear_errors_is_idempotent() {
        let mut surface = FormSurface::default();
        surface.clear_errors();
        assert_eq!(surface.error_count(), 0);

        surface.show_error(FieldId::Name, "Full name is required");
        surface.show_error(FieldId::FridayDinner, "Pick one");
        surface.clear_errors();
        surface.clear_errors();
        assert_eq!(surface.error_count(), 0);
        assert!(surface.groups().iter().all(|g| !g.highlighted));
    }

    #[test]
    fn test_render_errors_replaces_previous_pass() {
        let mut surface = FormSurface::default();
        let result = validate(&RsvpValues::default());
        surface.render_errors(&result);
        surface.render_errors(&result);
        assert_eq!(surface.error_count(), 4);
    }

    #[test]
    fn test_scroll_to_first_error_picks_topmost() {
        let mut surface = FormSurface::default();
        surface.show_error(FieldId::FridayDinner, "Pick one");
        surface.show_error(FieldId::Phone, "Phone number is required");
        surface.scroll_to_first_error();
        assert_eq!(surface.take_scroll_target(), Some(FieldId::Phone));
        assert_eq!(surface.take_scroll_target(), None);
    }

    #[test]
    fn test_submit_busy_round_trip_restores_label() {
        let mut surface = FormSurface::new(&FieldId::ALL, "Send RSVP");
        surface.set_submit_busy(true);
        assert_eq!(
            surface.submit_button,
            SubmitButton {
                label: BUSY_LABEL.to_string(),
                enabled: false
            }
        );
        surface.set_submit_busy(false);
        assert_eq!(
            surface.submit_button,
            SubmitButton {
                label: "Send RSVP".to_string(),
                enabled: true
            }
        );
    }

    #[test]
    fn test_success_locks_scrolling() {
        let mut surface = FormSurface::default();
        surface.show_success();
        assert!(surface.success_visible && surface.scroll_locked);
        surface.hide_success();
        assert!(!surface.success_visible && !surface.scroll_locked);
    }

    #[test]
    fn test_alert_until_dismissed() {
        let mut surface = FormSurface::default();
        surface.alert("Something broke");
        assert_eq!(surface.alert.as_deref(), Some("Something broke"));
        surface.dismiss_alert();
        assert!(surface.alert.is_none());
    }
}
