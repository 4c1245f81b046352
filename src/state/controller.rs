//! Submission state machine for the RSVP form
//!
//! The controller owns the form and a [`Presenter`]. UI code turns key,
//! mouse and timer activity into [`FormEvent`]s and feeds them to
//! [`FormController::handle`]; the only thing handed back is the payload
//! to send when a submit intent passes validation. Sending it, and
//! reporting the outcome, is the caller's job.

use super::forms::{FieldId, Form, RsvpForm, RsvpValues, SUBMIT_ROW};
use super::presenter::Presenter;
use super::validation::validate;
use crate::submit::SubmitOutcome;
use std::time::{Duration, Instant};

/// Default time the success overlay stays up
pub const DEFAULT_SUCCESS_WINDOW: Duration = Duration::from_secs(5);

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    /// Overlay visible until the deadline or a dismissal
    Success { until: Instant },
    Failed,
}

impl SubmissionPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Validating => "Validating",
            Self::Invalid => "Needs fixes",
            Self::Submitting => "Submitting",
            Self::Success { .. } => "Sent",
            Self::Failed => "Failed",
        }
    }
}

/// Everything that can happen to the form
#[derive(Debug)]
pub enum FormEvent {
    /// Text typed or pasted into a field
    Input { field: FieldId, text: String },
    Backspace(FieldId),
    /// Pick an option of a choice field
    Select { field: FieldId, index: usize },
    SelectNext(FieldId),
    SelectPrev(FieldId),
    /// Move focus to a field (`None` focuses the submit button)
    Focus(Option<FieldId>),
    FocusNext,
    FocusPrev,
    /// Focus left a field
    Blur(FieldId),
    SubmitIntent,
    SubmissionFinished { outcome: SubmitOutcome, at: Instant },
    DismissSuccess,
    Tick(Instant),
}

/// Knobs taken from configuration
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub success_window: Duration,
    /// Who to contact when submission fails
    pub fallback_contact: String,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            success_window: DEFAULT_SUCCESS_WINDOW,
            fallback_contact: "the host".to_string(),
        }
    }
}

pub struct FormController<P: Presenter> {
    form: RsvpForm,
    presenter: P,
    phase: SubmissionPhase,
    settings: ControllerSettings,
}

impl<P: Presenter> FormController<P> {
    pub fn new(presenter: P, settings: ControllerSettings) -> Self {
        Self {
            form: RsvpForm::new(),
            presenter,
            phase: SubmissionPhase::Idle,
            settings,
        }
    }

    pub fn form(&self) -> &RsvpForm {
        &self.form
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting)
    }

    pub fn is_showing_success(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Success { .. })
    }

    /// Message shown when a submission does not go through
    pub fn failure_message(&self) -> String {
        format!(
            "There was an error submitting your RSVP. Please try again or contact {} directly.",
            self.settings.fallback_contact
        )
    }

    /// Apply one event. Returns the values to submit when a submit
    /// intent passes validation.
    pub fn handle(&mut self, event: FormEvent) -> Option<RsvpValues> {
        match event {
            FormEvent::Input { field, text } => {
                self.form.field_mut(field).push_str(&text);
            }
            FormEvent::Backspace(field) => self.form.field_mut(field).pop_char(),
            FormEvent::Select { field, index } => self.form.field_mut(field).select(index),
            FormEvent::SelectNext(field) => self.form.field_mut(field).select_next(),
            FormEvent::SelectPrev(field) => self.form.field_mut(field).select_prev(),
            FormEvent::Focus(Some(field)) => self.change_focus(|form| form.focus(field)),
            FormEvent::Focus(None) => self.change_focus(|form| form.set_active_field(SUBMIT_ROW)),
            FormEvent::FocusNext => self.change_focus(|form| form.next_field()),
            FormEvent::FocusPrev => self.change_focus(|form| form.prev_field()),
            FormEvent::Blur(field) => self.blur(field),
            FormEvent::SubmitIntent => return self.submit_intent(),
            FormEvent::SubmissionFinished { outcome, at } => self.finish(outcome, at),
            FormEvent::DismissSuccess => self.end_success(),
            FormEvent::Tick(now) => {
                if let SubmissionPhase::Success { until } = self.phase {
                    if now >= until {
                        self.end_success();
                    }
                }
            }
        }
        None
    }

    /// Move focus, blurring the field that loses it
    fn change_focus(&mut self, apply: impl FnOnce(&mut RsvpForm)) {
        let leaving = self.form.active_field_id();
        apply(&mut self.form);
        if let Some(field) = leaving {
            if self.form.active_field_id() != Some(field) {
                self.blur(field);
            }
        }
    }

    /// Validate on blur, but only once the field holds something
    fn blur(&mut self, field: FieldId) {
        if !self.form.field(field).has_value() {
            return;
        }
        let result = validate(&self.form.snapshot());
        self.presenter.render_errors(&result);
    }

    fn submit_intent(&mut self) -> Option<RsvpValues> {
        if self.phase != SubmissionPhase::Idle {
            tracing::debug!("Ignoring submit while {}", self.phase.label());
            return None;
        }

        self.phase = SubmissionPhase::Validating;
        self.presenter.clear_errors();
        let values = self.form.snapshot();
        let result = validate(&values);

        if !result.is_valid() {
            self.phase = SubmissionPhase::Invalid;
            tracing::info!("RSVP has {} invalid field(s)", result.len());
            self.presenter.render_errors(&result);
            self.presenter.scroll_to_first_error();
            self.phase = SubmissionPhase::Idle;
            return None;
        }

        self.phase = SubmissionPhase::Submitting;
        self.presenter.set_submit_busy(true);
        Some(values)
    }

    fn finish(&mut self, outcome: SubmitOutcome, at: Instant) {
        if !self.is_submitting() {
            tracing::warn!("Submission result arrived while {}", self.phase.label());
            return;
        }

        // The button comes back whatever the outcome
        self.presenter.set_submit_busy(false);

        match outcome {
            Ok(()) => {
                self.phase = SubmissionPhase::Success {
                    until: at + self.settings.success_window,
                };
                self.presenter.show_success();
            }
            Err(err) => {
                self.phase = SubmissionPhase::Failed;
                tracing::error!("RSVP submission failed: {err}");
                let message = self.failure_message();
                self.presenter.alert(&message);
                self.phase = SubmissionPhase::Idle;
            }
        }
    }

    /// Close the success overlay and start over with an empty form
    fn end_success(&mut self) {
        if !self.is_showing_success() {
            return;
        }
        self.presenter.hide_success();
        self.presenter.clear_errors();
        self.form.reset();
        self.phase = SubmissionPhase::Idle;
    }
}
