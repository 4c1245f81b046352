//! Application state and core logic

use crate::config::RsvpConfig;
use crate::platform::SUBMIT_MODIFIERS;
use crate::state::{
    FieldId, FormController, FormEvent, FormSurface, RsvpValues, SubmissionPhase, SUBMIT_ROW,
};
use crate::submit::{FormSubmitter, HttpSubmitter, SubmitOutcome};
use crate::ui::forms::{option_at, row_at, row_heights};
use crate::ui::form_viewport_height;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// The form and its submission state machine
    pub controller: FormController<FormSurface>,
    /// Loaded configuration
    pub config: RsvpConfig,
    /// Where RSVPs are sent
    submitter: Arc<dyn FormSubmitter>,
    /// Finished submissions, sent back from the request task
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Index of the first form row drawn
    pub scroll_offset: usize,
    /// Terminal size for scroll calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App posting to the configured endpoint
    pub fn new(config: RsvpConfig) -> Self {
        let submitter = HttpSubmitter::new(config.endpoint.clone(), Some(config.request_timeout()));
        Self::with_submitter(config, Arc::new(submitter))
    }

    pub fn with_submitter(config: RsvpConfig, submitter: Arc<dyn FormSubmitter>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let controller = FormController::new(
            FormSurface::new(&FieldId::ALL, "Submit RSVP"),
            config.controller_settings(),
        );
        Self {
            controller,
            config,
            submitter,
            outcome_tx,
            outcome_rx,
            scroll_offset: 0,
            terminal_size: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Feed an event to the controller and send anything it hands back
    fn dispatch(&mut self, event: FormEvent) {
        if let Some(values) = self.controller.handle(event) {
            self.spawn_submission(values);
        }
        if let Some(target) = self.controller.presenter_mut().take_scroll_target() {
            self.ensure_row_visible(target as usize);
        }
    }

    /// Run the request off the UI loop; the outcome comes back through the channel
    fn spawn_submission(&self, values: RsvpValues) {
        let submitter = Arc::clone(&self.submitter);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = submitter.submit(values).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("App closed before the submission finished");
            }
        });
    }

    /// Deliver finished submissions and expire the success overlay
    pub fn tick(&mut self, now: Instant) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.dispatch(FormEvent::SubmissionFinished { outcome, at: now });
        }
        self.dispatch(FormEvent::Tick(now));
    }

    pub fn submit(&mut self) {
        self.dispatch(FormEvent::SubmitIntent);
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // The alert blocks everything until acknowledged
        if self.controller.presenter().alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.controller.presenter_mut().dismiss_alert();
            }
            return;
        }

        if self.controller.is_showing_success() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dispatch(FormEvent::DismissSuccess);
            }
            return;
        }

        let form = self.controller.form();
        let active = form.active_field_id();
        let on_submit_row = form.is_submit_row_active();
        let choice = active.filter(|id| form.field(*id).is_choice());
        let has_command_modifier =
            key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Char('s') if key.modifiers.intersects(SUBMIT_MODIFIERS) => {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down => self.move_focus(FormEvent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(FormEvent::FocusPrev),
            KeyCode::PageDown => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-1),
            KeyCode::Esc if self.controller.phase() == SubmissionPhase::Idle => self.quit = true,
            KeyCode::Esc => {
                tracing::debug!("Esc ignored while {}", self.controller.phase().label());
            }
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter => {
                if active == Some(FieldId::Notes) {
                    self.dispatch(FormEvent::Input {
                        field: FieldId::Notes,
                        text: "\n".to_string(),
                    });
                } else {
                    self.move_focus(FormEvent::FocusNext);
                }
            }
            KeyCode::Left => {
                if let Some(field) = choice {
                    self.dispatch(FormEvent::SelectPrev(field));
                }
            }
            KeyCode::Right => {
                if let Some(field) = choice {
                    self.dispatch(FormEvent::SelectNext(field));
                }
            }
            KeyCode::Char(c) if !has_command_modifier => match (choice, active) {
                (Some(field), _) => match c {
                    ' ' => self.dispatch(FormEvent::SelectNext(field)),
                    'y' | 'Y' => self.dispatch(FormEvent::Select { field, index: 0 }),
                    'n' | 'N' => self.dispatch(FormEvent::Select { field, index: 1 }),
                    _ => {}
                },
                (None, Some(field)) => self.dispatch(FormEvent::Input {
                    field,
                    text: c.to_string(),
                }),
                (None, None) => {}
            },
            KeyCode::Backspace => {
                if let Some(field) = active {
                    self.dispatch(FormEvent::Backspace(field));
                }
            }
            _ => {}
        }
    }

    /// Handle a bracketed paste into the focused field
    pub fn handle_paste(&mut self, text: &str) {
        if self.controller.presenter().alert.is_some() || self.controller.is_showing_success() {
            return;
        }
        let form = self.controller.form();
        let Some(field) = form.active_field_id() else {
            return;
        };
        if form.field(field).is_choice() {
            return;
        }
        let text = if form.field(field).is_multiline {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], " ")
        };
        self.dispatch(FormEvent::Input { field, text });
    }

    /// Handle mouse clicks and wheel scrolling
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.controller.presenter().alert.is_some() {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.controller.is_showing_success() {
                    self.dispatch(FormEvent::DismissSuccess);
                    return;
                }
                let Some(row) = row_at(self, mouse.row) else {
                    return;
                };
                if row == SUBMIT_ROW {
                    self.move_focus(FormEvent::Focus(None));
                    self.submit();
                    return;
                }
                let Some(field) = FieldId::ALL.get(row).copied() else {
                    return;
                };
                self.move_focus(FormEvent::Focus(Some(field)));
                if let Some(index) = option_at(self.controller.form().field(field), mouse.column)
                {
                    self.dispatch(FormEvent::Select { field, index });
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(1),
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            _ => {}
        }
    }

    fn move_focus(&mut self, event: FormEvent) {
        self.dispatch(event);
        self.ensure_row_visible(self.controller.form().active_field_index);
    }

    /// Scroll by whole rows; suspended while the success overlay is up
    fn scroll_by(&mut self, delta: isize) {
        if self.controller.presenter().scroll_locked {
            return;
        }
        let last = row_heights(self).len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(last);
    }

    /// Adjust the scroll offset so the given row is fully on screen when possible
    fn ensure_row_visible(&mut self, row: usize) {
        if row < self.scroll_offset {
            self.scroll_offset = row;
            return;
        }
        let Some(viewport) = self.terminal_size.map(|(h, _)| form_viewport_height(h)) else {
            return;
        };
        let heights = row_heights(self);
        while self.scroll_offset < row
            && heights[self.scroll_offset..=row.min(heights.len() - 1)]
                .iter()
                .sum::<u16>()
                > viewport
        {
            self.scroll_offset += 1;
        }
    }
}
