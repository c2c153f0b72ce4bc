use crate::form::ContactSubmission;
use crate::ui::form::{FormContainer, FormIntent, FormOutcome, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::screen::{ScreenIntent, ScreenReducer, ScreenState};
use tokio::sync::mpsc;

/// Work the UI thread hands to the submission worker.
#[derive(Debug)]
pub enum UiCommand {
    Submit(ContactSubmission),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The shell: which screen is up, the form container, and the channel to
/// the submission worker.
pub struct App {
    should_quit: bool,
    /// Form vs. confirmation (MVI pattern).
    screen: ScreenState,
    form: FormContainer,
    command_sender: Option<UiCommandSender>,
    /// Drives the spinner on the submit button.
    animation_tick: u8,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            screen: ScreenState::default(),
            form: FormContainer::new(),
            command_sender: None,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn form(&self) -> &FormState {
        self.form.state()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn on_tick(&mut self) {
        if self.form.state().in_flight {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Dispatch an intent to the form container. A submit that passes
    /// validation is queued for the worker.
    pub fn dispatch_form(&mut self, intent: FormIntent) {
        let is_submit = matches!(intent, FormIntent::Submit);
        match self.form.dispatch(intent) {
            Some(record) => {
                tracing::info!("Form valid, queueing submission");
                if !self.send_command(UiCommand::Submit(record)) {
                    // Nothing will ever settle this request; fail it now.
                    self.on_submission_settled(false);
                }
            }
            None if is_submit && !self.form.state().errors.is_empty() => {
                tracing::debug!(
                    errors = self.form.state().errors.len(),
                    "Submit blocked by validation"
                );
            }
            None => {}
        }
    }

    /// The worker reported back. On success the form is already blank and
    /// the confirmation screen comes up.
    pub fn on_submission_settled(&mut self, delivered: bool) {
        if let Some(FormOutcome::Submitted) = self.form.settle(delivered) {
            self.dispatch_screen(ScreenIntent::ShowConfirmation);
        }
    }

    /// The confirmation screen's one action: a blank form again.
    pub fn back_to_form(&mut self) {
        self.dispatch_screen(ScreenIntent::BackToForm);
        self.form.dispatch(FormIntent::Reset);
        self.animation_tick = 0;
    }

    fn dispatch_screen(&mut self, intent: ScreenIntent) {
        dispatch_mvi!(self, screen, ScreenReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::warn!("No submission worker attached");
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Submission could not be queued: {}", err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldId;
    use crate::ui::form::SubmitStatus;

    #[test]
    fn tick_only_animates_while_in_flight() {
        let mut app = App::new();
        app.on_tick();
        assert_eq!(app.animation_tick(), 0);
    }

    #[test]
    fn valid_submit_without_worker_fails_immediately() {
        let mut app = App::new();
        for (field, value) in [
            (FieldId::FullName, "Ada Lovelace"),
            (FieldId::Email, "ada@example.com"),
            (FieldId::Phone, "1234567890"),
            (FieldId::DateOfBirth, "1815-12-10"),
            (FieldId::Gender, "Female"),
        ] {
            app.dispatch_form(FormIntent::Edit {
                field,
                value: value.to_string(),
            });
        }
        app.dispatch_form(FormIntent::Submit);

        assert_eq!(app.screen(), ScreenState::Form);
        assert_eq!(app.form().status, SubmitStatus::Error);
        assert!(!app.form().in_flight);
        assert_eq!(app.form().submission.full_name, "Ada Lovelace");
    }

    #[test]
    fn stale_settle_does_not_switch_screen() {
        let mut app = App::new();
        app.on_submission_settled(true);
        assert_eq!(app.screen(), ScreenState::Form);
    }
}
