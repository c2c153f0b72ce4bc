use crate::form::ContactSubmission;
use crate::submit::{submit_contact, Submitter};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::reducer::FormReducer;
use crate::ui::form::state::{FormState, SubmitStatus};
use crate::ui::mvi::Reducer;

/// What the container reports to whoever hosts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// A submission was delivered. Emitted once per successful submission;
    /// the host switches to the confirmation view.
    Submitted,
}

/// Owns the form state and runs every change through [`FormReducer`].
///
/// The container never talks to the network itself: when a submit passes
/// validation, [`FormContainer::dispatch`] hands back the record to send,
/// and the host reports the result with [`FormContainer::settle`].
#[derive(Debug, Default)]
pub struct FormContainer {
    state: FormState,
}

impl FormContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Apply `intent`. Returns the record to deliver when this intent
    /// started a submission.
    pub fn dispatch(&mut self, intent: FormIntent) -> Option<ContactSubmission> {
        let was_in_flight = self.state.in_flight;
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
        if !was_in_flight && self.state.in_flight {
            return Some(self.state.submission.clone());
        }
        None
    }

    /// Record the adapter's outcome for the request in flight.
    pub fn settle(&mut self, delivered: bool) -> Option<FormOutcome> {
        let was_in_flight = self.state.in_flight;
        self.dispatch(FormIntent::SubmissionSettled { delivered });
        if was_in_flight && self.state.status == SubmitStatus::Success {
            return Some(FormOutcome::Submitted);
        }
        None
    }

    /// Full submit cycle against `submitter`, awaiting the request.
    ///
    /// Returns `None` when validation failed or a request was already out.
    pub async fn submit_with<S: Submitter>(&mut self, submitter: &S) -> Option<FormOutcome> {
        let record = self.dispatch(FormIntent::Submit)?;
        let delivered = submit_contact(submitter, &record).await;
        self.settle(delivered)
    }
}
