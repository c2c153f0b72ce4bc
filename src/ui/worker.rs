//! Background task that performs the outbound request for the UI thread.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc;

use crate::submit::{submit_contact, Submitter};
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Serve [`UiCommand`]s until the UI drops its sender.
///
/// Each submission is awaited to completion; there is no cancellation.
/// The outcome goes back to the UI thread as
/// [`AppEvent::SubmissionSettled`].
pub async fn run_submission_worker<S: Submitter>(
    submitter: S,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Submit(record) => {
                let delivered = submit_contact(&submitter, &record).await;
                if events
                    .send(AppEvent::SubmissionSettled { delivered })
                    .is_err()
                {
                    tracing::trace!("Submission outcome dropped (UI gone)");
                    break;
                }
            }
        }
    }
    tracing::debug!("Submission worker stopped");
}
