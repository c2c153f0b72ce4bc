//! Keyboard-driven flow through the app shell with a live submission worker.

mod common;

use common::{StubOutcome, StubSubmitter};
use contactform::form::{ContactSubmission, FieldId};
use contactform::ui::app::{App, UiCommand};
use contactform::ui::events::AppEvent;
use contactform::ui::form::{FocusTarget, SubmitStatus};
use contactform::ui::input::handle_key;
use contactform::ui::screen::ScreenState;
use contactform::ui::worker::run_submission_worker;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::sync::mpsc as std_mpsc;
use std::time::Duration;
use tokio::sync::mpsc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, key(KeyCode::Char(ch)));
    }
}

fn tab(app: &mut App) {
    handle_key(app, key(KeyCode::Tab));
}

/// Fill every required field from the keyboard, ending on the submit button.
fn fill_form(app: &mut App) {
    type_text(app, "Ada Lovelace");
    tab(app);
    type_text(app, "ada@example.com");
    tab(app);
    type_text(app, "(123) 456-7890");
    tab(app);
    type_text(app, "12 St James's Square");
    tab(app);
    handle_key(app, key(KeyCode::Right));
    tab(app);
    type_text(app, "1815-12-10");
    tab(app);
    handle_key(app, key(KeyCode::Char(' ')));
    tab(app);
    type_text(app, "Lovely form");
    tab(app);
}

/// App wired to a worker running `stub`; returns the outcome channel.
fn wired_app(stub: StubSubmitter) -> (App, std_mpsc::Receiver<AppEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<UiCommand>(4);
    let (event_tx, event_rx) = std_mpsc::channel();
    tokio::spawn(run_submission_worker(stub, command_rx, event_tx));

    let mut app = App::new();
    app.set_command_sender(command_tx);
    (app, event_rx)
}

fn wait_for_settle(app: &mut App, events: &std_mpsc::Receiver<AppEvent>) {
    match events.recv_timeout(Duration::from_secs(5)) {
        Ok(AppEvent::SubmissionSettled { delivered }) => app.on_submission_settled(delivered),
        Ok(_) => panic!("unexpected event from worker"),
        Err(err) => panic!("worker never settled: {err}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_successful_submission_shows_confirmation_then_blank_form() {
    let stub = StubSubmitter::new(StubOutcome::Deliver);
    let (mut app, events) = wired_app(stub.clone());

    fill_form(&mut app);
    assert_eq!(app.form().focus, FocusTarget::SubmitButton);
    assert!(app.form().submission.gender.is_some());

    handle_key(&mut app, key(KeyCode::Enter));
    assert!(app.form().in_flight);

    wait_for_settle(&mut app, &events);
    assert_eq!(stub.calls(), 1);
    assert_eq!(app.screen(), ScreenState::Confirmation);
    assert_eq!(app.form().submission, ContactSubmission::default());

    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.screen(), ScreenState::Form);
    assert_eq!(app.form().status, SubmitStatus::Idle);
    assert_eq!(app.form().focus, FocusTarget::Field(FieldId::FullName));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failed_submission_stays_on_form_with_data() {
    let stub = StubSubmitter::new(StubOutcome::Fail);
    let (mut app, events) = wired_app(stub.clone());

    fill_form(&mut app);
    handle_key(&mut app, key(KeyCode::Enter));
    wait_for_settle(&mut app, &events);

    assert_eq!(stub.calls(), 1);
    assert_eq!(app.screen(), ScreenState::Form);
    assert_eq!(app.form().status, SubmitStatus::Error);
    assert_eq!(app.form().submission.full_name, "Ada Lovelace");
    assert_eq!(app.form().submission.phone, "(123) 456-7890");
    assert!(!app.form().in_flight);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_invalid_form_is_never_queued() {
    let stub = StubSubmitter::new(StubOutcome::Deliver);
    let (mut app, events) = wired_app(stub.clone());

    type_text(&mut app, "Ada");
    for _ in 0..8 {
        tab(&mut app);
    }
    handle_key(&mut app, key(KeyCode::Enter));

    assert!(!app.form().in_flight);
    assert_eq!(app.form().status, SubmitStatus::Error);
    assert!(app.form().errors.contains(FieldId::Email));
    assert!(events.recv_timeout(Duration::from_millis(200)).is_err());
    assert_eq!(stub.calls(), 0);
}
