use crate::submit::Submitter;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::run_submission_worker;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Queue depth for submissions. The in-flight flag allows one at a time.
const COMMAND_QUEUE: usize = 4;

/// Run the form UI until the user quits.
///
/// The UI loop runs on the calling thread; the outbound request runs on
/// `runtime` so the interface keeps redrawing while it is out.
pub fn run<S: Submitter>(submitter: S, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(run_submission_worker(submitter, command_rx, events.sender()));

    let mut app = App::new();
    app.set_command_sender(command_tx);
    tracing::info!("Contact form UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {
                // Redrawn at the top of the loop.
            }
            Ok(AppEvent::SubmissionSettled { delivered }) => {
                app.on_submission_settled(delivered);
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Contact form UI stopped");
    Ok(())
}
