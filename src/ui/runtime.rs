use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::form::contact::HttpContactTransport;
use crate::form::newsletter::SignupStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the client event loop until quit.
///
/// Cooperative single-threaded scheduling: each event is handled to
/// completion before the next is read. The only async work is the
/// contact relay call, which reports back as an event.
pub fn run(runtime: tokio::runtime::Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(
        runtime,
        events.sender(),
        Arc::new(HttpContactTransport::new()),
        SignupStore::open_default(),
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::ContactResult(outcome)) => app.on_contact_result(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
