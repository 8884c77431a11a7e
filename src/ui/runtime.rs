use std::io::Stdout;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Config;
use crate::error::AppError;
use crate::session::Session;
use crate::shutdown::{spawn_signal_listener, ShutdownHandle};
use crate::ui::events::EventQueue;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run one session to completion on a current-thread runtime.
///
/// Startup errors (such as an empty fact list) are returned before the
/// terminal is switched to raw mode.
pub fn run(config: Config) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_session(config))
}

async fn run_session(config: Config) -> Result<(), AppError> {
    let mut events = EventQueue::new();
    let mut session = Session::mount(&config, events.sender())?;
    let shutdown = ShutdownHandle::new();
    spawn_signal_listener(events.sender(), shutdown.clone());

    let (mut terminal, guard) = setup_terminal()?;
    let result = match events.spawn_input_reader(shutdown.clone()) {
        Ok(()) => event_loop(&mut terminal, &mut events, &mut session).await,
        Err(err) => Err(err.into()),
    };

    shutdown.signal();
    session.unmount();
    drop(guard);
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    events: &mut EventQueue,
    session: &mut Session,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|frame| draw(frame, session.app()))?;
        if session.app().should_quit() {
            break;
        }

        let Some(event) = events.next().await else {
            break;
        };
        session.apply(event);
    }
    Ok(())
}
