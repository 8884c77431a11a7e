use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::shutdown::ShutdownHandle;

/// Poll timeout of the input thread; bounds how long shutdown takes to be
/// noticed.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Everything the event loop reacts to, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// One period of the fact timer elapsed.
    FactTick,
    /// SIGINT or input stream closed.
    Shutdown,
}

/// The single queue feeding the event loop.
pub struct EventQueue {
    rx: UnboundedReceiver<AppEvent>,
    tx: UnboundedSender<AppEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { rx, tx }
    }

    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Start the thread that turns terminal input into events.
    ///
    /// The thread only enqueues; it exits once `shutdown` is signaled or the
    /// queue is dropped.
    pub fn spawn_input_reader(&self, shutdown: ShutdownHandle) -> std::io::Result<()> {
        let tx = self.sender();
        thread::Builder::new()
            .name("input-reader".to_string())
            .spawn(move || input_loop(tx, shutdown))?;
        Ok(())
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

fn input_loop(tx: UnboundedSender<AppEvent>, shutdown: ShutdownHandle) {
    loop {
        if shutdown.is_shutting_down() {
            break;
        }

        match event::poll(INPUT_POLL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                tracing::error!(error = %err, "Input poll failed");
                let _ = tx.send(AppEvent::Shutdown);
                break;
            }
        }

        let app_event = match event::read() {
            Ok(Event::Key(key)) => AppEvent::Key(key),
            Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
            Ok(_) => continue,
            Err(err) => {
                tracing::error!(error = %err, "Input read failed");
                let _ = tx.send(AppEvent::Shutdown);
                break;
            }
        };

        if tx.send(app_event).is_err() {
            break;
        }
    }
    tracing::debug!("Input reader exited");
}
