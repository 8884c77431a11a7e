//! One run of the page, from mount to unmount.

use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::rotator::{FactTimer, RotatorError};
use crate::ui::app::App;
use crate::ui::events::AppEvent;
use crate::ui::input::handle_key;

/// Session state plus the fact timer it owns.
///
/// Dropping a session without [`Session::unmount`] still cancels the timer.
pub struct Session {
    app: App,
    timer: FactTimer,
}

impl Session {
    /// Build fresh state from `config` and start the fact timer, which will
    /// deliver ticks through `events`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(config: &Config, events: UnboundedSender<AppEvent>) -> Result<Self, RotatorError> {
        let content = config.content.content_store();
        let timer = FactTimer::start(config.rotator.interval(), content.fact_count(), events)?;
        let app = App::new(content);
        tracing::info!(
            facts = app.content().fact_count(),
            breeds = app.content().breeds().len(),
            "Session mounted"
        );
        Ok(Self { app, timer })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Apply one queued event.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(&mut self.app, key),
            AppEvent::FactTick => self.app.on_fact_tick(),
            AppEvent::Resize(cols, rows) => {
                // The next draw picks up the new size.
                tracing::debug!(cols, rows, "Terminal resized");
            }
            AppEvent::Shutdown => self.app.request_quit(),
        }
    }

    pub fn unmount(self) {
        let Self { app, timer } = self;
        timer.stop();
        tracing::info!(likes = app.likes().get(), "Session unmounted");
    }
}
