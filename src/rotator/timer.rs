use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::rotator::RotatorError;
use crate::ui::events::AppEvent;

pub const DEFAULT_FACT_INTERVAL: Duration = Duration::from_millis(5000);

/// Handle to the running fact timer.
///
/// The task is aborted when the handle is stopped or dropped, so a timer
/// cannot outlive the session that started it.
#[derive(Debug)]
pub struct FactTimer {
    task: JoinHandle<()>,
    interval: Duration,
}

impl FactTimer {
    /// Spawn the periodic tick task.
    ///
    /// The first tick is delivered one full `interval` after this call.
    /// Ticks that fall behind (a stalled event loop) are delivered in a burst
    /// rather than skipped.
    ///
    /// Fails with [`RotatorError::ConfigurationError`] when there is nothing
    /// to rotate through or the interval is zero.
    pub fn start(
        interval: Duration,
        fact_count: usize,
        events: UnboundedSender<AppEvent>,
    ) -> Result<Self, RotatorError> {
        if fact_count == 0 {
            return Err(RotatorError::ConfigurationError {
                message: "fact list is empty".to_string(),
            });
        }
        if interval.is_zero() {
            return Err(RotatorError::ConfigurationError {
                message: "interval must be greater than zero".to_string(),
            });
        }
        let runtime = Handle::try_current().map_err(|_| RotatorError::NoRuntime)?;

        let first_tick = Instant::now() + interval;
        let task = runtime.spawn(async move {
            let mut ticker = time::interval_at(first_tick, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                ticker.tick().await;
                tracing::trace!("fact timer tick");
                if events.send(AppEvent::FactTick).is_err() {
                    // Event loop is gone.
                    break;
                }
            }
        });

        tracing::debug!(
            interval_ms = interval.as_millis() as u64,
            fact_count,
            "Fact timer started"
        );
        Ok(Self { task, interval })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Cancel the timer. Consumes the handle, so it can only happen once.
    pub fn stop(self) {
        tracing::debug!("Fact timer stopped");
    }
}

impl Drop for FactTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
