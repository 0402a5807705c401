//! Repeating tick source control for one panel.
//!
//! [`TimerController`] is a two-state machine (Stopped / Running) that keeps
//! at most one armed tick source. Each arming gets a fresh generation number;
//! ticks carry the generation they were armed with, and only the currently
//! armed generation is accepted, so a tick queued before `stop()` returned is
//! never applied.

mod manual;
mod tokio_scheduler;

use std::fmt::Debug;
use std::time::Duration;

use tokio::task::AbortHandle;
use tracing::{debug, info};

pub use manual::ManualScheduler;
pub use tokio_scheduler::TokioTickScheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running,
}

/// A live repeating tick registration.
#[derive(Debug)]
pub struct TickSource {
    generation: u64,
    interval: Duration,
    task: Option<AbortHandle>,
}

impl TickSource {
    pub fn new(generation: u64, interval: Duration, task: Option<AbortHandle>) -> Self {
        Self {
            generation,
            interval,
            task,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub(crate) fn abort(self) {
        if let Some(task) = self.task {
            task.abort();
        }
    }
}

/// Arms and cancels repeating tick sources.
pub trait TickScheduler: Debug + Send {
    fn arm(&mut self, interval: Duration, generation: u64) -> TickSource;
    fn cancel(&mut self, source: TickSource);
}

#[derive(Debug)]
pub struct TimerController {
    scheduler: Box<dyn TickScheduler>,
    source: Option<TickSource>,
    interval: Duration,
    generation: u64,
}

impl TimerController {
    /// Starts out Stopped with `interval` recorded.
    pub fn new(scheduler: Box<dyn TickScheduler>, interval: Duration) -> Self {
        Self {
            scheduler,
            source: None,
            interval,
            generation: 0,
        }
    }

    /// Arm a repeating tick at `interval` (or the recorded one). An already
    /// armed source is cancelled first.
    pub fn start(&mut self, interval: Option<Duration>) {
        self.stop();
        if let Some(interval) = interval {
            self.interval = interval;
        }
        self.generation += 1;
        self.source = Some(self.scheduler.arm(self.interval, self.generation));
        info!("Timer started: every {}ms (generation {})", self.interval.as_millis(), self.generation);
    }

    pub fn stop(&mut self) {
        if let Some(source) = self.source.take() {
            debug!("Timer stopped (generation {})", source.generation());
            self.scheduler.cancel(source);
        }
    }

    /// Re-arms at the new cadence when Running; only records it when Stopped.
    pub fn set_interval(&mut self, interval: Duration) {
        if self.is_running() {
            self.start(Some(interval));
        } else {
            self.interval = interval;
        }
    }

    pub fn toggle(&mut self) -> TimerState {
        if self.is_running() {
            self.stop();
        } else {
            self.start(None);
        }
        self.state()
    }

    pub fn state(&self) -> TimerState {
        if self.source.is_some() {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.source.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a tick from `generation` belongs to the armed source.
    pub fn accepts(&self, generation: u64) -> bool {
        self.source
            .as_ref()
            .is_some_and(|s| s.generation() == generation)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for TimerController {
    // an `AbortHandle` going out of scope does not abort its task
    fn drop(&mut self) {
        self.stop();
    }
}
