use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{TickScheduler, TickSource};

#[derive(Debug, Default)]
struct ScheduleLog {
    active: Vec<(u64, Duration)>,
    armed_total: usize,
    cancelled_total: usize,
}

/// Scheduler that never fires on its own; the caller drives ticks.
///
/// Clones share one log, so a clone kept outside the timer can observe what
/// has been armed and cancelled.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    log: Arc<Mutex<ScheduleLog>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_log<T>(&self, f: impl FnOnce(&mut ScheduleLog) -> T) -> T {
        let mut log = self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut log)
    }

    pub fn active_sources(&self) -> usize {
        self.with_log(|log| log.active.len())
    }

    pub fn active_interval(&self) -> Option<Duration> {
        self.with_log(|log| log.active.last().map(|(_, interval)| *interval))
    }

    pub fn armed_total(&self) -> usize {
        self.with_log(|log| log.armed_total)
    }

    pub fn cancelled_total(&self) -> usize {
        self.with_log(|log| log.cancelled_total)
    }
}

impl TickScheduler for ManualScheduler {
    fn arm(&mut self, interval: Duration, generation: u64) -> TickSource {
        self.with_log(|log| {
            log.active.push((generation, interval));
            log.armed_total += 1;
        });
        TickSource::new(generation, interval, None)
    }

    fn cancel(&mut self, source: TickSource) {
        let generation = source.generation();
        self.with_log(|log| {
            log.active.retain(|(g, _)| *g != generation);
            log.cancelled_total += 1;
        });
        source.abort();
    }
}
