use std::time::Duration;

use tracing::info;

use super::DashboardState;
use crate::panel::timer::TimerState;

impl DashboardState {
    /// Pause when running, resume at the recorded interval when paused.
    pub fn toggle_run(&mut self) -> TimerState {
        let state = self.timer.toggle();
        info!("[{}] {:?}", self.panel_id, state);
        state
    }

    pub fn set_interval(&mut self, interval: Duration) {
        info!("[{}] interval -> {}ms", self.panel_id, interval.as_millis());
        self.timer.set_interval(interval);
    }

    /// Move the interval selector one option up (`slower`) or down.
    ///
    /// An interval that is not one of the options snaps to the nearest one
    /// in the requested direction.
    pub fn step_interval(&mut self, slower: bool) -> Duration {
        let current = self.timer.interval().as_millis() as u64;
        let mut options = self.interval_options_ms.clone();
        options.sort_unstable();
        options.dedup();

        let next = if slower {
            options.iter().copied().find(|&ms| ms > current)
        } else {
            options.iter().rev().copied().find(|&ms| ms < current)
        };

        if let Some(ms) = next {
            self.set_interval(Duration::from_millis(ms));
        }
        self.timer.interval()
    }

    /// Drop all table rows and chart points.
    pub fn clear(&mut self) {
        info!("[{}] clearing table and chart", self.panel_id);
        self.renderer.clear();
    }
}
