use tracing::{debug, trace};

use super::DashboardState;
use crate::telemetry::TelemetrySample;

impl DashboardState {
    /// Generate one sample and apply it to KPIs, table and chart.
    pub fn tick(&mut self) -> &TelemetrySample {
        let sample = self.generator.generate();
        self.renderer.render(&sample, self.generator.as_ref());
        self.ticks += 1;
        trace!("[{}] tick {} -> sample {}", self.panel_id, self.ticks, sample.sequence);
        self.last_sample.insert(sample)
    }

    /// Handle a timer tick. Ticks from a cancelled or replaced source, or
    /// for a disposed panel, are dropped.
    pub fn on_tick(&mut self, generation: u64) -> bool {
        if self.disposed || !self.timer.accepts(generation) {
            debug!("[{}] dropping stale tick (generation {})", self.panel_id, generation);
            return false;
        }
        self.tick();
        true
    }
}
