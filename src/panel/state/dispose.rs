use tracing::info;

use super::DashboardState;

impl DashboardState {
    /// Stop the timer and destroy the chart. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.timer.stop();
        self.renderer.destroy_chart();
        self.disposed = true;
        info!("Disposed panel '{}' ({}) after {} ticks", self.panel_id, self.id, self.ticks);
    }
}
