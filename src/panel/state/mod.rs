mod controls;
mod dispose;
mod mount;
mod tick;

use uuid::Uuid;

use super::renderer::LiveRenderer;
use super::timer::TimerController;
use crate::telemetry::{SampleGenerator, TelemetrySample};

/// Everything one mounted panel owns: its generator, renderer (and through
/// it the chart), and its timer.
///
/// Created by [`DashboardState::mount`] and torn down with
/// [`DashboardState::dispose`] before the panel is replaced.
#[derive(Debug)]
pub struct DashboardState {
    pub id: Uuid,
    pub panel_id: String,
    pub title: String,
    generator: Box<dyn SampleGenerator>,
    renderer: LiveRenderer,
    timer: TimerController,
    interval_options_ms: Vec<u64>,
    last_sample: Option<TelemetrySample>,
    ticks: u64,
    disposed: bool,
}

impl DashboardState {
    pub fn renderer(&self) -> &LiveRenderer {
        &self.renderer
    }

    pub fn timer(&self) -> &TimerController {
        &self.timer
    }

    pub fn generator(&self) -> &dyn SampleGenerator {
        self.generator.as_ref()
    }

    pub fn last_sample(&self) -> Option<&TelemetrySample> {
        self.last_sample.as_ref()
    }

    /// Ticks rendered since mount.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
