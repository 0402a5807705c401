use std::time::Duration;

use tracing::info;
use uuid::Uuid;

use super::DashboardState;
use crate::config::{PanelConfig, ViewDefinition};
use crate::error::Result;
use crate::panel::chart::{ChartHandle, TerminalChart};
use crate::panel::renderer::LiveRenderer;
use crate::panel::slots::ResolvedSlots;
use crate::panel::timer::{TickScheduler, TimerController};
use crate::telemetry::SampleGenerator;
use crate::util::rolling::RollingSeries;

impl DashboardState {
    /// Resolve the view's slots, build the renderer and chart, render one
    /// sample straight away and arm the timer.
    ///
    /// Fails without side effects when a required surface is missing.
    pub fn mount(
        panel: &PanelConfig,
        view: &ViewDefinition,
        generator: Box<dyn SampleGenerator>,
        interval_options_ms: &[u64],
        scheduler_for: impl FnOnce(Uuid) -> Box<dyn TickScheduler>,
    ) -> Result<Self> {
        let slots = ResolvedSlots::resolve(panel, view)?;
        let id = Uuid::new_v4();

        let chart = slots.chart.as_ref().map(|surface| {
            Box::new(TerminalChart::from_config(surface, &panel.chart, panel.chart_capacity))
                as Box<dyn ChartHandle>
        });
        let series = RollingSeries::new(panel.series_metrics(), panel.chart_capacity);
        let renderer = LiveRenderer::new(&slots, generator.as_ref(), panel.table_capacity, series, chart);

        let interval = Duration::from_millis(panel.default_interval_ms);
        let timer = TimerController::new(scheduler_for(id), interval);

        let mut state = Self {
            id,
            panel_id: panel.id.clone(),
            title: panel.title.clone(),
            generator,
            renderer,
            timer,
            interval_options_ms: interval_options_ms.to_vec(),
            last_sample: None,
            ticks: 0,
            disposed: false,
        };

        info!("Mounted panel '{}' ({})", state.panel_id, state.id);
        state.tick();
        state.timer.start(None);

        Ok(state)
    }
}
