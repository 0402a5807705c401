//! One dashboard panel: slots, renderer, chart, timer and their owner.

pub mod chart;
pub mod loader;
pub mod renderer;
pub mod slots;
pub mod state;
pub mod timer;

pub use chart::{ChartFrame, ChartHandle, TerminalChart};
pub use loader::PanelLoader;
pub use renderer::{KpiCard, LiveRenderer, TableRow};
pub use slots::ResolvedSlots;
pub use state::DashboardState;
pub use timer::{ManualScheduler, TickScheduler, TimerController, TimerState, TokioTickScheduler};

/// What occupies a panel's area after activation.
#[derive(Debug)]
pub enum PanelView {
    Mounted(DashboardState),
    /// Initialization aborted; `banner` is shown in place of the panel.
    Failed { panel_id: String, banner: String },
    /// The view could not be fetched.
    LoadFailed { panel_id: String, message: String },
}

impl PanelView {
    pub fn panel_id(&self) -> &str {
        match self {
            PanelView::Mounted(state) => &state.panel_id,
            PanelView::Failed { panel_id, .. } | PanelView::LoadFailed { panel_id, .. } => panel_id,
        }
    }

    pub fn state(&self) -> Option<&DashboardState> {
        match self {
            PanelView::Mounted(state) => Some(state),
            _ => None,
        }
    }

    pub fn state_mut(&mut self) -> Option<&mut DashboardState> {
        match self {
            PanelView::Mounted(state) => Some(state),
            _ => None,
        }
    }

    pub fn dispose(&mut self) {
        if let PanelView::Mounted(state) = self {
            state.dispose();
        }
    }
}
