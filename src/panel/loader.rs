use tracing::{info, warn};
use uuid::Uuid;

use super::state::DashboardState;
use super::timer::TickScheduler;
use super::PanelView;
use crate::config::{PanelConfig, ViewDefinition};
use crate::error::DashboardError;
use crate::telemetry::{create_generator, SampleGenerator};

/// Runs a panel's initialization on activation: fetch its view, then mount.
pub struct PanelLoader;

impl PanelLoader {
    pub fn load(
        panel: &PanelConfig,
        interval_options_ms: &[u64],
        scheduler_for: impl FnOnce(Uuid) -> Box<dyn TickScheduler>,
    ) -> PanelView {
        match create_generator(&panel.generator) {
            Ok(generator) => Self::load_with_generator(panel, generator, interval_options_ms, scheduler_for),
            Err(e) => Self::failed(panel, e),
        }
    }

    pub fn load_with_generator(
        panel: &PanelConfig,
        generator: Box<dyn SampleGenerator>,
        interval_options_ms: &[u64],
        scheduler_for: impl FnOnce(Uuid) -> Box<dyn TickScheduler>,
    ) -> PanelView {
        let view = match Self::fetch_view(panel) {
            Ok(view) => view,
            Err(message) => {
                warn!("[{}] {}", panel.id, message);
                return PanelView::LoadFailed {
                    panel_id: panel.id.clone(),
                    message,
                };
            }
        };

        match DashboardState::mount(panel, &view, generator, interval_options_ms, scheduler_for) {
            Ok(state) => PanelView::Mounted(state),
            Err(e) => Self::failed(panel, e),
        }
    }

    fn fetch_view(panel: &PanelConfig) -> Result<ViewDefinition, String> {
        match &panel.view {
            None => Ok(ViewDefinition::builtin(panel)),
            Some(path) => {
                info!("[{}] loading view {:?}", panel.id, path);
                ViewDefinition::from_file(path).map_err(|e| e.to_string())
            }
        }
    }

    fn failed(panel: &PanelConfig, error: DashboardError) -> PanelView {
        let banner = match &error {
            DashboardError::MissingSurface { slot, .. } => format!("Surface #{} NOT FOUND in view.", slot),
            other => other.to_string(),
        };
        warn!("[{}] panel failed to initialize: {}", panel.id, error);
        PanelView::Failed {
            panel_id: panel.id.clone(),
            banner,
        }
    }
}
