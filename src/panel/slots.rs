use tracing::debug;

use crate::config::{PanelConfig, SlotKind, ViewDefinition};
use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiSlot {
    pub id: String,
    pub metric: String,
    pub present: bool,
}

/// Display slots of one panel, resolved against its view once at mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlots {
    pub kpis: Vec<KpiSlot>,
    /// Table body id, `None` when the view has no table.
    pub table: Option<String>,
    /// Chart surface id, `None` when the view has no (optional) chart.
    pub chart: Option<String>,
}

impl ResolvedSlots {
    pub fn resolve(panel: &PanelConfig, view: &ViewDefinition) -> Result<Self> {
        let provided = view.slot_set();
        let mut kpis = Vec::new();
        let mut table = None;
        let mut chart = None;

        for slot in &panel.slots {
            let present = provided.contains(slot.id.as_str());
            if !present {
                if slot.required {
                    return Err(DashboardError::MissingSurface {
                        panel: panel.id.clone(),
                        slot: slot.id.clone(),
                    });
                }
                debug!("[{}] optional slot '{}' not in view", panel.id, slot.id);
            }

            match slot.kind {
                SlotKind::Kpi => kpis.push(KpiSlot {
                    id: slot.id.clone(),
                    metric: slot.metric.clone().unwrap_or_default(),
                    present,
                }),
                SlotKind::Table if present => table = Some(slot.id.clone()),
                SlotKind::Chart if present => chart = Some(slot.id.clone()),
                SlotKind::Table | SlotKind::Chart => {}
            }
        }

        Ok(Self { kpis, table, chart })
    }

    pub fn present_kpis(&self) -> impl Iterator<Item = &KpiSlot> {
        self.kpis.iter().filter(|k| k.present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    #[test]
    fn test_builtin_view_resolves_everything() {
        let config = DashboardConfig::default();
        let panel = config.panel("hydraulic").unwrap();
        let slots = ResolvedSlots::resolve(panel, &ViewDefinition::builtin(panel)).unwrap();

        assert_eq!(slots.kpis.len(), 4);
        assert_eq!(slots.present_kpis().count(), 4);
        assert_eq!(slots.table.as_deref(), Some("rows"));
        assert_eq!(slots.chart.as_deref(), Some("liveChart"));
    }

    #[test]
    fn test_absent_optional_slots_are_tolerated() {
        let config = DashboardConfig::default();
        let panel = config.panel("electrical").unwrap();
        let view = ViewDefinition {
            slots: vec!["kpi-voltage".to_string(), "liveElecChart".to_string()],
        };
        let slots = ResolvedSlots::resolve(panel, &view).unwrap();

        assert_eq!(slots.kpis.len(), 5);
        let present: Vec<_> = slots.present_kpis().map(|k| k.id.as_str()).collect();
        assert_eq!(present, vec!["kpi-voltage"]);
        assert!(slots.table.is_none());
    }

    #[test]
    fn test_missing_required_surface() {
        let config = DashboardConfig::default();
        let panel = config.panel("electrical").unwrap();
        let view = ViewDefinition {
            slots: vec!["rows".to_string()],
        };
        let err = ResolvedSlots::resolve(panel, &view).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::MissingSurface { ref slot, .. } if slot == "liveElecChart"
        ));
    }
}
