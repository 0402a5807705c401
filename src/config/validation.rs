use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use super::{DashboardConfig, PanelConfig, SlotKind};
use crate::telemetry::{create_seeded_generator, supported_generators};

pub const MIN_INTERVAL_MS: u64 = 100;

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub error: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    fn new(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error: error.into(),
        }
    }
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &DashboardConfig) -> Result<(), ValidationError> {
        if config.panels.is_empty() {
            return Err(ValidationError::new("panels", "At least one panel is required"));
        }

        let mut seen = HashSet::new();
        for panel in &config.panels {
            if !seen.insert(panel.id.as_str()) {
                return Err(ValidationError::new(
                    "panels.id",
                    format!("Duplicate panel id: {}", panel.id),
                ));
            }
            Self::validate_panel(panel)?;
        }

        if let Some(ms) = config.interval_options_ms.iter().find(|&&ms| ms < MIN_INTERVAL_MS) {
            return Err(ValidationError::new(
                "interval_options_ms",
                format!("{}ms is below the {}ms minimum", ms, MIN_INTERVAL_MS),
            ));
        }

        debug!("Validated {} panels", config.panels.len());
        Ok(())
    }

    fn validate_panel(panel: &PanelConfig) -> Result<(), ValidationError> {
        let field = |name: &str| format!("{}.{}", panel.id, name);

        if !supported_generators().contains(&panel.generator.as_str()) {
            return Err(ValidationError::new(
                field("generator"),
                format!(
                    "Unknown generator: {}. Must be one of: {:?}",
                    panel.generator,
                    supported_generators()
                ),
            ));
        }

        Self::validate_metrics(panel)?;

        if panel.table_capacity == 0 {
            return Err(ValidationError::new(field("table_capacity"), "Must be greater than 0"));
        }

        if panel.chart_capacity == 0 {
            return Err(ValidationError::new(field("chart_capacity"), "Must be greater than 0"));
        }

        if panel.default_interval_ms < MIN_INTERVAL_MS {
            return Err(ValidationError::new(
                field("default_interval_ms"),
                format!("Must be at least {}ms", MIN_INTERVAL_MS),
            ));
        }

        let mut slot_ids = HashSet::new();
        for slot in &panel.slots {
            if !slot_ids.insert(slot.id.as_str()) {
                return Err(ValidationError::new(
                    field("slots"),
                    format!("Duplicate slot id: {}", slot.id),
                ));
            }
            if slot.kind == SlotKind::Kpi && slot.metric.is_none() {
                return Err(ValidationError::new(
                    field("slots"),
                    format!("KPI slot '{}' needs a metric", slot.id),
                ));
            }
        }

        let chart_slots = panel.slots.iter().filter(|s| s.kind == SlotKind::Chart).count();
        if chart_slots != 1 {
            return Err(ValidationError::new(
                field("slots"),
                format!("Expected exactly one chart slot, found {}", chart_slots),
            ));
        }

        if panel.slots.iter().filter(|s| s.kind == SlotKind::Table).count() > 1 {
            return Err(ValidationError::new(field("slots"), "At most one table slot is allowed"));
        }

        Ok(())
    }

    /// Every KPI and chart series must name a metric the generator produces.
    fn validate_metrics(panel: &PanelConfig) -> Result<(), ValidationError> {
        let generator = create_seeded_generator(&panel.generator, 0)
            .map_err(|e| ValidationError::new(format!("{}.generator", panel.id), e.to_string()))?;
        let known = || generator.metrics().iter().map(|m| m.key).collect::<Vec<_>>();

        let kpi_metrics = panel
            .slots
            .iter()
            .filter_map(|slot| slot.metric.as_deref().map(|metric| (format!("slots.{}", slot.id), metric)));
        let series_metrics = panel
            .chart
            .series
            .iter()
            .map(|series| ("chart.series".to_string(), series.metric.as_str()));

        for (field, metric) in kpi_metrics.chain(series_metrics) {
            if generator.metric(metric).is_none() {
                return Err(ValidationError::new(
                    format!("{}.{}", panel.id, field),
                    format!(
                        "Unknown metric '{}' for generator {}. Must be one of: {:?}",
                        metric,
                        panel.generator,
                        known()
                    ),
                ));
            }
        }

        Ok(())
    }
}
