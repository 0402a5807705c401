mod defaults;
mod validation;
mod view;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

pub use validation::{ConfigValidator, ValidationError};
pub use view::ViewDefinition;

use crate::error::Result;

pub const CONFIG_ENV_VAR: &str = "PLANT_MONITOR_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./config/dashboard.yml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub panels: Vec<PanelConfig>,
    /// Choices offered by the interval selector.
    #[serde(default = "defaults::interval_options_ms")]
    pub interval_options_ms: Vec<u64>,
    #[serde(default = "defaults::log_dir")]
    pub log_dir: PathBuf,
    #[serde(default = "defaults::db_path")]
    pub db_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    pub id: String,
    pub title: String,
    pub generator: String,
    pub table_capacity: usize,
    pub chart_capacity: usize,
    pub default_interval_ms: u64,
    /// View definition file; `None` uses the built-in view, which provides
    /// every slot listed in `slots`.
    #[serde(default)]
    pub view: Option<PathBuf>,
    pub slots: Vec<SlotConfig>,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Kpi,
    Table,
    Chart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConfig {
    pub id: String,
    pub kind: SlotKind,
    /// Metric shown by a KPI slot.
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub metric: String,
    pub label: String,
    #[serde(default = "defaults::series_color")]
    pub color: String,
    #[serde(default)]
    pub axis: AxisSide,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    pub series: Vec<SeriesConfig>,
    #[serde(default)]
    pub left_title: Option<String>,
    #[serde(default)]
    pub right_title: Option<String>,
}

impl DashboardConfig {
    /// Config from `$PLANT_MONITOR_CONFIG`, then `./config/dashboard.yml`,
    /// falling back to the built-in panels.
    pub fn load_default() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_or_default(&path)
    }

    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!("No config at {:?}, using built-in panels", path);
            Ok(Self::default())
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        info!("Loaded {} panels from {:?}", config.panels.len(), path);
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: DashboardConfig = serde_yaml::from_str(yaml)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    pub fn panel(&self, id: &str) -> Option<&PanelConfig> {
        self.panels.iter().find(|p| p.id == id)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            panels: vec![
                defaults::overview_panel(),
                defaults::hydraulic_panel(),
                defaults::electrical_panel(),
            ],
            interval_options_ms: defaults::interval_options_ms(),
            log_dir: defaults::log_dir(),
            db_path: defaults::db_path(),
        }
    }
}

impl PanelConfig {
    pub fn chart_slot(&self) -> Option<&SlotConfig> {
        self.slots.iter().find(|s| s.kind == SlotKind::Chart)
    }

    pub fn series_metrics(&self) -> Vec<String> {
        self.chart.series.iter().map(|s| s.metric.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_panels() {
        let config = DashboardConfig::default();
        assert!(ConfigValidator::validate(&config).is_ok());

        let ids: Vec<_> = config.panels.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["overview", "hydraulic", "electrical"]);

        let overview = config.panel("overview").unwrap();
        assert_eq!((overview.table_capacity, overview.chart_capacity), (12, 20));

        let hydraulic = config.panel("hydraulic").unwrap();
        assert_eq!((hydraulic.table_capacity, hydraulic.chart_capacity), (20, 28));
        assert_eq!(hydraulic.default_interval_ms, 1500);
        assert_eq!(hydraulic.series_metrics(), vec!["head", "flow", "efficiency"]);

        let electrical = config.panel("electrical").unwrap();
        assert_eq!(electrical.chart.series[1].axis, AxisSide::Right);
        assert!(electrical.chart_slot().is_some_and(|s| s.required));
    }

    #[test]
    fn test_parse_yaml_with_defaults() {
        let yaml = r#"
panels:
  - id: pumps
    title: "Pump House"
    generator: hydraulic
    table_capacity: 5
    chart_capacity: 8
    default_interval_ms: 1000
    slots:
      - { id: kpi-flow, kind: kpi, metric: flow }
      - { id: rows, kind: table }
      - { id: pumpChart, kind: chart, required: true }
    chart:
      series:
        - { metric: flow, label: "Flow (m³/s)" }
"#;
        let config = DashboardConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.interval_options_ms, vec![500, 1000, 1500, 3000]);
        let panel = config.panel("pumps").unwrap();
        assert!(panel.view.is_none());
        assert_eq!(panel.chart.series[0].axis, AxisSide::Left);
        assert_eq!(panel.chart.series[0].color, "cyan");
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load_or_default(&dir.path().join("absent.yml")).unwrap();
        assert_eq!(config.panels.len(), 3);
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        let yaml = r#"
panels:
  - id: broken
    title: Broken
    generator: hydraulic
    table_capacity: 0
    chart_capacity: 8
    default_interval_ms: 1000
    slots: []
    chart: { series: [] }
"#;
        assert!(DashboardConfig::from_yaml(yaml).is_err());
    }
}
