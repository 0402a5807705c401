use std::path::PathBuf;

use super::{AxisSide, ChartConfig, PanelConfig, SeriesConfig, SlotConfig, SlotKind};
use crate::telemetry::{electrical, generic, hydraulic};

pub(super) const DEFAULT_INTERVAL_MS: u64 = 1500;

pub(super) fn interval_options_ms() -> Vec<u64> {
    vec![500, 1000, 1500, 3000]
}

pub(super) fn log_dir() -> PathBuf {
    PathBuf::from("./logs")
}

pub(super) fn db_path() -> PathBuf {
    PathBuf::from("./db/plant-monitor.db")
}

pub(super) fn series_color() -> String {
    "cyan".to_string()
}

fn kpi(id: &str, metric: &str) -> SlotConfig {
    SlotConfig {
        id: id.to_string(),
        kind: SlotKind::Kpi,
        metric: Some(metric.to_string()),
        required: false,
    }
}

fn table(id: &str) -> SlotConfig {
    SlotConfig {
        id: id.to_string(),
        kind: SlotKind::Table,
        metric: None,
        required: false,
    }
}

fn chart(id: &str) -> SlotConfig {
    SlotConfig {
        id: id.to_string(),
        kind: SlotKind::Chart,
        metric: None,
        required: true,
    }
}

fn series(metric: &str, label: &str, color: &str, axis: AxisSide) -> SeriesConfig {
    SeriesConfig {
        metric: metric.to_string(),
        label: label.to_string(),
        color: color.to_string(),
        axis,
    }
}

pub(super) fn overview_panel() -> PanelConfig {
    PanelConfig {
        id: "overview".to_string(),
        title: "Overview".to_string(),
        generator: generic::NAME.to_string(),
        table_capacity: 12,
        chart_capacity: 20,
        default_interval_ms: DEFAULT_INTERVAL_MS,
        view: None,
        slots: vec![
            kpi("water-level", generic::HEAD),
            kpi("flow-rate", generic::FLOW),
            kpi("turbine-output", generic::EFFICIENCY),
            table("data-body"),
            chart("liveChart"),
        ],
        chart: ChartConfig {
            series: vec![series(generic::FLOW, "Flow (m³/s)", "lightblue", AxisSide::Left)],
            left_title: Some("m³/s".to_string()),
            right_title: None,
        },
    }
}

pub(super) fn hydraulic_panel() -> PanelConfig {
    PanelConfig {
        id: "hydraulic".to_string(),
        title: "Hydraulic".to_string(),
        generator: hydraulic::NAME.to_string(),
        table_capacity: 20,
        chart_capacity: 28,
        default_interval_ms: DEFAULT_INTERVAL_MS,
        view: None,
        slots: vec![
            kpi("kpi-head", hydraulic::HEAD),
            kpi("kpi-flow", hydraulic::FLOW),
            kpi("kpi-eff", hydraulic::EFFICIENCY),
            kpi("kpi-press", hydraulic::PRESSURE),
            table("rows"),
            chart("liveChart"),
        ],
        chart: ChartConfig {
            series: vec![
                series(hydraulic::HEAD, "Head (m)", "lightcyan", AxisSide::Left),
                series(hydraulic::FLOW, "Flow (m³/s)", "blue", AxisSide::Left),
                series(hydraulic::EFFICIENCY, "Efficiency (%)", "green", AxisSide::Left),
            ],
            left_title: None,
            right_title: None,
        },
    }
}

pub(super) fn electrical_panel() -> PanelConfig {
    PanelConfig {
        id: "electrical".to_string(),
        title: "Electrical".to_string(),
        generator: electrical::NAME.to_string(),
        table_capacity: 20,
        chart_capacity: 28,
        default_interval_ms: DEFAULT_INTERVAL_MS,
        view: None,
        slots: vec![
            kpi("kpi-voltage", electrical::VOLTAGE),
            kpi("kpi-current", electrical::CURRENT),
            kpi("kpi-power", electrical::POWER),
            kpi("kpi-pf", electrical::POWER_FACTOR),
            kpi("kpi-freq", electrical::FREQUENCY),
            table("rows"),
            chart("liveElecChart"),
        ],
        chart: ChartConfig {
            series: vec![
                series(electrical::POWER, "Power (kW)", "green", AxisSide::Left),
                series(electrical::CURRENT, "Current (A)", "blue", AxisSide::Right),
            ],
            left_title: Some("kW".to_string()),
            right_title: Some("A".to_string()),
        },
    }
}
