use std::fmt::Debug;

use ratatui::style::Color;
use tracing::debug;

use crate::config::{AxisSide, ChartConfig};
use crate::util::rolling::RollingSeries;

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDescriptor {
    pub metric: String,
    pub label: String,
    pub color: Color,
    pub axis: AxisSide,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisConfig {
    pub left_title: Option<String>,
    pub right_title: Option<String>,
}

impl AxisConfig {
    pub fn title(&self, side: AxisSide) -> Option<&str> {
        match side {
            AxisSide::Left => self.left_title.as_deref(),
            AxisSide::Right => self.right_title.as_deref(),
        }
    }
}

/// Drawing capability a panel feeds its rolling series into.
pub trait ChartHandle: Debug + Send {
    /// Redraw from the current series data.
    fn update(&mut self, series: &RollingSeries);
    /// Release the drawing resources. Later updates are ignored.
    fn destroy(&mut self);
    fn is_destroyed(&self) -> bool;
    /// Snapshot for rendering; `None` once destroyed.
    fn frame(&self) -> Option<&ChartFrame>;
}

/// Plot-ready copy of the series data at the last redraw.
#[derive(Debug, Clone, Default)]
pub struct ChartFrame {
    pub surface: String,
    pub descriptors: Vec<SeriesDescriptor>,
    pub axes: AxisConfig,
    pub points: Vec<Vec<(f64, f64)>>,
    pub labels: Vec<String>,
    pub capacity: usize,
}

impl ChartFrame {
    pub fn has_side(&self, side: AxisSide) -> bool {
        self.descriptors.iter().any(|d| d.axis == side)
    }

    pub fn datasets(&self, side: AxisSide) -> impl Iterator<Item = (&SeriesDescriptor, &[(f64, f64)])> {
        self.descriptors
            .iter()
            .zip(self.points.iter())
            .filter(move |(d, _)| d.axis == side)
            .map(|(d, p)| (d, p.as_slice()))
    }

    /// Y bounds for one axis with 10% padding, `None` when it has no data.
    pub fn y_bounds(&self, side: AxisSide) -> Option<[f64; 2]> {
        let (min, max) = self
            .datasets(side)
            .flat_map(|(_, points)| points.iter().map(|(_, y)| *y))
            .fold(None, |acc: Option<(f64, f64)>, y| match acc {
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
                None => Some((y, y)),
            })?;

        let range = (max - min).max(1.0);
        let padding = range * 0.1;
        Some([min - padding, max + padding])
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.capacity.saturating_sub(1).max(1) as f64]
    }
}

/// Terminal line chart. Keeps one redraw snapshot that the UI layer draws
/// with ratatui's `Chart` widget.
#[derive(Debug)]
pub struct TerminalChart {
    frame: ChartFrame,
    redraws: u64,
    destroyed: bool,
}

impl TerminalChart {
    pub fn new(surface: &str, descriptors: Vec<SeriesDescriptor>, axes: AxisConfig, capacity: usize) -> Self {
        debug!("Creating chart on '{}' with {} series", surface, descriptors.len());
        let points = descriptors.iter().map(|_| Vec::with_capacity(capacity)).collect();
        Self {
            frame: ChartFrame {
                surface: surface.to_string(),
                descriptors,
                axes,
                points,
                labels: Vec::with_capacity(capacity),
                capacity,
            },
            redraws: 0,
            destroyed: false,
        }
    }

    pub fn from_config(surface: &str, config: &ChartConfig, capacity: usize) -> Self {
        let descriptors = config
            .series
            .iter()
            .map(|s| SeriesDescriptor {
                metric: s.metric.clone(),
                label: s.label.clone(),
                color: parse_color(&s.color),
                axis: s.axis,
            })
            .collect();
        let axes = AxisConfig {
            left_title: config.left_title.clone(),
            right_title: config.right_title.clone(),
        };
        Self::new(surface, descriptors, axes, capacity)
    }

    pub fn redraws(&self) -> u64 {
        self.redraws
    }
}

impl ChartHandle for TerminalChart {
    fn update(&mut self, series: &RollingSeries) {
        if self.destroyed {
            return;
        }
        for (descriptor, points) in self.frame.descriptors.iter().zip(self.frame.points.iter_mut()) {
            *points = series.points(&descriptor.metric);
        }
        self.frame.labels = series.labels().iter().cloned().collect();
        self.redraws += 1;
    }

    fn destroy(&mut self) {
        if !self.destroyed {
            debug!("Destroying chart on '{}'", self.frame.surface);
            self.destroyed = true;
            self.frame.points.iter_mut().for_each(Vec::clear);
            self.frame.labels.clear();
        }
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn frame(&self) -> Option<&ChartFrame> {
        (!self.destroyed).then_some(&self.frame)
    }
}

pub fn parse_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "red" => Color::Red,
        "green" => Color::Green,
        "lightgreen" => Color::LightGreen,
        "blue" => Color::Blue,
        "lightblue" => Color::LightBlue,
        "yellow" => Color::Yellow,
        "cyan" => Color::Cyan,
        "lightcyan" => Color::LightCyan,
        "magenta" => Color::Magenta,
        "white" => Color::White,
        _ => Color::Cyan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    fn electrical_chart() -> TerminalChart {
        let config = DashboardConfig::default();
        let panel = config.panel("electrical").unwrap();
        TerminalChart::from_config("liveElecChart", &panel.chart, panel.chart_capacity)
    }

    #[test]
    fn test_update_snapshots_series() {
        let mut chart = electrical_chart();
        let mut series = RollingSeries::new(["power", "current"], 28);
        series.push("10:00:00", &[5000.0, 400.0]);
        series.push("10:00:01", &[6000.0, 500.0]);
        chart.update(&series);

        let frame = chart.frame().unwrap();
        assert_eq!(frame.labels, vec!["10:00:00", "10:00:01"]);
        let left: Vec<_> = frame.datasets(AxisSide::Left).collect();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].1, &[(0.0, 5000.0), (1.0, 6000.0)]);
        assert!(frame.has_side(AxisSide::Right));
        assert_eq!(chart.redraws(), 1);
    }

    #[test]
    fn test_y_bounds_are_padded() {
        let mut chart = electrical_chart();
        let mut series = RollingSeries::new(["power", "current"], 28);
        series.push("a", &[100.0, 300.0]);
        series.push("b", &[200.0, 700.0]);
        chart.update(&series);

        let frame = chart.frame().unwrap();
        assert_eq!(frame.y_bounds(AxisSide::Left), Some([90.0, 210.0]));
        assert_eq!(frame.y_bounds(AxisSide::Right), Some([260.0, 740.0]));
        assert_eq!(frame.x_bounds(), [0.0, 27.0]);
    }

    #[test]
    fn test_destroyed_chart_ignores_updates() {
        let mut chart = electrical_chart();
        chart.destroy();
        let mut series = RollingSeries::new(["power", "current"], 28);
        series.push("a", &[1.0, 2.0]);
        chart.update(&series);

        assert!(chart.is_destroyed());
        assert!(chart.frame().is_none());
        assert_eq!(chart.redraws(), 0);
    }

    #[test]
    fn test_parse_color_falls_back_to_cyan() {
        assert_eq!(parse_color("Green"), Color::Green);
        assert_eq!(parse_color("chartreuse"), Color::Cyan);
    }
}
