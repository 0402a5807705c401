use tracing::trace;

use super::chart::{ChartFrame, ChartHandle};
use super::slots::ResolvedSlots;
use crate::telemetry::{SampleGenerator, TelemetrySample};
use crate::util::rolling::{RollingSeries, RollingWindow};

/// Latest-value display of one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub slot_id: String,
    pub metric: String,
    pub title: String,
    pub unit: String,
    pub text: Option<String>,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub sequence: u64,
    pub cells: Vec<String>,
}

/// Applies one sample to KPIs, table and chart in a single pass.
#[derive(Debug)]
pub struct LiveRenderer {
    kpis: Vec<KpiCard>,
    columns: Vec<&'static str>,
    rows: Option<RollingWindow<TableRow>>,
    series: RollingSeries,
    chart: Option<Box<dyn ChartHandle>>,
}

impl LiveRenderer {
    pub fn new(
        slots: &ResolvedSlots,
        generator: &dyn SampleGenerator,
        table_capacity: usize,
        series: RollingSeries,
        chart: Option<Box<dyn ChartHandle>>,
    ) -> Self {
        let kpis = slots
            .kpis
            .iter()
            .map(|slot| {
                let spec = generator.metric(&slot.metric);
                KpiCard {
                    slot_id: slot.id.clone(),
                    metric: slot.metric.clone(),
                    title: spec.map(|s| s.label).unwrap_or(slot.metric.as_str()).to_string(),
                    unit: spec.map(|s| s.unit).unwrap_or_default().to_string(),
                    text: None,
                    present: slot.present,
                }
            })
            .collect();

        Self {
            kpis,
            columns: generator.table_columns().to_vec(),
            rows: slots.table.as_ref().map(|_| RollingWindow::new(table_capacity)),
            series,
            chart,
        }
    }

    pub fn render(&mut self, sample: &TelemetrySample, generator: &dyn SampleGenerator) {
        for card in &mut self.kpis {
            if !card.present {
                trace!("skipping absent KPI slot '{}'", card.slot_id);
                continue;
            }
            if let Some(value) = sample.get(&card.metric) {
                card.text = Some(generator.format_kpi(&card.metric, value));
            }
        }

        if let Some(rows) = &mut self.rows {
            rows.push(TableRow {
                sequence: sample.sequence,
                cells: generator.table_row(sample),
            });
        }

        let values: Vec<f64> = self
            .series
            .metrics()
            .iter()
            .map(|metric| sample.get(metric).unwrap_or(f64::NAN))
            .collect();
        self.series.push(sample.timestamp.clone(), &values);

        if let Some(chart) = &mut self.chart {
            chart.update(&self.series);
        }
    }

    /// Empties the table and chart series. KPI text keeps its last value.
    pub fn clear(&mut self) {
        if let Some(rows) = &mut self.rows {
            rows.clear();
        }
        self.series.clear();
        if let Some(chart) = &mut self.chart {
            chart.update(&self.series);
        }
    }

    pub fn destroy_chart(&mut self) {
        if let Some(chart) = &mut self.chart {
            chart.destroy();
        }
    }

    pub fn kpis(&self) -> &[KpiCard] {
        &self.kpis
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn has_table(&self) -> bool {
        self.rows.is_some()
    }

    /// Table rows, newest first.
    pub fn rows(&self) -> Vec<&TableRow> {
        self.rows
            .as_ref()
            .map(|rows| rows.newest_first().collect())
            .unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.as_ref().map_or(0, RollingWindow::len)
    }

    pub fn series(&self) -> &RollingSeries {
        &self.series
    }

    pub fn chart(&self) -> Option<&dyn ChartHandle> {
        self.chart.as_deref()
    }

    pub fn chart_frame(&self) -> Option<&ChartFrame> {
        self.chart.as_ref().and_then(|c| c.frame())
    }
}
