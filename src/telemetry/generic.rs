use rand::rngs::StdRng;

use super::{clock_label, draw, MetricSpec, Reading, SampleGenerator, TelemetrySample};

pub const NAME: &str = "overview";

pub const HEAD: &str = "head";
pub const FLOW: &str = "flow";
pub const PRESSURE: &str = "pressure";
pub const EFFICIENCY: &str = "efficiency";

static METRICS: [MetricSpec; 4] = [
    MetricSpec { key: HEAD, label: "Water Level", unit: "m", decimals: 2, range: (12.0, 14.0) },
    MetricSpec { key: FLOW, label: "Flow Rate", unit: "m³/s", decimals: 2, range: (3.0, 4.0) },
    MetricSpec { key: PRESSURE, label: "Pressure", unit: "Pa", decimals: 0, range: (100_000.0, 108_000.0) },
    MetricSpec { key: EFFICIENCY, label: "Turbine Output", unit: "%", decimals: 2, range: (85.0, 95.0) },
];

static COLUMNS: [&str; 5] = ["Time", "Head (m)", "Flow (m³/s)", "Pressure (Pa)", "Efficiency (%)"];

/// Plant-wide summary feed shown on the overview tab.
#[derive(Debug)]
pub struct GenericPlantGenerator {
    rng: StdRng,
    sequence: u64,
}

impl GenericPlantGenerator {
    pub fn new(rng: StdRng) -> Self {
        Self { rng, sequence: 0 }
    }
}

impl SampleGenerator for GenericPlantGenerator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn metrics(&self) -> &'static [MetricSpec] {
        &METRICS
    }

    fn generate(&mut self) -> TelemetrySample {
        let rng = &mut self.rng;
        let head = draw(rng, 12.0, 2.0, 2);
        let flow = draw(rng, 3.0, 1.0, 2);
        let pressure = draw(rng, 100_000.0, 8_000.0, 0);
        let efficiency = draw(rng, 85.0, 10.0, 2);

        self.sequence += 1;
        TelemetrySample {
            sequence: self.sequence,
            timestamp: clock_label(),
            readings: vec![
                Reading { key: HEAD, value: head },
                Reading { key: FLOW, value: flow },
                Reading { key: PRESSURE, value: pressure },
                Reading { key: EFFICIENCY, value: efficiency },
            ],
        }
    }

    fn table_columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    fn table_row(&self, sample: &TelemetrySample) -> Vec<String> {
        let mut row = vec![sample.timestamp.clone()];
        row.extend(
            METRICS
                .iter()
                .map(|spec| spec.format(sample.get(spec.key).unwrap_or(f64::NAN))),
        );
        row
    }

    fn format_kpi(&self, metric: &str, value: f64) -> String {
        match metric {
            HEAD => format!("{:.2} m", value),
            FLOW => format!("{:.2} m³/s", value),
            EFFICIENCY => format!("{:.2}%", value),
            _ => match self.metric(metric) {
                Some(spec) => spec.format(value),
                None => value.to_string(),
            },
        }
    }
}
