use rand::rngs::StdRng;
use rand::Rng;

use super::{clock_label, draw, round_to, MetricSpec, Reading, SampleGenerator, TelemetrySample};
use crate::util::string::StringUtils;

pub const NAME: &str = "electrical";

pub const VOLTAGE: &str = "voltage";
pub const CURRENT: &str = "current";
pub const POWER: &str = "power";
pub const POWER_FACTOR: &str = "power_factor";
pub const FREQUENCY: &str = "frequency";

const NOMINAL_VOLTAGE: f64 = 11_000.0;
const SQRT_3: f64 = 1.732;

static METRICS: [MetricSpec; 5] = [
    MetricSpec { key: VOLTAGE, label: "Voltage", unit: "V", decimals: 0, range: (10_450.0, 11_550.0) },
    MetricSpec { key: CURRENT, label: "Current", unit: "A", decimals: 1, range: (300.0, 700.0) },
    MetricSpec { key: POWER, label: "Power", unit: "kW", decimals: 1, range: (4_778.0, 13_864.0) },
    MetricSpec { key: POWER_FACTOR, label: "Power Factor", unit: "", decimals: 3, range: (0.88, 0.99) },
    MetricSpec { key: FREQUENCY, label: "Frequency", unit: "Hz", decimals: 2, range: (49.8, 50.2) },
];

static COLUMNS: [&str; 7] = [
    "Record",
    "Voltage (V)",
    "Current (A)",
    "Power (kW)",
    "PF",
    "Frequency (Hz)",
    "Timestamp",
];

/// Three-phase generator output at 11 kV / 50 Hz.
#[derive(Debug)]
pub struct ElectricalGenerator {
    rng: StdRng,
    sequence: u64,
}

impl ElectricalGenerator {
    pub fn new(rng: StdRng) -> Self {
        Self { rng, sequence: 0 }
    }
}

impl SampleGenerator for ElectricalGenerator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn metrics(&self) -> &'static [MetricSpec] {
        &METRICS
    }

    fn generate(&mut self) -> TelemetrySample {
        let rng = &mut self.rng;
        // 11 kV ±5%
        let voltage = round_to(NOMINAL_VOLTAGE + (rng.gen::<f64>() * 0.10 - 0.05) * NOMINAL_VOLTAGE, 0);
        let current = draw(rng, 300.0, 400.0, 1);
        let power_factor = draw(rng, 0.88, 0.11, 3);
        // 50 Hz ±0.2
        let frequency = round_to(50.0 + (rng.gen::<f64>() * 0.4 - 0.2), 2);
        let power = round_to(SQRT_3 * voltage * current * power_factor / 1000.0, 1);

        self.sequence += 1;
        TelemetrySample {
            sequence: self.sequence,
            timestamp: clock_label(),
            readings: vec![
                Reading { key: VOLTAGE, value: voltage },
                Reading { key: CURRENT, value: current },
                Reading { key: POWER, value: power },
                Reading { key: POWER_FACTOR, value: power_factor },
                Reading { key: FREQUENCY, value: frequency },
            ],
        }
    }

    fn table_columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    fn table_row(&self, sample: &TelemetrySample) -> Vec<String> {
        let mut row = vec![sample.sequence.to_string()];
        row.extend(
            METRICS
                .iter()
                .map(|spec| spec.format(sample.get(spec.key).unwrap_or(f64::NAN))),
        );
        row.push(sample.timestamp.clone());
        row
    }

    fn format_kpi(&self, metric: &str, value: f64) -> String {
        match metric {
            VOLTAGE => StringUtils::group_thousands_bare(value, 0),
            POWER => StringUtils::group_thousands_bare(value, 1),
            _ => match self.metric(metric) {
                Some(spec) => StringUtils::bare_number(value, spec.decimals),
                None => value.to_string(),
            },
        }
    }
}
