use rand::rngs::StdRng;

use super::{clock_label, draw, MetricSpec, Reading, SampleGenerator, TelemetrySample};
use crate::util::string::StringUtils;

pub const NAME: &str = "hydraulic";

pub const HEAD: &str = "head";
pub const FLOW: &str = "flow";
pub const PRESSURE: &str = "pressure";
pub const VELOCITY: &str = "velocity";
pub const HEAD_LOSS: &str = "head_loss";
pub const EFFICIENCY: &str = "efficiency";

static METRICS: [MetricSpec; 6] = [
    MetricSpec { key: HEAD, label: "Head", unit: "m", decimals: 2, range: (12.0, 15.0) },
    MetricSpec { key: FLOW, label: "Flow", unit: "m³/s", decimals: 2, range: (2.0, 3.6) },
    MetricSpec { key: PRESSURE, label: "Pressure", unit: "Pa", decimals: 0, range: (100_000.0, 109_000.0) },
    MetricSpec { key: VELOCITY, label: "Velocity", unit: "m/s", decimals: 2, range: (3.0, 4.2) },
    MetricSpec { key: HEAD_LOSS, label: "Head Loss", unit: "m", decimals: 2, range: (0.2, 0.4) },
    MetricSpec { key: EFFICIENCY, label: "Efficiency", unit: "%", decimals: 2, range: (85.0, 97.0) },
];

static COLUMNS: [&str; 7] = [
    "Time",
    "Head (m)",
    "Flow (m³/s)",
    "Pressure (Pa)",
    "Velocity (m/s)",
    "Loss (m)",
    "Efficiency (%)",
];

/// Penstock and turbine readings.
#[derive(Debug)]
pub struct HydraulicGenerator {
    rng: StdRng,
    sequence: u64,
}

impl HydraulicGenerator {
    pub fn new(rng: StdRng) -> Self {
        Self { rng, sequence: 0 }
    }
}

impl SampleGenerator for HydraulicGenerator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn metrics(&self) -> &'static [MetricSpec] {
        &METRICS
    }

    fn generate(&mut self) -> TelemetrySample {
        let rng = &mut self.rng;
        let head = draw(rng, 12.0, 3.0, 2);
        let flow = draw(rng, 2.0, 1.6, 2);
        let pressure = draw(rng, 100_000.0, 9_000.0, 0);
        let velocity = draw(rng, 3.0, 1.2, 2);
        let head_loss = draw(rng, 0.20, 0.20, 2);
        let efficiency = draw(rng, 85.0, 12.0, 2);

        self.sequence += 1;
        TelemetrySample {
            sequence: self.sequence,
            timestamp: clock_label(),
            readings: vec![
                Reading { key: HEAD, value: head },
                Reading { key: FLOW, value: flow },
                Reading { key: PRESSURE, value: pressure },
                Reading { key: VELOCITY, value: velocity },
                Reading { key: HEAD_LOSS, value: head_loss },
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

    /// Bare rounded value, no unit and no padding zeros.
    fn format_kpi(&self, metric: &str, value: f64) -> String {
        match self.metric(metric) {
            Some(spec) => StringUtils::bare_number(value, spec.decimals),
            None => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::telemetry::tests::assert_sample_conforms;

    #[test]
    fn test_samples_stay_in_range() {
        let mut generator = HydraulicGenerator::new(StdRng::seed_from_u64(7));
        for _ in 0..2_000 {
            let sample = generator.generate();
            assert_sample_conforms(&generator, &sample);
        }
    }

    #[test]
    fn test_table_row_layout() {
        let mut generator = HydraulicGenerator::new(StdRng::seed_from_u64(3));
        let sample = generator.generate();
        let row = generator.table_row(&sample);
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0], sample.timestamp);
        assert_eq!(row[3], format!("{:.0}", sample.get(PRESSURE).unwrap()));
    }

    #[test]
    fn test_kpi_shows_bare_rounded_value() {
        let generator = HydraulicGenerator::new(StdRng::seed_from_u64(0));
        assert_eq!(generator.format_kpi(HEAD, 13.5), "13.5");
        assert_eq!(generator.format_kpi(HEAD, 13.456), "13.46");
        assert_eq!(generator.format_kpi(EFFICIENCY, 90.0), "90");
        assert_eq!(generator.format_kpi(PRESSURE, 104_321.0), "104321");
    }
}
