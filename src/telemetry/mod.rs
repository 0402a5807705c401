//! Synthetic plant telemetry.
//!
//! Each generator draws one [`TelemetrySample`] per tick from fixed ranges.
//! Fields are `base + r * spread` with `r` uniform in `[0, 1)`, drawn
//! independently per field and rounded to a fixed precision. Derived fields
//! are computed from the already-rounded fields of the same sample.

pub mod electrical;
pub mod generic;
pub mod hydraulic;

use std::collections::HashMap;
use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use electrical::ElectricalGenerator;
pub use generic::GenericPlantGenerator;
pub use hydraulic::HydraulicGenerator;

use crate::error::{DashboardError, Result};

/// One named reading of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub key: &'static str,
    pub value: f64,
}

/// One tick worth of telemetry.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    pub sequence: u64,
    pub timestamp: String,
    pub readings: Vec<Reading>,
}

impl TelemetrySample {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.readings.iter().find(|r| r.key == key).map(|r| r.value)
    }
}

/// Static description of a tracked metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub decimals: usize,
    /// Inclusive bounds every generated value falls in.
    pub range: (f64, f64),
}

impl MetricSpec {
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }
}

pub trait SampleGenerator: Debug + Send {
    fn name(&self) -> &'static str;
    fn metrics(&self) -> &'static [MetricSpec];
    fn generate(&mut self) -> TelemetrySample;

    /// Column headers of the telemetry table.
    fn table_columns(&self) -> &'static [&'static str];
    fn table_row(&self, sample: &TelemetrySample) -> Vec<String>;

    /// Text shown in a KPI slot bound to `metric`.
    fn format_kpi(&self, metric: &str, value: f64) -> String {
        self.metric(metric)
            .map(|spec| spec.format(value))
            .unwrap_or_else(|| value.to_string())
    }

    fn metric(&self, key: &str) -> Option<&'static MetricSpec> {
        self.metrics().iter().find(|m| m.key == key)
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// `base + r * spread`, rounded.
pub(crate) fn draw<R: Rng + ?Sized>(rng: &mut R, base: f64, spread: f64, decimals: u32) -> f64 {
    round_to(base + rng.gen::<f64>() * spread, decimals)
}

pub(crate) fn clock_label() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Factory type
pub type GeneratorFactory = fn(StdRng) -> Box<dyn SampleGenerator>;

lazy_static::lazy_static! {
    pub static ref GENERATOR_REGISTRY: HashMap<&'static str, GeneratorFactory> = {
        let mut map = HashMap::new();
        map.insert(generic::NAME, generic_factory as GeneratorFactory);
        map.insert(hydraulic::NAME, hydraulic_factory as GeneratorFactory);
        map.insert(electrical::NAME, electrical_factory as GeneratorFactory);
        map
    };
}

fn generic_factory(rng: StdRng) -> Box<dyn SampleGenerator> {
    Box::new(GenericPlantGenerator::new(rng))
}

fn hydraulic_factory(rng: StdRng) -> Box<dyn SampleGenerator> {
    Box::new(HydraulicGenerator::new(rng))
}

fn electrical_factory(rng: StdRng) -> Box<dyn SampleGenerator> {
    Box::new(ElectricalGenerator::new(rng))
}

pub fn supported_generators() -> Vec<&'static str> {
    let mut names: Vec<_> = GENERATOR_REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

pub fn create_generator(name: &str) -> Result<Box<dyn SampleGenerator>> {
    build(name, StdRng::from_entropy())
}

/// Deterministic generator for reproducible runs.
pub fn create_seeded_generator(name: &str, seed: u64) -> Result<Box<dyn SampleGenerator>> {
    build(name, StdRng::seed_from_u64(seed))
}

fn build(name: &str, rng: StdRng) -> Result<Box<dyn SampleGenerator>> {
    GENERATOR_REGISTRY
        .get(name)
        .map(|factory| factory(rng))
        .ok_or_else(|| DashboardError::UnknownGenerator(name.to_string()))
}
