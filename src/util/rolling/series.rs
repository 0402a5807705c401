use std::collections::VecDeque;

use super::push_capped;

/// Parallel label/value columns for a live chart.
///
/// Every column (and the label column) always holds the same number of
/// entries; pushes and evictions apply to all of them at once.
#[derive(Debug, Clone)]
pub struct RollingSeries {
    metrics: Vec<String>,
    labels: VecDeque<String>,
    columns: Vec<VecDeque<f64>>,
    capacity: usize,
}

impl RollingSeries {
    pub fn new<I, S>(metrics: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let metrics: Vec<String> = metrics.into_iter().map(Into::into).collect();
        let columns = metrics
            .iter()
            .map(|_| VecDeque::with_capacity(capacity))
            .collect();

        Self {
            metrics,
            labels: VecDeque::with_capacity(capacity),
            columns,
            capacity,
        }
    }

    /// Append one entry per tracked metric.
    ///
    /// `values` is matched to metrics by position. Missing values are stored as
    /// `NaN` and extra values are ignored.
    pub fn push(&mut self, label: impl Into<String>, values: &[f64]) {
        push_capped(&mut self.labels, label.into(), self.capacity);
        for (i, column) in self.columns.iter_mut().enumerate() {
            let value = values.get(i).copied().unwrap_or(f64::NAN);
            push_capped(column, value, self.capacity);
        }
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        for column in &mut self.columns {
            column.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    pub fn labels(&self) -> &VecDeque<String> {
        &self.labels
    }

    pub fn column(&self, metric: &str) -> Option<&VecDeque<f64>> {
        self.metrics
            .iter()
            .position(|m| m == metric)
            .map(|i| &self.columns[i])
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &VecDeque<f64>)> {
        self.metrics
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    /// `(x, y)` pairs for plotting, x being the position in the window.
    pub fn points(&self, metric: &str) -> Vec<(f64, f64)> {
        self.column(metric)
            .map(|column| {
                column
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.is_finite())
                    .map(|(i, v)| (i as f64, *v))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_aligned(&self) -> bool {
        self.columns.iter().all(|c| c.len() == self.labels.len())
    }
}
