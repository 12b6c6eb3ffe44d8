//! Per-metric score series

/// Append-only sequence of per-frame scores for one metric
#[derive(Debug, Clone, Default)]
pub struct MetricSeries {
    values: Vec<f64>,
}

impl MetricSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Append one frame's score
    pub fn push(&mut self, score: f64) {
        self.values.push(score);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Scores in frame-processing order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Arithmetic mean, `None` for an empty series
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }
}
