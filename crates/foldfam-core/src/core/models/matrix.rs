use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Row {row} has {actual} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Matrix has {rows} rows for {labels} labels")]
    LabelMismatch { rows: usize, labels: usize },
}

/// A square, symmetric, non-negative distance matrix labeled by structure
/// identifiers in a fixed order; the diagonal is always zero.
///
/// Created either by parsing a legacy artifact or by the recomputer; never
/// mutated once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// An all-zero matrix over the given labels.
    pub fn zeros(labels: Vec<String>) -> Self {
        let n = labels.len();
        Self {
            labels,
            values: vec![0.0; n * n],
        }
    }

    /// Builds a matrix from row-major data, validating squareness against the
    /// label count.
    pub fn from_rows(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n = labels.len();
        if rows.len() != n {
            return Err(MatrixError::LabelMismatch {
                rows: rows.len(),
                labels: n,
            });
        }
        let mut values = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(MatrixError::RaggedRow {
                    row: i,
                    expected: n,
                    actual: row.len(),
                });
            }
            values.extend(row);
        }
        Ok(Self { labels, values })
    }

    /// Number of structures (rows/columns).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.len() + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.len();
        &self.values[i * n..(i + 1) * n]
    }

    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        let n = self.len();
        self.values[i * n + j] = value;
        self.values[j * n + i] = value;
    }

    /// The strict upper triangle flattened row by row, the input form expected
    /// by the hierarchical clusterer.
    pub fn condensed(&self) -> Vec<f64> {
        let n = self.len();
        let mut out = Vec::with_capacity(n.saturating_sub(1) * n / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                out.push(self.get(i, j));
            }
        }
        out
    }

    pub fn max_off_diagonal(&self) -> Option<f64> {
        self.condensed().into_iter().reduce(f64::max)
    }

    pub fn min_off_diagonal(&self) -> Option<f64> {
        self.condensed().into_iter().reduce(f64::min)
    }

    /// Summary statistics over the strict upper triangle, or `None` for fewer
    /// than two structures.
    pub fn summary(&self) -> Option<DistanceSummary> {
        let mut values = self.condensed();
        if values.is_empty() {
            return None;
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let count = values.len() as f64;
        let mean = values.iter().sum::<f64>() / count;
        let median = if values.len() % 2 == 1 {
            values[values.len() / 2]
        } else {
            (values[values.len() / 2 - 1] + values[values.len() / 2]) / 2.0
        };
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
        Some(DistanceSummary {
            mean,
            median,
            min: values[0],
            max: values[values.len() - 1],
            std_dev: variance.sqrt(),
        })
    }
}

/// Summary of the pairwise distances in a [`DistanceMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceSummary {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}
