mod distribution;
mod read;

pub use distribution::Distribution;

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatysError};

/// A single numeric sample.
///
/// A `Vector` holds one measurement per treatment. A `Matrix` holds repeated
/// measurements, one row per trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sample {
    /// One value per treatment.
    Vector(Vec<f64>),
    /// Rectangular rows of values.
    Matrix(Vec<Vec<f64>>),
}

impl Sample {
    /// Number of dimensions (1 for vectors, 2 for matrices).
    pub fn ndim(&self) -> usize {
        match self {
            Sample::Vector(_) => 1,
            Sample::Matrix(_) => 2,
        }
    }

    /// Total number of values.
    pub fn len(&self) -> usize {
        match self {
            Sample::Vector(v) => v.len(),
            Sample::Matrix(rows) => rows.iter().map(Vec::len).sum(),
        }
    }

    /// Check if the sample holds no values at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattened values in row-major order.
    ///
    /// Borrowed for vectors, allocated for matrices.
    pub fn values(&self) -> Cow<'_, [f64]> {
        match self {
            Sample::Vector(v) => Cow::Borrowed(v.as_slice()),
            Sample::Matrix(rows) => Cow::Owned(rows.iter().flatten().copied().collect()),
        }
    }

    /// Checks that a matrix is rectangular.
    pub(crate) fn validate(&self, name: &str) -> Result<()> {
        if let Sample::Matrix(rows) = self {
            let width = rows.first().map_or(0, Vec::len);
            if let Some(bad) = rows.iter().position(|r| r.len() != width) {
                return Err(StatysError::type_error(format!(
                    "`{name}` should be a list or a rectangular matrix, row {bad} has {} values instead of {width}",
                    rows[bad].len()
                )));
            }
        }
        Ok(())
    }
}

impl From<Vec<f64>> for Sample {
    fn from(v: Vec<f64>) -> Self {
        Sample::Vector(v)
    }
}

impl From<&[f64]> for Sample {
    fn from(v: &[f64]) -> Self {
        Sample::Vector(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Sample {
    fn from(v: [f64; N]) -> Self {
        Sample::Vector(v.to_vec())
    }
}

impl From<Vec<Vec<f64>>> for Sample {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Sample::Matrix(rows)
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Sample {
    fn from(rows: [[f64; C]; R]) -> Self {
        Sample::Matrix(rows.iter().map(|r| r.to_vec()).collect())
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Vector(v) => write!(f, "{v:?}"),
            Sample::Matrix(rows) => write!(f, "{rows:?}"),
        }
    }
}

/// Axis along which a sample is ranked.
///
/// `Flat` treats every value of the sample as one group (numpy's
/// `axis=None`). `At(0)` ranks each column of a matrix, `At(1)` each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Every value of the sample at once.
    #[default]
    Flat,
    /// Along a matrix axis: 0 for columns, 1 for rows.
    At(usize),
}
