//! Friedman test and post-hoc critical difference.
//!
//! Both procedures rank every sample along an axis, reduce repeated
//! measurements to one average-rank vector of length `k` over `n` trials and
//! work on that vector.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{PostHoc, Significance};
use crate::error::{Result, StatysError};
use crate::sample::{Axis, Distribution, Sample};
use crate::statistics::measure::{rank, Measures};
use crate::statistics::{Mean, Statistic};

/// Friedman statistic with its Iman-Davenport correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FriedmanResult {
    /// Chi-square form of the statistic.
    pub statistic: f64,
    /// `k - 1`.
    pub dof: usize,
    /// F-distributed correction of `statistic`. Not guarded: with a single
    /// trial it is zero, and it may be infinite or negative.
    pub iman_davenport: f64,
    /// `(k - 1, (k - 1) * (n - 1))`.
    pub f_dof: (usize, usize),
}

impl FriedmanResult {
    /// `((statistic, dof), (iman_davenport, f_dof))`.
    pub fn as_tuple(&self) -> ((f64, usize), (f64, (usize, usize))) {
        ((self.statistic, self.dof), (self.iman_davenport, self.f_dof))
    }
}

/// Average ranks of one sample and the critical difference between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalDifference {
    /// Average rank of every treatment, in treatment order.
    pub average_ranks: Vec<f64>,
    /// Smallest significant gap between two average ranks.
    pub cd: f64,
}

impl CriticalDifference {
    /// Treatments whose average ranks are not significantly different.
    ///
    /// Treatments are sorted by average rank and every maximal run whose
    /// spread is at most `cd` is returned as a list of treatment indices.
    /// Runs of a single treatment are omitted.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut order: Vec<usize> = (0..self.average_ranks.len()).collect();
        order.sort_by(|&a, &b| self.average_ranks[a].total_cmp(&self.average_ranks[b]));

        let mut groups = Vec::new();
        let mut last_end = 0;
        for start in 0..order.len() {
            let low = self.average_ranks[order[start]];
            let end = order[start..]
                .iter()
                .rposition(|&i| self.average_ranks[i] - low <= self.cd)
                .map_or(start, |offset| start + offset);

            if end > start && (groups.is_empty() || end > last_end) {
                groups.push(order[start..=end].to_vec());
                last_end = end;
            }
        }
        groups
    }
}

/// Ranks of a sample averaged over its trials, with the number of trials.
fn average_ranks(ranks: &Sample) -> (Vec<f64>, usize) {
    match ranks {
        Sample::Vector(v) => (v.clone(), 1),
        Sample::Matrix(rows) => {
            let width = rows.first().map_or(0, Vec::len);
            let averaged = (0..width)
                .map(|col| {
                    let column: Vec<f64> = rows.iter().map(|r| r[col]).collect();
                    Mean.compute(&column)
                })
                .collect::<Vec<f64>>();
            (averaged, rows.len())
        }
    }
}

/// Average-rank vector and trial count of every sample.
fn ranked(dist: &Distribution, axis: Axis) -> Result<Measures<(Vec<f64>, usize)>> {
    rank(dist, axis)?
        .into_iter()
        .map(|(attr, ranks)| {
            let (avg, n) = average_ranks(&ranks);
            if avg.is_empty() {
                return Err(StatysError::size(format!("`{attr}` has nothing to rank")));
            }
            Ok((attr, (avg, n)))
        })
        .collect()
}

fn friedman_statistic(ranks: &[f64], n: usize) -> FriedmanResult {
    let k = ranks.len();
    let (kf, nf) = (k as f64, n as f64);

    let sum_sq: f64 = ranks.iter().map(|r| r * r).sum();
    let statistic = 12.0 * nf * (sum_sq - kf * (kf + 1.0).powi(2) / 4.0) / (kf * (kf + 1.0));
    let iman_davenport = (nf - 1.0) * statistic / (nf * (kf - 1.0) - statistic);

    FriedmanResult {
        statistic,
        dof: k - 1,
        iman_davenport,
        f_dof: (k - 1, (k - 1) * (n - 1)),
    }
}

/// Friedman test on the ranks of every sample along `axis`.
///
/// # Errors
/// [`StatysError::Size`] when `axis` does not exist for a sample or a
/// sample is empty.
pub fn friedman(dist: &Distribution, axis: Axis) -> Result<Measures<FriedmanResult>> {
    info!("Performing Friedman test ...");

    let output: Measures<FriedmanResult> = ranked(dist, axis)?
        .into_iter()
        .map(|(attr, (ranks, n))| (attr, friedman_statistic(&ranks, n)))
        .collect();

    info!("Test performed.");
    debug!("{output:?}");

    Ok(output)
}

/// Critical difference of the average ranks of every sample along `axis`.
///
/// `CD = q * sqrt(k * (k + 1) / (6 * n))` with `q` looked up for `post_hoc`
/// at `alpha`.
///
/// # Errors
/// [`StatysError::Configuration`] for an `alpha` other than 0.01, 0.05 or
/// 0.10, or an unknown `post_hoc`; [`StatysError::Size`] when `k` is beyond
/// the critical-value table.
pub fn friedman_with_posthoc(
    dist: &Distribution,
    alpha: f64,
    post_hoc: &str,
    axis: Axis,
) -> Result<Measures<CriticalDifference>> {
    let method: PostHoc = post_hoc.parse()?;
    critical_difference(dist, Significance::try_from(alpha)?, method, axis)
}

fn critical_difference(
    dist: &Distribution,
    significance: Significance,
    method: PostHoc,
    axis: Axis,
) -> Result<Measures<CriticalDifference>> {
    info!("Performing {method} post-hoc test ...");

    let output: Measures<CriticalDifference> = ranked(dist, axis)?
        .into_iter()
        .map(|(attr, (average_ranks, n))| {
            let k = average_ranks.len();
            let q = method.critical_value(k, significance)?;
            let cd = q * ((k * (k + 1)) as f64 / (6 * n) as f64).sqrt();
            Ok((attr, CriticalDifference { average_ranks, cd }))
        })
        .collect::<Result<_>>()?;

    info!("Test performed.");
    debug!("{output:?}");

    Ok(output)
}

/// Options for [`PostHocConfig::run`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostHocConfig {
    /// Significance level, one of 0.01, 0.05 or 0.10.
    pub alpha: f64,
    /// Critical-value table to read.
    pub method: PostHoc,
    /// Axis the samples are ranked along.
    pub axis: Axis,
}

impl Default for PostHocConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            method: PostHoc::default(),
            axis: Axis::default(),
        }
    }
}

impl PostHocConfig {
    /// Options with every field given.
    pub fn new(alpha: f64, method: PostHoc, axis: Axis) -> Self {
        Self { alpha, method, axis }
    }

    /// Critical difference of every sample of `dist`.
    pub fn run(&self, dist: &Distribution) -> Result<Measures<CriticalDifference>> {
        critical_difference(dist, Significance::try_from(self.alpha)?, self.method, self.axis)
    }
}
