//! Wilcoxon signed-rank and rank-sum tests.

use log::{debug, info};

use super::{normal_sf, statistical_pipeline, PairwiseResults, TestResult};
use crate::error::{Result, StatysError};
use crate::sample::Distribution;
use crate::statistics::{rankdata, tie_sizes};

/// Up to this many paired differences the exact null distribution is used.
const EXACT_LIMIT: usize = 25;

/// Two-sided Wilcoxon signed-rank test for paired samples.
///
/// Zero differences are discarded. The statistic is `min(R+, R-)`.
/// With at most 25 differences and none of them zero the p-value comes from
/// the exact null distribution (with `R+` truncated to an integer when ties
/// produce half ranks), otherwise from the tie-corrected normal
/// approximation without continuity correction.
///
/// # Errors
/// [`StatysError::Size`] for samples of different lengths,
/// [`StatysError::Value`] when every difference is zero.
pub fn wilcoxon_signed_rank(x: &[f64], y: &[f64]) -> Result<TestResult> {
    if x.len() != y.len() {
        return Err(StatysError::size(format!(
            "wilcoxon_signed_rank: samples must have the same length, got {} and {}",
            x.len(),
            y.len()
        )));
    }

    let d: Vec<f64> = x.iter().zip(y).map(|(a, b)| a - b).collect();
    let n_zero = d.iter().filter(|&&v| v == 0.0).count();
    let exact = d.len() <= EXACT_LIMIT && n_zero == 0;

    let d: Vec<f64> = d.into_iter().filter(|&v| v != 0.0).collect();
    let count = d.len();
    if count == 0 {
        return Err(StatysError::value(
            "wilcoxon_signed_rank: every paired difference is zero",
        ));
    }

    let magnitudes: Vec<f64> = d.iter().map(|v| v.abs()).collect();
    let ranks = rankdata(&magnitudes);

    let (mut r_plus, mut r_minus) = (0.0, 0.0);
    for (&diff, &r) in d.iter().zip(&ranks) {
        if diff > 0.0 {
            r_plus += r;
        } else {
            r_minus += r;
        }
    }
    let t = f64::min(r_plus, r_minus);

    let p_value = if exact {
        exact_p(r_plus as usize, count)
    } else {
        let n = count as f64;
        let mn = n * (n + 1.0) * 0.25;
        let mut se = n * (n + 1.0) * (2.0 * n + 1.0);
        for t in tie_sizes(&magnitudes).into_iter().filter(|&t| t > 1) {
            let t = t as f64;
            se -= 0.5 * t * (t * t - 1.0);
        }
        let se = (se / 24.0).sqrt();

        let z = (t - mn) / se;
        2.0 * normal_sf(z.abs())
    };

    Ok(TestResult {
        statistic: t,
        p_value: p_value.min(1.0),
    })
}

/// Two-sided exact p-value for `R+ = r_plus` with `n` non-zero differences.
fn exact_p(r_plus: usize, n: usize) -> f64 {
    let counts = signed_rank_frequencies(n);
    let total = 2_f64.powi(n as i32);
    let mid = (counts.len() - 1) / 2;

    if r_plus == mid {
        1.0
    } else if r_plus > mid {
        2.0 * counts[r_plus..].iter().sum::<u64>() as f64 / total
    } else {
        2.0 * counts[..=r_plus].iter().sum::<u64>() as f64 / total
    }
}

/// Number of sign assignments giving each rank sum `0..=n(n+1)/2`.
fn signed_rank_frequencies(n: usize) -> Vec<u64> {
    let max = n * (n + 1) / 2;
    let mut counts = vec![0_u64; max + 1];
    counts[0] = 1;
    for rank in 1..=n {
        for s in (rank..=max).rev() {
            counts[s] += counts[s - rank];
        }
    }
    counts
}

/// Wilcoxon rank-sum test for two independent samples.
///
/// The statistic is the z-score of the first sample's rank sum, no tie
/// correction is applied.
///
/// # Errors
/// [`StatysError::Size`] when a sample is empty.
pub fn wilcoxon_rank_sum(x: &[f64], y: &[f64]) -> Result<TestResult> {
    let (n1, n2) = (x.len(), y.len());
    if n1 == 0 || n2 == 0 {
        return Err(StatysError::size("wilcoxon_rank_sum: each sample must be non-empty"));
    }

    let combined: Vec<f64> = x.iter().chain(y).copied().collect();
    let ranks = rankdata(&combined);
    let s: f64 = ranks[..n1].iter().sum();

    let (n1, n2) = (n1 as f64, n2 as f64);
    let expected = n1 * (n1 + n2 + 1.0) / 2.0;
    let z = (s - expected) / (n1 * n2 * (n1 + n2 + 1.0) / 12.0).sqrt();
    let p_value = 2.0 * normal_sf(z.abs());

    Ok(TestResult { statistic: z, p_value })
}

/// Wilcoxon signed-rank test between every ordered pair of samples.
pub fn signed_rank(dist: &Distribution, alpha: f64) -> Result<PairwiseResults> {
    info!("Performing Wilcoxon signed-rank test ...");

    let output = statistical_pipeline(|a, b| wilcoxon_signed_rank(&a.values(), &b.values()), dist, alpha)?;

    info!("Test performed.");
    debug!("{output:?}");

    Ok(output)
}

/// Wilcoxon rank-sum test between every ordered pair of samples.
pub fn rank_sum(dist: &Distribution, alpha: f64) -> Result<PairwiseResults> {
    info!("Performing Wilcoxon rank-sum test ...");

    let output = statistical_pipeline(|a, b| wilcoxon_rank_sum(&a.values(), &b.values()), dist, alpha)?;

    info!("Test performed.");
    debug!("{output:?}");

    Ok(output)
}
