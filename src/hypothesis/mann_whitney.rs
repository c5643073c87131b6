//! Mann-Whitney U test.

use log::{debug, info};

use super::{normal_sf, statistical_pipeline, PairwiseResults, TestResult};
use crate::error::{Result, StatysError};
use crate::sample::Distribution;
use crate::statistics::{rankdata, tie_sizes};

/// Largest sample size for which the exact null distribution is used when
/// the other sample is larger still.
const EXACT_LIMIT: usize = 8;

/// Longest lower tail, in U values, tabulated for the exact distribution.
const MAX_TABLE_LEN: usize = 1 << 22;

/// Two-sided Mann-Whitney U test for two independent samples.
///
/// The statistic is `U1`, the U of the first sample. The p-value comes from
/// the exact null distribution when either sample has at most 8
/// observations and there are no ties, otherwise from the normal
/// approximation with tie and continuity corrections.
///
/// # Errors
/// [`StatysError::Size`] when a sample is empty.
pub fn mann_whitney_u(x: &[f64], y: &[f64]) -> Result<TestResult> {
    let (n1, n2) = (x.len(), y.len());
    if n1 == 0 || n2 == 0 {
        return Err(StatysError::size("mann_whitney_u: each sample must be non-empty"));
    }

    let combined: Vec<f64> = x.iter().chain(y).copied().collect();
    let ranks = rankdata(&combined);

    let r1: f64 = ranks[..n1].iter().sum();
    let u1 = r1 - (n1 * (n1 + 1)) as f64 / 2.0;
    let u2 = (n1 * n2) as f64 - u1;
    let u = u1.max(u2);

    let ties = tie_sizes(&combined);
    let has_ties = ties.iter().any(|&t| t > 1);

    let exact = if (n1 > EXACT_LIMIT && n2 > EXACT_LIMIT) || has_ties {
        None
    } else {
        exact_sf(u, n1, n2)
    };
    let p = exact.unwrap_or_else(|| asymptotic_sf(u, n1, n2, &ties));

    Ok(TestResult {
        statistic: u1,
        p_value: (2.0 * p).clamp(0.0, 1.0),
    })
}

/// `P(U >= u)` under the normal approximation.
fn asymptotic_sf(u: f64, n1: usize, n2: usize, ties: &[usize]) -> f64 {
    let n = (n1 + n2) as f64;
    let (n1, n2) = (n1 as f64, n2 as f64);

    let mu = n1 * n2 / 2.0;
    let tie_term: f64 = ties.iter().map(|&t| (t * t * t - t) as f64).sum();
    let s = (n1 * n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)))).sqrt();

    let z = (u - mu - 0.5) / s;
    normal_sf(z)
}

/// `P(U >= u)` from the exact null distribution.
///
/// By symmetry this is the lower tail `P(U <= m n - u)`, so only that many
/// frequencies are tabulated. `None` when the tail is longer than
/// [`MAX_TABLE_LEN`] or its counts overflow.
fn exact_sf(u: f64, n1: usize, n2: usize) -> Option<f64> {
    let (m, n) = (n1.min(n2), n1.max(n2));
    let tail = (m * n).checked_sub(u.ceil() as usize)?;
    if tail >= MAX_TABLE_LEN {
        return None;
    }

    let lower: f64 = u_frequencies(m, n, tail)?.iter().map(|&c| c as f64).sum();

    // C(m + n, m), exact while it fits the mantissa
    let mut total = 1.0;
    for i in 1..=m {
        total = total * (n + i) as f64 / i as f64;
    }
    Some((lower / total).min(1.0))
}

/// Number of arrangements giving each value `0..=max_u` of U for samples of
/// sizes `m`, `n`.
///
/// These are the low coefficients of the Gaussian binomial
/// `[m + n choose m]_q = prod_{i=1..m} (1 - q^(n+i)) / (1 - q^i)`, expanded
/// as a truncated power series. `None` on overflow.
fn u_frequencies(m: usize, n: usize, max_u: usize) -> Option<Vec<i128>> {
    let len = max_u + 1;
    let mut poly = vec![0_i128; len];
    poly[0] = 1;

    for i in 1..=m {
        // multiply by (1 - q^(n+i)), top down so the old coefficients are read
        for j in (n + i..len).rev() {
            poly[j] = poly[j].checked_sub(poly[j - n - i])?;
        }
        // divide by (1 - q^i)
        for j in i..len {
            poly[j] = poly[j].checked_add(poly[j - i])?;
        }
    }
    Some(poly)
}

/// Mann-Whitney U test between every ordered pair of samples.
pub fn u_test(dist: &Distribution, alpha: f64) -> Result<PairwiseResults> {
    info!("Performing Mann-Whitney U test ...");

    let output = statistical_pipeline(|a, b| mann_whitney_u(&a.values(), &b.values()), dist, alpha)?;

    info!("Test performed.");
    debug!("{output:?}");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const X: [f64; 6] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
    const Y: [f64; 6] = [0.07, 0.14, 0.72, 0.32, 0.59, 0.43];

    #[test]
    fn frequencies_sum_to_binomial() {
        let counts = u_frequencies(6, 6, 36).unwrap();
        assert_eq!(counts.len(), 37);
        assert_eq!(counts.iter().sum::<i128>(), 924);
        assert!(counts.iter().all(|&c| c > 0));
        // symmetric around m * n / 2
        assert!(counts.iter().eq(counts.iter().rev()));

        // truncation keeps the low coefficients
        assert_eq!(u_frequencies(6, 6, 5).unwrap(), counts[..6].to_vec());
    }

    #[test]
    fn small_frequencies() {
        // U for sizes (1, 2) takes 0, 1, 2 once each
        assert_eq!(u_frequencies(1, 2, 2).unwrap(), vec![1, 1, 1]);
        assert_eq!(u_frequencies(2, 2, 4).unwrap(), vec![1, 1, 2, 1, 1]);
    }

    #[test]
    fn exact_small_samples() {
        let r = mann_whitney_u(&X, &Y).unwrap();
        assert_relative_eq!(r.statistic, 12.0);
        assert_relative_eq!(r.p_value, 0.3939393939393939, epsilon = 1e-12);
    }

    #[test]
    fn complete_separation() {
        let r = mann_whitney_u(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
        assert_relative_eq!(r.statistic, 0.0);
        // 2 * 1 / C(6, 3)
        assert_relative_eq!(r.p_value, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn ties_use_normal_approximation() {
        let r = mann_whitney_u(&[1.0, 2.0, 2.0, 3.0], &[2.0, 4.0, 5.0, 6.0]).unwrap();
        assert_relative_eq!(r.statistic, 2.0);
        assert_relative_eq!(r.p_value, 0.1037536775209857, epsilon = 1e-9);
    }

    #[test]
    fn exact_with_a_very_large_partner() {
        // C(300_008, 8) arrangements, more than i128 holds
        let x: Vec<f64> = (0..8).map(|i| -1.0 - f64::from(i)).collect();
        let y: Vec<f64> = (0..300_000).map(f64::from).collect();
        let r = mann_whitney_u(&x, &y).unwrap();

        assert_relative_eq!(r.statistic, 0.0);
        let arrangements: f64 = (1..=8).map(|i| f64::from(300_000 + i) / f64::from(i)).product();
        assert_relative_eq!(r.p_value, 2.0 / arrangements, max_relative = 1e-9);
    }

    #[test]
    fn long_tails_are_not_tabulated() {
        let n = 1 << 20;
        // P(U >= m n / 2) would need half of a 2^23 entry table
        assert!(exact_sf((4 * n) as f64, 8, n).is_none());
        assert!(exact_sf((8 * n) as f64, 8, n).is_some());
    }

    #[test]
    fn identical_samples_never_reject() {
        let r = mann_whitney_u(&[1.0, 1.0], &[1.0, 1.0]).unwrap();
        assert_relative_eq!(r.p_value, 1.0);
    }

    #[test]
    fn empty_sample() {
        assert!(matches!(mann_whitney_u(&[], &[1.0]), Err(StatysError::Size(_))));
    }

    #[test]
    fn pairwise_on_distribution() {
        let d = Distribution::new([X.to_vec(), Y.to_vec()]).unwrap();
        let output = u_test(&d, 0.05).unwrap();
        let (h, p) = output["arg0-arg1"].as_tuple();
        assert_eq!(h, 0);
        assert_relative_eq!(p, 0.3939393939393939, epsilon = 1e-12);
    }
}
