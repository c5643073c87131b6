//! Pairwise test pipeline.
//!
//! Runs a two-sample test over every ordered pair of distinct samples and
//! turns each p-value into a reject / fail-to-reject decision.

use indexmap::IndexMap;
use serde::Serialize;

use super::TestResult;
use crate::error::{Result, StatysError};
use crate::sample::{Distribution, Sample};

/// Decision about the null hypothesis of "no difference".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Hypothesis {
    /// `p >= alpha`: failed to reject the null hypothesis.
    Retained,
    /// `p < alpha`: null hypothesis rejected.
    Rejected,
}

impl Hypothesis {
    /// 0 when retained, 1 when rejected.
    pub fn indicator(self) -> u8 {
        match self {
            Hypothesis::Retained => 0,
            Hypothesis::Rejected => 1,
        }
    }
}

/// Decision and p-value for one ordered pair of samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verdict {
    /// Outcome at the pipeline's significance level.
    pub hypothesis: Hypothesis,
    /// p-value reported by the test.
    pub p_value: f64,
}

impl Verdict {
    /// `(indicator, p_value)`.
    pub fn as_tuple(&self) -> (u8, f64) {
        (self.hypothesis.indicator(), self.p_value)
    }
}

/// Pairwise outputs keyed by `"<nameA>-<nameB>"`.
pub type PairwiseResults = IndexMap<String, Verdict>;

/// Rejects the null hypothesis iff `p < alpha`.
///
/// The boundary `p == alpha` retains it. A NaN p-value compares false and
/// is therefore reported as rejected.
pub fn calculate_hypothesis(p: f64, alpha: f64) -> Hypothesis {
    if p >= alpha {
        Hypothesis::Retained
    } else {
        Hypothesis::Rejected
    }
}

fn check_alpha(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(StatysError::value(format!("alpha should be in (0, 1), got {alpha}")))
    }
}

fn pair_key(a: &str, b: &str) -> String {
    format!("{a}-{b}")
}

/// Runs `test` on every ordered pair `(A, B)` with `A != B`.
///
/// `A` iterates in the outer loop, `B` in the inner one, both in distribution
/// order, so the output holds `n * (n - 1)` entries and both `"A-B"` and
/// `"B-A"` are present and computed independently.
///
/// # Errors
/// [`StatysError::Value`] for `alpha` outside `(0, 1)`; any error from `test`
/// is returned unchanged.
pub fn statistical_pipeline<F>(test: F, dist: &Distribution, alpha: f64) -> Result<PairwiseResults>
where
    F: Fn(&Sample, &Sample) -> Result<TestResult>,
{
    check_alpha(alpha)?;

    let mut output = IndexMap::with_capacity(dist.len() * dist.len().saturating_sub(1));
    for (attr, value) in dist {
        for (attr2, value2) in dist {
            if attr == attr2 {
                continue;
            }

            let TestResult { p_value, .. } = test(value, value2)?;
            let hypothesis = calculate_hypothesis(p_value, alpha);
            output.insert(pair_key(attr, attr2), Verdict { hypothesis, p_value });
        }
    }

    Ok(output)
}

/// [`statistical_pipeline`] with the pairs evaluated on the rayon pool.
///
/// Output order is identical to the sequential pipeline.
#[cfg(feature = "rayon")]
pub fn par_statistical_pipeline<F>(test: F, dist: &Distribution, alpha: f64) -> Result<PairwiseResults>
where
    F: Fn(&Sample, &Sample) -> Result<TestResult> + Sync,
{
    use rayon::prelude::*;

    check_alpha(alpha)?;

    let pairs: Vec<(&String, &Sample, &String, &Sample)> = dist
        .iter()
        .flat_map(|(a, va)| {
            dist.iter()
                .filter(move |(b, _)| *b != a)
                .map(move |(b, vb)| (a, va, b, vb))
        })
        .collect();

    let verdicts: Vec<(String, Verdict)> = pairs
        .into_par_iter()
        .map(|(a, va, b, vb)| {
            let TestResult { p_value, .. } = test(va, vb)?;
            let hypothesis = calculate_hypothesis(p_value, alpha);
            Ok((pair_key(a, b), Verdict { hypothesis, p_value }))
        })
        .collect::<Result<_>>()?;

    Ok(verdicts.into_iter().collect())
}
