mod pipeline;
mod critical;
pub mod mann_whitney;
pub mod wilcoxon;
pub mod friedman;

use serde::Serialize;

pub use pipeline::{calculate_hypothesis, statistical_pipeline, Hypothesis, PairwiseResults, Verdict};
#[cfg(feature = "rayon")]
pub use pipeline::par_statistical_pipeline;
pub use critical::{PostHoc, Significance};
pub use mann_whitney::mann_whitney_u;
pub use wilcoxon::{wilcoxon_rank_sum, wilcoxon_signed_rank};
pub use friedman::{friedman_with_posthoc, CriticalDifference, FriedmanResult, PostHocConfig};

/// Upper tail `P(Z > z)` of the standard normal distribution.
pub(crate) fn normal_sf(z: f64) -> f64 {
    0.5 * libm::erfc(z / std::f64::consts::SQRT_2)
}

/// Outcome of a two-sample test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    /// Observed test statistic (U, T, z, ...).
    pub statistic: f64,
    /// Two-sided p-value.
    pub p_value: f64,
}
