//! Critical values for Friedman post-hoc procedures.
//!
//! Each table has one row per number of compared treatments `k` (row `k - 1`,
//! `k = 1..=20`) and one column per supported significance level, in the
//! order 0.01, 0.05, 0.10.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatysError};

/// Nemenyi: `q_alpha / sqrt(2)` of the studentized range with infinite
/// degrees of freedom.
const NEMENYI: [[f64; 3]; 20] = [
    [0.000000000, 0.000000000, 0.000000000],
    [2.575829304, 1.959964233, 1.644853627],
    [2.913494338, 2.343700476, 2.052292730],
    [3.113250345, 2.569032073, 2.291341497],
    [3.254685972, 2.727774717, 2.459515764],
    [3.363740368, 2.849705382, 2.588520602],
    [3.452212823, 2.948319908, 2.692732101],
    [3.526470698, 3.030878867, 2.779883608],
    [3.590338699, 3.101730260, 2.854606431],
    [3.646291548, 3.163683420, 2.919888840],
    [3.696020900, 3.218653901, 2.977768251],
    [3.740733168, 3.268003591, 3.029694183],
    [3.781318241, 3.312738701, 3.076733468],
    [3.818450856, 3.353617959, 3.119693333],
    [3.852654477, 3.391230382, 3.159198819],
    [3.884343155, 3.426041249, 3.195743433],
    [3.913849887, 3.458424619, 3.229723401],
    [3.941446367, 3.488684546, 3.261461490],
    [3.967357083, 3.517072762, 3.291223987],
    [3.991769594, 3.543799277, 3.319233060],
];

/// Bonferroni-Dunn: two-sided normal quantile `z_{1 - alpha / (2 (k - 1))}`.
const BONFERRONI_DUNN: [[f64; 3]; 20] = [
    [0.000000000, 0.000000000, 0.000000000],
    [2.575829304, 1.959963985, 1.644853627],
    [2.807033768, 2.241402728, 1.959963985],
    [2.935199469, 2.393979800, 2.128045234],
    [3.023341440, 2.497705474, 2.241402728],
    [3.090232306, 2.575829304, 2.326347874],
    [3.143980287, 2.638257273, 2.393979800],
    [3.188815259, 2.690109527, 2.449997661],
    [3.227218426, 2.734368787, 2.497705474],
    [3.260767488, 2.772921295, 2.539184814],
    [3.290526731, 2.807033768, 2.575829304],
    [3.317247362, 2.837596913, 2.608616387],
    [3.341478956, 2.865260239, 2.638257273],
    [3.363635456, 2.890511561, 2.665285106],
    [3.384036252, 2.913726318, 2.690109527],
    [3.402932835, 2.935199469, 2.713051888],
    [3.420526701, 2.955166847, 2.734368787],
    [3.436981724, 2.973819901, 2.754268271],
    [3.452432937, 2.991316115, 2.772921295],
    [3.466992901, 3.007786556, 2.790469991],
];

/// Significance levels with tabulated critical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Significance {
    /// alpha = 0.01
    P01,
    /// alpha = 0.05
    P05,
    /// alpha = 0.10
    P10,
}

impl Significance {
    /// Column of the critical-value tables.
    pub fn column(self) -> usize {
        match self {
            Significance::P01 => 0,
            Significance::P05 => 1,
            Significance::P10 => 2,
        }
    }

    /// The significance level itself.
    pub fn alpha(self) -> f64 {
        match self {
            Significance::P01 => 0.01,
            Significance::P05 => 0.05,
            Significance::P10 => 0.10,
        }
    }
}

impl TryFrom<f64> for Significance {
    type Error = StatysError;

    fn try_from(alpha: f64) -> Result<Self> {
        [Significance::P01, Significance::P05, Significance::P10]
            .into_iter()
            .find(|s| (s.alpha() - alpha).abs() < 1e-12)
            .ok_or_else(|| {
                StatysError::configuration(format!(
                    "alpha = {alpha} has no critical values, use 0.01, 0.05 or 0.10"
                ))
            })
    }
}

/// Post-hoc procedure following a Friedman test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostHoc {
    /// All-pairs comparison.
    #[default]
    Nemenyi,
    /// Comparison against a single control treatment.
    BonferroniDunn,
}

impl PostHoc {
    fn table(self) -> &'static [[f64; 3]] {
        match self {
            PostHoc::Nemenyi => &NEMENYI,
            PostHoc::BonferroniDunn => &BONFERRONI_DUNN,
        }
    }

    /// Critical value for `k` compared treatments.
    ///
    /// # Errors
    /// [`StatysError::Size`] when `k` is zero or beyond the table.
    pub fn critical_value(self, k: usize, significance: Significance) -> Result<f64> {
        let table = self.table();
        if k == 0 || k > table.len() {
            return Err(StatysError::size(format!(
                "{self} critical values are tabulated for 1 to {} ranks, got {k}",
                table.len()
            )));
        }
        Ok(table[k - 1][significance.column()])
    }
}

impl fmt::Display for PostHoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostHoc::Nemenyi => write!(f, "nemenyi"),
            PostHoc::BonferroniDunn => write!(f, "bonferroni-dunn"),
        }
    }
}

impl FromStr for PostHoc {
    type Err = StatysError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nemenyi" => Ok(PostHoc::Nemenyi),
            "bonferroni-dunn" | "bonferroni_dunn" | "bonferroni" => Ok(PostHoc::BonferroniDunn),
            _ => Err(StatysError::configuration(format!("post-hoc `{s}` is not supported"))),
        }
    }
}
