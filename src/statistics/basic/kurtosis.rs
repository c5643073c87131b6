use num_traits::{Float, FromPrimitive};

use super::moments::CentralMoments;
use crate::statistics::Statistic;

/// Excess (Fisher) kurtosis `g2 = m4 / m2^2 - 3`, zero for a normal sample.
///
/// With `bias = false` and more than three values the sample-size adjusted
/// `G2 = (n - 1) / ((n - 2)(n - 3)) * ((n + 1) g2 + 6)` is reported.
#[derive(Debug, Clone, Copy)]
pub struct Kurtosis {
    /// Report the plain moment ratio, uncorrected for sample size.
    pub bias: bool,
}

impl Kurtosis {
    /// `bias = false` applies the sample-size adjustment.
    pub fn new(bias: bool) -> Self {
        Self { bias }
    }
}

impl Default for Kurtosis {
    fn default() -> Self {
        Self { bias: true }
    }
}

impl<D, T> Statistic<D, T> for Kurtosis
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let Some(m) = CentralMoments::of(data.as_ref()) else {
            return T::nan();
        };
        if m.m2 == T::zero() {
            return T::nan();
        }

        let c = CentralMoments::<T>::constant;
        let g2 = m.m4 / (m.m2 * m.m2) - c(3);
        if self.bias || m.n <= c(3) {
            g2
        } else {
            let n = m.n;
            (n - T::one()) / ((n - c(2)) * (n - c(3))) * ((n + T::one()) * g2 + c(6))
        }
    }
}
