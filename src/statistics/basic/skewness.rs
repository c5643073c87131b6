use num_traits::{Float, FromPrimitive};

use super::moments::CentralMoments;
use crate::statistics::Statistic;

/// Sample skewness `g1 = m3 / m2^(3/2)`.
///
/// With `bias = false` the adjusted Fisher-Pearson coefficient
/// `G1 = sqrt(n (n - 1)) / (n - 2) * g1` is reported instead, once there are
/// more than two values. A constant sample has no skewness (NaN).
#[derive(Debug, Clone, Copy)]
pub struct Skewness {
    /// Report the plain moment ratio, uncorrected for sample size.
    pub bias: bool,
}

impl Skewness {
    /// `bias = false` applies the sample-size adjustment.
    pub fn new(bias: bool) -> Self {
        Self { bias }
    }
}

impl Default for Skewness {
    fn default() -> Self {
        Self { bias: true }
    }
}

impl<D, T> Statistic<D, T> for Skewness
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

        let g1 = m.m3 / m.m2.powi(3).sqrt();
        let two = CentralMoments::<T>::constant(2);
        if self.bias || m.n <= two {
            g1
        } else {
            (m.n * (m.n - T::one())).sqrt() / (m.n - two) * g1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const RIGHT_TAIL: [f64; 5] = [1.0, 1.0, 1.0, 2.0, 10.0];

    #[test]
    fn symmetric_sample_has_no_skew() {
        let x = [0.0_f64, 0.1, 0.2, 0.3, 0.4, 0.5];
        assert_abs_diff_eq!(Skewness::default().compute(&x), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn right_tail_is_positive() {
        assert_relative_eq!(Skewness::default().compute(&RIGHT_TAIL), 1.4565472846013436, epsilon = 1e-12);
    }

    #[test]
    fn sample_size_adjustment() {
        assert_relative_eq!(Skewness::new(false).compute(&RIGHT_TAIL), 2.171292493874225, epsilon = 1e-12);

        // two values cannot be adjusted, the moment ratio is kept
        let two = [1.0_f64, 3.0];
        assert_eq!(Skewness::new(false).compute(&two), Skewness::new(true).compute(&two));
    }

    #[test]
    fn degenerate_samples_are_nan() {
        let s: f64 = Skewness::default().compute(&[3.0, 3.0, 3.0]);
        assert!(s.is_nan());
        let s: f64 = Skewness::default().compute(&Vec::<f64>::new());
        assert!(s.is_nan());
    }
}
