use num_traits::{Float, FromPrimitive};
use crate::statistics::*;

/// Variance with a configurable delta degrees of freedom.
#[derive(Debug, Clone, Copy)]
pub struct Variance {
    /// Subtracted from the sample size in the divisor.
    pub ddof: usize,
}

impl Variance {
    /// Creates a new `Variance` estimator with the given degrees of freedom adjustment.
    ///
    /// - `ddof = 0`: population variance (biased), the default, as `numpy.var`
    /// - `ddof = 1`: sample variance (Bessel's correction)
    pub fn new(ddof: usize) -> Self {
        Variance { ddof }
    }
}

impl Default for Variance {
    fn default() -> Self {
        Variance { ddof: 0 }
    }
}

impl<D, T> Statistic<D, T> for Variance
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive + Copy,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();

        if slice.len() <= self.ddof {
            return T::nan();
        }

        let mean = Mean.compute(data);

        // Kahan summation for squared deviations
        let mut sq_sum = T::zero();
        let mut c2 = T::zero();
        for &x in slice {
            let dev = x - mean;
            let y = dev * dev - c2;
            let t = sq_sum + y;
            c2 = (t - sq_sum) - y;
            sq_sum = t;
        }

        let dof = T::from_usize(slice.len() - self.ddof).expect("usize fits in float");
        sq_sum / dof
    }
}

/// Standard deviation, the square root of [`Variance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDev {
    /// Estimator whose square root is taken.
    pub variance: Variance,
}

impl StdDev {
    /// Standard deviation with `ddof` delta degrees of freedom.
    pub fn new(ddof: usize) -> Self {
        StdDev { variance: Variance::new(ddof) }
    }
}

impl<D, T> Statistic<D, T> for StdDev
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive + Copy,
{
    fn compute(&self, data: &D) -> T {
        self.variance.compute(data).sqrt()
    }
}
