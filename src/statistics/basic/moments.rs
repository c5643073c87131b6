use num_traits::{Float, FromPrimitive};

use crate::statistics::{Mean, Statistic};

/// Compensated running sum.
#[derive(Clone, Copy)]
struct Kahan<T> {
    sum: T,
    c: T,
}

impl<T: Float> Kahan<T> {
    fn new() -> Self {
        Self { sum: T::zero(), c: T::zero() }
    }

    fn add(&mut self, x: T) {
        let y = x - self.c;
        let t = self.sum + y;
        self.c = (t - self.sum) - y;
        self.sum = t;
    }
}

/// Central moments `m2`, `m3`, `m4` (divided by `n`) of a sample.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CentralMoments<T> {
    /// Sample size.
    pub n: T,
    pub m2: T,
    pub m3: T,
    pub m4: T,
}

impl<T: Float + FromPrimitive> CentralMoments<T> {
    /// `None` for an empty sample.
    pub fn of(slice: &[T]) -> Option<Self> {
        if slice.is_empty() {
            return None;
        }
        let mean: T = Mean.compute(&slice);

        let (mut s2, mut s3, mut s4) = (Kahan::new(), Kahan::new(), Kahan::new());
        for &x in slice {
            let d = x - mean;
            let d2 = d * d;
            s2.add(d2);
            s3.add(d2 * d);
            s4.add(d2 * d2);
        }

        let n = T::from_usize(slice.len()).expect("usize fits in float");
        Some(Self { n, m2: s2.sum / n, m3: s3.sum / n, m4: s4.sum / n })
    }

    /// `n` as a float.
    pub fn constant(n: usize) -> T {
        T::from_usize(n).expect("small constant fits in float")
    }
}
