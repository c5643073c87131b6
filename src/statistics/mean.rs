use num_traits::{Float, FromPrimitive};

use super::Statistic;

/// Arithmetic mean with **Kahan summation** to keep the rounding error of
/// long or wide-ranged samples bounded.
///
/// Returns NaN for an empty sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<D, T> Statistic<D, T> for Mean
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice: &[T] = data.as_ref();

        if slice.is_empty() {
            return T::nan();
        }

        let mut sum = T::zero();
        let mut c = T::zero();

        for &x in slice {
            let y = x - c;
            let t = sum + y;
            c = (t - sum) - y;
            sum = t;
        }

        sum / T::from_usize(slice.len()).expect("usize fits in float")
    }
}
