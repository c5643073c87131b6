use num_traits::{Float, FromPrimitive};

use super::Statistic;

/// Sample median, averaging the two middle order statistics for even sizes.
///
/// Matches `numpy.median`. Any NaN makes the median NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl<D, T> Statistic<D, T> for Median
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();
        let n = slice.len();

        if n == 0 || slice.iter().any(|x| x.is_nan()) {
            return T::nan();
        }

        let mut sorted = slice.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("NaN filtered above"));

        if n % 2 == 1 {
            sorted[n / 2]
        } else {
            let two = T::from_u8(2).expect("2 fits in float");
            (sorted[n / 2 - 1] + sorted[n / 2]) / two
        }
    }
}
