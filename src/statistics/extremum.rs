use num_traits::Float;

use super::Statistic;

/// Largest value of a sample. NaN propagates, an empty sample yields NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

/// Smallest value of a sample. NaN propagates, an empty sample yields NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

fn extremum<T: Float>(slice: &[T], pick: impl Fn(T, T) -> T) -> T {
    let mut iter = slice.iter().copied();
    let Some(first) = iter.next() else {
        return T::nan();
    };

    iter.fold(first, |acc, x| {
        if acc.is_nan() || x.is_nan() {
            T::nan()
        } else {
            pick(acc, x)
        }
    })
}

impl<D, T> Statistic<D, T> for Max
where
    D: AsRef<[T]>,
    T: Float,
{
    fn compute(&self, data: &D) -> T {
        extremum(data.as_ref(), T::max)
    }
}

impl<D, T> Statistic<D, T> for Min
where
    D: AsRef<[T]>,
    T: Float,
{
    fn compute(&self, data: &D) -> T {
        extremum(data.as_ref(), T::min)
    }
}
