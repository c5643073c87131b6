//! Rank transform.
//!
//! [`rankdata`] assigns ranks `1..=k` to `k` values, tied values receive the
//! average of the ranks they span. [`RankTransform`] applies it to a
//! [`Sample`] along an [`Axis`].

use super::Statistic;
use crate::error::{Result, StatysError};
use crate::sample::{Axis, Sample};

/// Ranks `data`, averaging ranks over ties.
///
/// Empty input produces empty output. NaN sorts after every number.
pub fn rankdata(data: &[f64]) -> Vec<f64> {
    let n = data.len();
    let mut indexed: Vec<(f64, usize)> = data.iter().copied().enumerate().map(|(i, v)| (v, i)).collect();
    indexed.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        // Find the end of the tie group.
        let mut j = i + 1;
        while j < n && indexed[j].0.total_cmp(&indexed[i].0).is_eq() {
            j += 1;
        }

        // Ranks in the group are (i+1)..=j, their mean is (i+1+j)/2.
        let rank_val = (i + 1 + j) as f64 / 2.0;
        for &(_, orig_idx) in &indexed[i..j] {
            ranks[orig_idx] = rank_val;
        }

        i = j;
    }

    ranks
}

/// Sizes of the groups of equal values in `data`, singletons included.
pub(crate) fn tie_sizes(data: &[f64]) -> Vec<usize> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut sizes = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j].total_cmp(&sorted[i]).is_eq() {
            j += 1;
        }
        sizes.push(j - i);
        i = j;
    }
    sizes
}

/// Rank transform of a sample along an axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankTransform {
    /// Axis each group of ranks runs along.
    pub axis: Axis,
}

impl RankTransform {
    /// Ranks along `axis`.
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }
}

impl Statistic<Sample, Result<Sample>> for RankTransform {
    fn compute(&self, data: &Sample) -> Result<Sample> {
        match (self.axis, data) {
            (Axis::Flat, _) => Ok(Sample::Vector(rankdata(&data.values()))),
            (Axis::At(0), Sample::Vector(v)) => Ok(Sample::Vector(rankdata(v))),
            (Axis::At(0), Sample::Matrix(rows)) => {
                let width = rows.first().map_or(0, Vec::len);
                let mut ranked = vec![vec![0.0; width]; rows.len()];
                for col in 0..width {
                    let column: Vec<f64> = rows.iter().map(|r| r[col]).collect();
                    for (row, r) in rankdata(&column).into_iter().enumerate() {
                        ranked[row][col] = r;
                    }
                }
                Ok(Sample::Matrix(ranked))
            }
            (Axis::At(1), Sample::Matrix(rows)) => {
                Ok(Sample::Matrix(rows.iter().map(|r| rankdata(r)).collect()))
            }
            (Axis::At(axis), _) => Err(StatysError::size(format!(
                "axis {axis} is out of bounds for a sample of dimension {}",
                data.ndim()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_ties_is_a_permutation() {
        assert_eq!(rankdata(&[3.0, 1.0, 2.0]), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn ties_share_the_average_rank() {
        // sorted: 1(1), 2(2), 2(3), 3(4) -> ties at 2 get (2+3)/2 = 2.5
        assert_eq!(rankdata(&[3.0, 1.0, 2.0, 2.0]), vec![4.0, 1.0, 2.5, 2.5]);
        assert_eq!(rankdata(&[5.0, 5.0, 5.0]), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn empty() {
        assert_eq!(rankdata(&[]), Vec::<f64>::new());
    }

    #[test]
    fn tie_groups() {
        assert_eq!(tie_sizes(&[2.0, 1.0, 2.0, 3.0, 2.0]), vec![1, 3, 1]);
        assert!(tie_sizes(&[]).is_empty());
    }

    #[test]
    fn flat_axis_ranks_every_value() {
        let x = Sample::from([[0.0, 0.1, 0.2], [0.0, 0.1, 0.2]]);
        let ranked = RankTransform::default().compute(&x).unwrap();
        assert_eq!(ranked, Sample::Vector(vec![1.5, 3.5, 5.5, 1.5, 3.5, 5.5]));
    }

    #[test]
    fn axis_one_ranks_rows() {
        let x = Sample::from([[0.3, 0.1, 0.2], [0.0, 0.5, 0.2]]);
        let ranked = RankTransform::new(Axis::At(1)).compute(&x).unwrap();
        assert_eq!(ranked, Sample::Matrix(vec![vec![3.0, 1.0, 2.0], vec![1.0, 3.0, 2.0]]));
    }

    #[test]
    fn axis_zero_ranks_columns() {
        let x = Sample::from([[0.3, 0.1], [0.0, 0.5], [0.2, 0.5]]);
        let ranked = RankTransform::new(Axis::At(0)).compute(&x).unwrap();
        assert_eq!(
            ranked,
            Sample::Matrix(vec![vec![3.0, 1.0], vec![1.0, 2.5], vec![2.0, 2.5]])
        );
    }

    #[test]
    fn vectors_have_no_second_axis() {
        let x = Sample::from(vec![0.1, 0.2]);
        assert_eq!(RankTransform::new(Axis::At(0)).compute(&x).unwrap(), Sample::Vector(vec![1.0, 2.0]));

        let err = RankTransform::new(Axis::At(1)).compute(&x).unwrap_err();
        assert!(matches!(err, StatysError::Size(_)));
    }
}
