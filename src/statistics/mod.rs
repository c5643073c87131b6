/// An estimator computing a `T` from data of type `D`.
pub trait Statistic<D, T> {
    /// Evaluates the estimator on `data`.
    fn compute(&self, data: &D) -> T;
}

mod mean;
mod basic;
mod extremum;
mod median;
mod rank;
pub mod measure;

pub use mean::Mean;
pub use basic::*;
pub use extremum::{Max, Min};
pub use median::Median;
pub use rank::{rankdata, RankTransform};
pub(crate) use rank::tie_sizes;
pub use measure::{measure_pipeline, try_measure_pipeline, Measures};
