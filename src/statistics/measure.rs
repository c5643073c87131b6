//! Measures applied independently to every sample of a [`Distribution`].

use std::borrow::Cow;

use indexmap::IndexMap;
use log::debug;

use super::{Kurtosis, Max, Mean, Median, Min, RankTransform, Skewness, Statistic, StdDev, Variance};
use crate::error::Result;
use crate::sample::{Axis, Distribution, Sample};

/// Per-sample outputs keyed by sample name, in distribution order.
pub type Measures<T> = IndexMap<String, T>;

/// Applies `measure` to every sample of `dist`.
pub fn measure_pipeline<T, F>(measure: F, dist: &Distribution) -> Measures<T>
where
    F: Fn(&Sample) -> T,
{
    dist.iter()
        .map(|(attr, value)| (attr.clone(), measure(value)))
        .collect()
}

/// Fallible variant of [`measure_pipeline`]; the first error is returned as is.
pub fn try_measure_pipeline<T, E, F>(measure: F, dist: &Distribution) -> std::result::Result<Measures<T>, E>
where
    F: Fn(&Sample) -> std::result::Result<T, E>,
{
    dist.iter()
        .map(|(attr, value)| Ok((attr.clone(), measure(value)?)))
        .collect()
}

fn scalar<S>(statistic: S, dist: &Distribution) -> Measures<f64>
where
    S: for<'a> Statistic<Cow<'a, [f64]>, f64>,
{
    measure_pipeline(|value| statistic.compute(&value.values()), dist)
}

/// Kurtosis (Fisher, biased) of every sample.
pub fn kurtosis(dist: &Distribution) -> Measures<f64> {
    kurtosis_with(dist, true)
}

/// Kurtosis of every sample, adjusted for sample size unless `bias`.
pub fn kurtosis_with(dist: &Distribution, bias: bool) -> Measures<f64> {
    debug!("Calculating kurtosis ...");
    let output = scalar(Kurtosis::new(bias), dist);
    debug!("Kurtosis calculated.");
    output
}

/// Maximum value of every sample.
pub fn max(dist: &Distribution) -> Measures<f64> {
    debug!("Finding maximum value ...");
    let output = scalar(Max, dist);
    debug!("Maximum value found.");
    output
}

/// Mean of every sample.
pub fn mean(dist: &Distribution) -> Measures<f64> {
    debug!("Calculating mean ...");
    let output = scalar(Mean, dist);
    debug!("Mean calculated.");
    output
}

/// Median of every sample.
pub fn median(dist: &Distribution) -> Measures<f64> {
    debug!("Calculating median ...");
    let output = scalar(Median, dist);
    debug!("Median calculated.");
    output
}

/// Minimum value of every sample.
pub fn min(dist: &Distribution) -> Measures<f64> {
    debug!("Finding minimum value ...");
    let output = scalar(Min, dist);
    debug!("Minimum value found.");
    output
}

/// Ranks of every sample along `axis`.
///
/// # Errors
/// [`StatysError::Size`](crate::StatysError::Size) when a sample has no such axis.
pub fn rank(dist: &Distribution, axis: Axis) -> Result<Measures<Sample>> {
    debug!("Calculating ranks along {axis:?} ...");
    let transform = RankTransform::new(axis);
    let output = try_measure_pipeline(|value| transform.compute(value), dist)?;
    debug!("Ranks calculated.");
    Ok(output)
}

/// Skewness (biased) of every sample.
pub fn skewness(dist: &Distribution) -> Measures<f64> {
    skewness_with(dist, true)
}

/// Skewness of every sample, adjusted for sample size unless `bias`.
pub fn skewness_with(dist: &Distribution, bias: bool) -> Measures<f64> {
    debug!("Calculating skewness ...");
    let output = scalar(Skewness::new(bias), dist);
    debug!("Skewness calculated.");
    output
}

/// Population standard deviation of every sample.
pub fn std(dist: &Distribution) -> Measures<f64> {
    debug!("Calculating standard deviation ...");
    let output = scalar(StdDev::default(), dist);
    debug!("Standard deviation calculated.");
    output
}

/// Population variance of every sample.
pub fn var(dist: &Distribution) -> Measures<f64> {
    debug!("Calculating variance ...");
    let output = scalar(Variance::default(), dist);
    debug!("Variance calculated.");
    output
}
