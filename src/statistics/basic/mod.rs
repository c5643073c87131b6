mod moments;
mod variance;
mod skewness;
mod kurtosis;

pub use variance::{StdDev, Variance};
pub use skewness::Skewness;
pub use kurtosis::Kurtosis;
