//! Descriptive measures, pairwise non-parametric tests and Friedman
//! post-hoc analysis over named numeric samples.

mod error;
mod sample;
mod statistics;
mod hypothesis;
pub mod display;

pub use crate::error::{Result, StatysError};
pub use crate::sample::{Axis, Distribution, Sample};
pub use crate::statistics::*;
pub use crate::hypothesis::*;
