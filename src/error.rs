//! Error kinds raised by distributions, pipelines and post-hoc lookups.

use log::error;
use thiserror::Error;

/// Unified error type for every `statys` operation.
#[derive(Debug, Error)]
pub enum StatysError {
    /// Wrong number or shape of supplied arguments (e.g. malformed result keys).
    #[error("ArgumentError: {0}")]
    Argument(String),

    /// Wrong length or size of inputs (mismatched paired samples, missing axis).
    #[error("SizeError: {0}")]
    Size(String),

    /// A sample is not a homogeneous numeric sequence.
    #[error("TypeError: {0}")]
    Type(String),

    /// A value is out of its admissible range.
    #[error("ValueError: {0}")]
    Value(String),

    /// Unsupported significance level or post-hoc method.
    #[error("ConfigurationError: {0}")]
    Configuration(String),

    /// I/O error while reading a distribution from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error while reading a distribution.
    #[error("CSV parsing error: {0}")]
    Csv(csv::Error),
}

impl From<csv::Error> for StatysError {
    /// I/O failures surfaced by the CSV reader become [`StatysError::Io`].
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.into())
        } else {
            Self::Csv(err)
        }
    }
}

impl StatysError {
    /// Builds an [`StatysError::Argument`] and logs it.
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::logged(Self::Argument(msg.into()))
    }

    /// Builds a [`StatysError::Size`] and logs it.
    pub fn size(msg: impl Into<String>) -> Self {
        Self::logged(Self::Size(msg.into()))
    }

    /// Builds a [`StatysError::Type`] and logs it.
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::logged(Self::Type(msg.into()))
    }

    /// Builds a [`StatysError::Value`] and logs it.
    pub fn value(msg: impl Into<String>) -> Self {
        Self::logged(Self::Value(msg.into()))
    }

    /// Builds a [`StatysError::Configuration`] and logs it.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::logged(Self::Configuration(msg.into()))
    }

    fn logged(err: Self) -> Self {
        error!("{err}.");
        err
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StatysError>;
