use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Iter;
use log::{debug, info};
use serde::Serialize;

use super::Sample;
use crate::error::Result;

/// An ordered set of named samples, the population under analysis.
///
/// Samples are named `arg0`, `arg1`, … by the position they were supplied
/// in. The set cannot be modified after construction.
///
/// # Example
/// ```rust
/// use statys::Distribution;
///
/// let d = Distribution::new([
///     vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5],
///     vec![0.07, 0.14, 0.72, 0.32, 0.59, 0.43],
/// ]).unwrap();
///
/// let names: Vec<&str> = d.names().collect();
/// assert_eq!(names, ["arg0", "arg1"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    samples: IndexMap<String, Sample>,
}

impl Distribution {
    /// Builds a distribution from positional samples.
    ///
    /// # Errors
    /// [`StatysError::Type`](crate::StatysError::Type) when a matrix sample
    /// is not rectangular, naming the offending `argN`.
    pub fn new<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Sample>,
    {
        let args: Vec<Sample> = args.into_iter().map(Into::into).collect();
        info!("Initializing distribution with {} arguments ...", args.len());

        let mut samples = IndexMap::with_capacity(args.len());
        for (i, arg) in args.into_iter().enumerate() {
            let attr = format!("arg{i}");
            arg.validate(&attr)?;
            samples.insert(attr, arg);
        }

        let dist = Self { samples };
        debug!("{dist}");
        info!("Distribution initialized.");

        Ok(dist)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the distribution holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Looks a sample up by its generated name.
    pub fn get(&self, name: &str) -> Option<&Sample> {
        self.samples.get(name)
    }

    /// Sample names in construction order.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone {
        self.samples.keys().map(String::as_str)
    }

    /// `(name, sample)` pairs in construction order.
    pub fn iter(&self) -> Iter<'_, String, Sample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = (&'a String, &'a Sample);
    type IntoIter = Iter<'a, String, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, sample)) in self.samples.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {sample}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatysError;

    #[test]
    fn names_follow_positions() {
        let d = Distribution::new([vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let names: Vec<&str> = d.names().collect();
        assert_eq!(names, ["arg0", "arg1", "arg2"]);
        assert_eq!(d.get("arg2"), Some(&Sample::Vector(vec![3.0])));
    }

    #[test]
    fn names_can_be_walked_twice() {
        let d = Distribution::new([vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let names = d.names();
        let pairs: Vec<(&str, &str)> = names
            .clone()
            .flat_map(|a| names.clone().filter(move |&b| b != a).map(move |b| (a, b)))
            .collect();

        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], ("arg0", "arg1"));
        assert_eq!(pairs[5], ("arg2", "arg1"));
    }

    #[test]
    fn mixed_vectors_and_matrices() {
        let d = Distribution::new([
            Sample::from(vec![0.1, 0.2]),
            Sample::from(vec![vec![0.3, 0.4], vec![0.5, 0.6]]),
        ])
        .unwrap();

        let dims: Vec<usize> = d.iter().map(|(_, s)| s.ndim()).collect();
        assert_eq!(dims, [1, 2]);
    }

    #[test]
    fn ragged_argument_names_its_position() {
        let err = Distribution::new([
            Sample::from(vec![0.1, 0.2]),
            Sample::from(vec![vec![0.3, 0.4], vec![0.5]]),
        ])
        .unwrap_err();

        assert!(matches!(err, StatysError::Type(ref msg) if msg.contains("`arg1`")));
    }

    #[test]
    fn display_lists_samples_in_order() {
        let d = Distribution::new([vec![1.0, 2.0], vec![3.0]]).unwrap();
        assert_eq!(d.to_string(), "{arg0: [1.0, 2.0], arg1: [3.0]}");
    }

    #[test]
    fn empty_distribution() {
        let d = Distribution::new(Vec::<Vec<f64>>::new()).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
    }
}
