//! Scoring strategies
//!
//! A strategy reduces the bucket sizes produced by partitioning the
//! candidates with one guess to a single score. Lower scores rank first.

use crate::error::{Error, InputError, Result};
use std::fmt;
use std::str::FromStr;

/// How bucket sizes are reduced to a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Size of the largest bucket (minimax)
    #[default]
    WorstCase,
    /// Size of the smallest bucket
    BestCase,
    /// Expected bucket size
    Mean,
    /// Root of the mean squared bucket size
    SquareMeanRoot,
}

impl Strategy {
    pub const ALL: [Self; 4] = [
        Self::WorstCase,
        Self::BestCase,
        Self::Mean,
        Self::SquareMeanRoot,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WorstCase => "worst_case",
            Self::BestCase => "best_case",
            Self::Mean => "mean",
            Self::SquareMeanRoot => "square_mean_root",
        }
    }

    /// Whether [`Strategy::reduce`] can score with this strategy
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::WorstCase)
    }

    /// Fail with `NotImplemented` unless this strategy can be scored
    ///
    /// # Errors
    /// Returns `Error::NotImplemented` for strategies without a reduction.
    pub fn ensure_implemented(self) -> Result<()> {
        if self.is_implemented() {
            Ok(())
        } else {
            Err(Error::NotImplemented(self))
        }
    }

    /// Reduce non-empty bucket sizes to a score
    ///
    /// An empty slice scores 0.
    ///
    /// # Errors
    /// Returns `Error::NotImplemented` for strategies without a reduction.
    ///
    /// # Examples
    /// ```
    /// use wordle_partition::solver::Strategy;
    ///
    /// assert_eq!(Strategy::WorstCase.reduce(&[3, 7, 1]).unwrap(), 7.0);
    /// assert!(Strategy::Mean.reduce(&[3, 7, 1]).is_err());
    /// ```
    pub fn reduce(self, bucket_sizes: &[usize]) -> Result<f64> {
        match self {
            Self::WorstCase => Ok(bucket_sizes.iter().copied().max().unwrap_or(0) as f64),
            Self::BestCase | Self::Mean | Self::SquareMeanRoot => Err(Error::NotImplemented(self)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Parse a strategy name; `-` and `_` are interchangeable
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| {
                InputError::UnknownStrategy {
                    name: s.to_string(),
                }
                .into()
            })
    }
}
