use crate::error::SpecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// An inclusive `min..=max` range of counts.
///
/// Persisted as a two-element JSON array, `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct SizeRange {
    pub min: usize,
    pub max: usize,
}

impl SizeRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// A range holding exactly one value.
    pub const fn exactly(value: usize) -> Self {
        Self::new(value, value)
    }

    pub fn as_range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    fn validate(&self, field: &'static str) -> Result<(), SpecError> {
        if self.min == 0 {
            return Err(SpecError::ZeroMinimum { field });
        }
        if self.min > self.max {
            return Err(SpecError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl From<(usize, usize)> for SizeRange {
    fn from((min, max): (usize, usize)) -> Self {
        Self { min, max }
    }
}

impl From<SizeRange> for (usize, usize) {
    fn from(range: SizeRange) -> Self {
        (range.min, range.max)
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...{}", self.min, self.max)
    }
}

/// Structural parameters for one generated dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Vertices per rank.
    pub width: SizeRange,
    /// Number of ranks.
    pub height: SizeRange,
    /// Probability that a vertex in rank `i - 1` points at a vertex in rank `i`.
    pub density: f64,
    pub seed: u64,
}

impl GraphSpec {
    pub fn new(width: SizeRange, height: SizeRange, density: f64, seed: u64) -> Self {
        Self {
            width,
            height,
            density,
            seed,
        }
    }

    /// Rejects empty or zero-based ranges and densities that are not probabilities.
    pub fn validate(&self) -> Result<(), SpecError> {
        self.width.validate("width")?;
        self.height.validate("height")?;
        if !(0.0..=1.0).contains(&self.density) {
            return Err(SpecError::InvalidDensity(self.density));
        }
        Ok(())
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }
}

impl Default for GraphSpec {
    /// A tall, fairly dense graph: 1 to 10 vertices per rank, 15 to 20 ranks.
    fn default() -> Self {
        Self::new(SizeRange::new(1, 10), SizeRange::new(15, 20), 0.8, 0)
    }
}
