use std::cmp::Ordering;
use std::fmt;

use crate::error::InvalidQualityError;

/// A normalized `q` weight in `[0, 1]`.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Quality(f64);

impl Quality {
    pub const ZERO: Quality = Quality(0.0);
    pub const ONE: Quality = Quality(1.0);

    /// Interprets the raw value of a `q` parameter.
    ///
    /// Absent, non-numeric and out-of-range values all become `1`. Values
    /// outside `[0, 1]` are not clamped to the nearest bound.
    pub fn from_param(value: Option<&str>) -> Self {
        value
            .and_then(|s| s.parse::<f64>().ok())
            .and_then(|v| Quality::try_from(v).ok())
            .unwrap_or(Quality::ONE)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Quality::ONE
    }
}

impl TryFrom<f64> for Quality {
    type Error = InvalidQualityError;

    #[inline]
    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if (0.0..=1.0).contains(&v) {
            // folds -0.0 into 0.0
            Ok(Quality(v + 0.0))
        } else {
            Err(InvalidQualityError)
        }
    }
}

impl From<Quality> for f64 {
    fn from(source: Quality) -> f64 {
        source.0
    }
}

// NaN is rejected at construction, so the order is total.
impl Eq for Quality {}

impl Ord for Quality {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Quality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
