use rand_core::Rng;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A validated per-slot frame-arrival probability in `[0.0, 1.0]`.
///
/// Each node, in each slot, independently receives a new frame with this
/// probability. Constructed via [`ArrivalRate::new`] which rejects NaN,
/// negative and out-of-range values at creation time, so the engines never
/// have to re-check it.
///
/// # Example
///
/// ```
/// use macsim_core::ArrivalRate;
///
/// // programmatic
/// let rate = ArrivalRate::new(0.05).unwrap();
/// assert_eq!(rate.to_string(), "5%");
///
/// // parsed
/// let parsed: ArrivalRate = "5%".parse().unwrap();
/// assert_eq!(parsed, rate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ArrivalRate(f64);

/// Error returned when constructing an [`ArrivalRate`] outside `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, Error)]
#[error("invalid arrival rate ({0}): expected a probability within [0.0, 1.0]")]
pub struct ArrivalRateError(f64);

/// Error returned when parsing an [`ArrivalRate`] from a string.
#[derive(Debug, Error)]
pub enum ArrivalRateParseError {
    /// The string did not end with the required `%` suffix.
    #[error("missing `%` suffix")]
    MissingSuffix,
    /// The percentage before the `%` was not a number.
    #[error("invalid number before `%`")]
    InvalidNumber,
    /// The percentage was outside `0%..=100%`.
    #[error("{0}")]
    OutOfRange(ArrivalRateError),
}

impl ArrivalRate {
    /// The rate at which no traffic is ever generated.
    pub const ZERO: Self = Self(0.0);

    /// Create a new validated arrival rate.
    ///
    /// # Errors
    ///
    /// Returns [`ArrivalRateError`] if `rate` is NaN, negative, or greater
    /// than `1.0`.
    pub fn new(rate: f64) -> Result<Self, ArrivalRateError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(ArrivalRateError(rate));
        }
        Ok(Self(rate))
    }

    /// Returns the inner `f64` value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if a frame arrives this slot.
    ///
    /// The caller provides `rng` so that all simulation randomness is
    /// controlled from a single, seedable source. Any type that implements
    /// [`Rng`] can be used, keeping this method independent of the concrete
    /// generator driving the sweep.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> bool {
        let bits = rng.next_u64();
        let uniform = (bits as f64) * (1.0 / (u64::MAX as f64 + 1.0));
        uniform < self.0
    }
}

impl fmt::Display for ArrivalRate {
    /// Formats as a percentage with up to 2 decimal places.
    ///
    /// - `ArrivalRate::ZERO` → `"0%"`
    /// - `ArrivalRate::new(0.05)` → `"5%"`
    /// - `ArrivalRate::new(0.123)` → `"12.30%"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = self.0 * 100.0;
        if pct.fract() == 0.0 {
            write!(f, "{}%", pct as u64)
        } else {
            write!(f, "{pct:.2}%")
        }
    }
}

impl FromStr for ArrivalRate {
    type Err = ArrivalRateParseError;

    /// Parses a percentage string like `"0%"`, `"5%"`, `"12.30%"`, `"100%"`.
    ///
    /// The `%` suffix is required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(num) = s.strip_suffix('%') else {
            return Err(ArrivalRateParseError::MissingSuffix);
        };
        let pct: f64 = num
            .trim()
            .parse()
            .map_err(|_| ArrivalRateParseError::InvalidNumber)?;
        Self::new(pct / 100.0).map_err(ArrivalRateParseError::OutOfRange)
    }
}
