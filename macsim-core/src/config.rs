//! Immutable per-run configuration.
//!
//! Every engine call takes an explicit [`SimConfiguration`] value instead of
//! reading process-wide constants, so that sweeps over different
//! topologies can run side by side without interfering.

use crate::{Slot, defaults};
use thiserror::Error;

/// The immutable parameters of one simulation run.
///
/// All fields are required; [`Default`] fills in the reference values from
/// [`defaults`](crate::defaults). Validation happens once, at the engine
/// boundary, before any simulation state is allocated.
///
/// # Example
///
/// ```
/// use macsim_core::SimConfiguration;
///
/// let config = SimConfiguration {
///     num_nodes: 12,
///     visibility_range: 2,
///     ..SimConfiguration::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimConfiguration {
    /// Simulation horizon: a run executes exactly this many slots.
    pub sim_time: u64,
    /// Number of nodes on the medium, indexed `0..num_nodes`.
    pub num_nodes: usize,
    /// Maximum index distance at which two nodes sense each other.
    pub visibility_range: usize,
    /// Slots a successful transmission occupies the medium for.
    pub frame_duration: u64,
    /// Upper bound (inclusive) of the uniform random backoff window.
    pub backoff_max: u64,
}

/// Error returned when a [`SimConfiguration`] is rejected at the engine
/// boundary.
///
/// There are no recoverable-error paths inside a run itself; once the
/// configuration is accepted, a run always completes all `sim_time` slots.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Fewer than two nodes: an interference model is meaningless.
    #[error("need at least 2 nodes for an interference model, got {num_nodes}")]
    NotEnoughNodes { num_nodes: usize },
    /// A zero-slot horizon would simulate nothing.
    #[error("sim_time must be positive")]
    SimTimeZero,
    /// A zero-slot frame would never occupy the medium.
    #[error("frame_duration must be positive")]
    FrameDurationZero,
    /// The backoff draw is uniform over `1..=backoff_max`; the bound must
    /// be at least 1.
    #[error("backoff_max must be at least 1")]
    BackoffMaxZero,
}

impl Default for SimConfiguration {
    fn default() -> Self {
        Self {
            sim_time: defaults::DEFAULT_SIM_TIME,
            num_nodes: defaults::DEFAULT_NUM_NODES,
            visibility_range: defaults::DEFAULT_VISIBILITY_RANGE,
            frame_duration: defaults::DEFAULT_FRAME_DURATION,
            backoff_max: defaults::DEFAULT_BACKOFF_MAX,
        }
    }
}

impl SimConfiguration {
    /// Check the configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::NotEnoughNodes`] if `num_nodes < 2`.
    /// - [`ConfigurationError::SimTimeZero`] if `sim_time == 0`.
    /// - [`ConfigurationError::FrameDurationZero`] if `frame_duration == 0`.
    /// - [`ConfigurationError::BackoffMaxZero`] if `backoff_max == 0`.
    ///
    /// `visibility_range` accepts any value, `0` included (a deaf row where
    /// nobody senses anybody is a valid, if degenerate, topology).
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.num_nodes < 2 {
            return Err(ConfigurationError::NotEnoughNodes {
                num_nodes: self.num_nodes,
            });
        }
        if self.sim_time == 0 {
            return Err(ConfigurationError::SimTimeZero);
        }
        if self.frame_duration == 0 {
            return Err(ConfigurationError::FrameDurationZero);
        }
        if self.backoff_max == 0 {
            return Err(ConfigurationError::BackoffMaxZero);
        }
        Ok(())
    }

    /// Iterate the clock over the whole horizon, `Slot(0)` to
    /// `Slot(sim_time - 1)` inclusive.
    pub fn slots(&self) -> impl Iterator<Item = Slot> {
        (0..self.sim_time).map(Slot::new)
    }
}
