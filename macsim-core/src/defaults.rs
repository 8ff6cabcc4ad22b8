//! Reference configuration values.
//!
//! These are the constants of the original hidden-node study and the values
//! [`SimConfiguration::default`] is built from. Every one of them can be
//! overridden per run; nothing in the engines reads them directly.
//!
//! [`SimConfiguration::default`]: crate::SimConfiguration

/// Default simulation horizon, in slots.
///
/// A run always executes exactly this many steps (no early termination,
/// even when every queue has drained).
///
/// ```
/// # use macsim_core::defaults::*;
/// assert_eq!(DEFAULT_SIM_TIME, 1_000);
/// ```
pub const DEFAULT_SIM_TIME: u64 = 1_000;

/// Default number of nodes on the shared medium.
///
/// Six nodes with a visibility range of one is the smallest row that
/// exhibits the hidden-node geometry on both engines.
///
/// ```
/// # use macsim_core::defaults::*;
/// assert_eq!(DEFAULT_NUM_NODES, 6);
/// ```
pub const DEFAULT_NUM_NODES: usize = 6;

/// Default visibility (interference) range, in index distance.
///
/// Two nodes sense each other iff their indices differ by at most this
/// much. See [`Visibility`] for the exact definition.
///
/// ```
/// # use macsim_core::defaults::*;
/// assert_eq!(DEFAULT_VISIBILITY_RANGE, 1);
/// ```
///
/// [`Visibility`]: crate::Visibility
pub const DEFAULT_VISIBILITY_RANGE: usize = 1;

/// Default frame airtime, in slots.
///
/// A successful sender occupies the medium for this many slots, the slot
/// it starts in included.
///
/// ```
/// # use macsim_core::defaults::*;
/// assert_eq!(DEFAULT_FRAME_DURATION, 5);
/// ```
pub const DEFAULT_FRAME_DURATION: u64 = 5;

/// Default upper bound of the random backoff window, in slots.
///
/// After a collision (CSMA) or a failed reservation (MACA) a node waits a
/// fresh uniform draw from `1..=DEFAULT_BACKOFF_MAX` slots before it is
/// eligible again.
///
/// ```
/// # use macsim_core::defaults::*;
/// assert_eq!(DEFAULT_BACKOFF_MAX, 10);
/// ```
pub const DEFAULT_BACKOFF_MAX: u64 = 10;
