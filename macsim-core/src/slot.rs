use std::fmt;

/// A discrete simulation time step.
///
/// The clock advances from `Slot::ZERO` to `Slot(sim_time - 1)` inclusive;
/// one slot is one unit of simulated time, and every per-node countdown
/// decrements at most once per slot.
///
/// ```
/// # use macsim_core::Slot;
/// let first = Slot::ZERO;
/// let second = first.next();
/// assert!(first < second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(C)]
pub struct Slot(u64);

impl Slot {
    pub const ZERO: Self = Slot(0);

    /// Create a slot at the given step index.
    #[inline(always)]
    pub const fn new(step: u64) -> Self {
        Self(step)
    }

    /// The slot immediately after this one.
    #[must_use = "function does not modify the current value"]
    #[inline(always)]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    #[inline(always)]
    pub fn into_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for Slot {
    fn from(step: u64) -> Self {
        Self::new(step)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_steps() {
        assert!(Slot::ZERO < Slot::ZERO.next());
        assert!(Slot::new(41) < Slot::new(42));
    }

    #[test]
    fn display() {
        assert_eq!(Slot::new(42).to_string(), "42");
    }
}
