//! Run statistics and observability types.
//!
//! [`RunStats`] is the final snapshot an engine returns once a run has
//! executed all of its slots. The counters only ever grow during a run.

use std::fmt;

/// Outcome counters of one finished simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// Frames that made it onto the medium uncontested.
    pub successes: u64,
    /// Frames lost to contention: same-slot collisions under CSMA, refused
    /// reservations under MACA. Each lost frame is dropped, never retried.
    pub collisions: u64,
    /// Frames the traffic generator offered over the whole horizon.
    ///
    /// `successes + collisions <= frames_offered` always holds: frames still
    /// queued when the horizon ends are neither delivered nor lost.
    pub frames_offered: u64,
}

impl RunStats {
    /// Fraction of offered frames that were delivered, in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` when no traffic was offered.
    pub fn delivery_ratio(&self) -> f64 {
        if self.frames_offered == 0 {
            0.0
        } else {
            self.successes as f64 / self.frames_offered as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{successes} delivered, {collisions} lost of {offered} offered",
            successes = self.successes,
            collisions = self.collisions,
            offered = self.frames_offered,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_ratio_handles_idle_runs() {
        assert_eq!(RunStats::default().delivery_ratio(), 0.0);
    }

    #[test]
    fn delivery_ratio() {
        let stats = RunStats {
            successes: 3,
            collisions: 1,
            frames_offered: 4,
        };
        assert_eq!(stats.delivery_ratio(), 0.75);
    }

    #[test]
    fn display() {
        let stats = RunStats {
            successes: 10,
            collisions: 2,
            frames_offered: 15,
        };
        assert_eq!(stats.to_string(), "10 delivered, 2 lost of 15 offered");
    }
}
