use crate::{ArrivalRate, SimConfiguration, Slot};
use rand_core::Rng;
use std::collections::VecDeque;

/// Per-node frame-arrival queues for one run.
///
/// One FIFO of arrival [`Slot`]s per node, earliest first. Queues built by
/// [`Traffic::generate`] are non-decreasing by construction (slots are
/// visited in increasing order) and hold at most one arrival per node per
/// slot.
pub struct Traffic(Vec<VecDeque<Slot>>);

impl Traffic {
    /// Draw one run's worth of traffic.
    ///
    /// For every slot `t` in `0..sim_time` and every node `i`, in that
    /// order (`t`-major, node-minor), one uniform variate is consumed from
    /// `rng`; node `i` gains an arrival at `t` when the draw lands below
    /// `rate`. The draw order is part of the reproducibility contract:
    /// replaying the same generator state yields the same traffic.
    pub fn generate<R: Rng>(
        rate: ArrivalRate,
        config: &SimConfiguration,
        rng: &mut R,
    ) -> Self {
        let mut queues = vec![VecDeque::new(); config.num_nodes];
        for slot in config.slots() {
            for queue in queues.iter_mut() {
                if rate.sample(rng) {
                    queue.push_back(slot);
                }
            }
        }
        Self(queues)
    }

    /// Build scripted traffic from explicit per-node arrival slots.
    ///
    /// Intended for tests and examples that need literal contention
    /// scenarios. Arrival slots must be given in non-decreasing order per
    /// node, mirroring what [`Traffic::generate`] guarantees.
    pub fn from_arrivals<I, A>(arrivals: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: IntoIterator<Item = u64>,
    {
        Self(
            arrivals
                .into_iter()
                .map(|node| node.into_iter().map(Slot::new).collect())
                .collect(),
        )
    }

    /// Number of per-node queues.
    pub fn num_nodes(&self) -> usize {
        self.0.len()
    }

    /// Total number of frames offered across all nodes.
    pub fn total_frames(&self) -> u64 {
        self.0.iter().map(|queue| queue.len() as u64).sum()
    }

    pub(crate) fn into_queues(self) -> Vec<VecDeque<Slot>> {
        self.0
    }
}
