//! The two discrete-time arbitration engines.
//!
//! Both engines consume the same per-node arrival queues and the same
//! [`Visibility`] model; they differ only in *where* they sense the medium:
//! CSMA around the sender, MACA around the intended receiver. The shared
//! plumbing lives here.
//!
//! [`Visibility`]: crate::Visibility

mod csma;
mod maca;

pub use self::{
    csma::{run_csma, simulate_csma},
    maca::{run_maca, simulate_maca},
};

use crate::{Node, NodeId, Traffic};
use rand_core::Rng;

/// Draw a fresh backoff, uniform over `1..=backoff_max`.
///
/// `backoff_max` is validated to be at least 1 at the engine boundary.
pub(crate) fn draw_backoff<R: Rng>(rng: &mut R, backoff_max: u64) -> u64 {
    1 + rng.next_u64() % backoff_max
}

/// Turn one run's traffic into the engine-owned node array, indexed by
/// [`NodeId`] in row order.
pub(crate) fn build_nodes(traffic: Traffic) -> Vec<Node> {
    traffic
        .into_queues()
        .into_iter()
        .enumerate()
        .map(|(index, queue)| Node::new(NodeId::new(index), queue))
        .collect()
}
