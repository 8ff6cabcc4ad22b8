//! Carrier-Sense Multiple Access: sense-before-send at the *sender*.
//!
//! Each slot, every node not sitting out a backoff window checks whether any
//! node it can see is mid-transmission; if not, it becomes a candidate. All
//! candidates of a slot are collected before arbitration, so within a slot
//! the order nodes are examined in does not matter. More than one candidate
//! is a collision — the model has no receiver-side check, which is exactly
//! the hidden-node defect being studied: two mutually invisible senders both
//! sense "idle" and transmit into each other.

use super::{build_nodes, draw_backoff};
use crate::{
    ArrivalRate, ConfigurationError, RunStats, SimConfiguration, Traffic, Visibility,
};
use rand_core::Rng;

/// Run one CSMA simulation: generate traffic at `rate`, then arbitrate the
/// medium for `config.sim_time` slots.
///
/// All traffic-generation draws are consumed from `rng` before any backoff
/// draw, in `(slot, node)` order; backoff draws then follow in arbitration
/// order. Replaying the same generator state reproduces the run exactly.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] if `config` is rejected; see
/// [`SimConfiguration::validate`]. No simulation state is allocated in that
/// case.
pub fn simulate_csma<R: Rng>(
    rate: ArrivalRate,
    config: &SimConfiguration,
    rng: &mut R,
) -> Result<RunStats, ConfigurationError> {
    config.validate()?;
    let traffic = Traffic::generate(rate, config, rng);
    Ok(run_csma(config, traffic, rng))
}

/// Run the CSMA arbitration over pre-built (possibly scripted) traffic.
///
/// `traffic` must hold exactly `config.num_nodes` queues. `rng` only serves
/// the backoff draws here; use [`simulate_csma`] for the full
/// generate-then-arbitrate entry point.
///
/// Per slot:
///
/// 1. a node in backoff burns one slot of it and sits out arbitration;
/// 2. otherwise, a node whose head-of-queue frame has arrived becomes a
///    candidate unless some *visible* node is mid-transmission (a node that
///    is itself transmitting may contend again for its next frame — it
///    cannot sense itself);
/// 3. two or more candidates collide: every candidate loses its head frame,
///    counts one collision, and draws a fresh backoff (in index order);
///    exactly one candidate starts transmitting and counts one success;
/// 4. every positive airtime countdown burns one slot, the brand-new
///    transmission of step 3 included.
pub fn run_csma<R: Rng>(config: &SimConfiguration, traffic: Traffic, rng: &mut R) -> RunStats {
    debug_assert_eq!(traffic.num_nodes(), config.num_nodes);

    let visibility = Visibility::new(config);
    let mut stats = RunStats {
        frames_offered: traffic.total_frames(),
        ..RunStats::default()
    };
    let mut nodes = build_nodes(traffic);

    for now in config.slots() {
        let mut candidates = Vec::new();

        for i in 0..nodes.len() {
            if nodes[i].in_backoff() {
                nodes[i].tick_backoff();
                continue;
            }
            if nodes[i].frame_ready(now) {
                let medium_busy = visibility
                    .neighbors(nodes[i].id())
                    .any(|seen| nodes[seen.index()].is_transmitting());
                if !medium_busy {
                    candidates.push(i);
                }
            }
        }

        if candidates.len() > 1 {
            stats.collisions += candidates.len() as u64;
            for &i in &candidates {
                nodes[i].set_backoff(draw_backoff(rng, config.backoff_max));
                nodes[i].pop_frame();
            }
        } else if let [i] = candidates[..] {
            nodes[i].start_transmission(config.frame_duration);
            stats.successes += 1;
            nodes[i].pop_frame();
        }

        for node in nodes.iter_mut() {
            node.tick_transmission();
        }
    }

    stats
}
