//! Deterministic, discrete-time medium-access contention primitives.
//!
//! `macsim-core` models a row of wireless nodes sharing a medium under the
//! hidden-node problem and arbitrates access with one of two state machines:
//!
//! - [`simulate_csma`] — carrier sensing at the *sender*, which two mutually
//!   invisible senders can both pass, colliding at a shared listener;
//! - [`simulate_maca`] — a single-step RTS/CTS-style reservation that senses
//!   around the *receiver* instead, avoiding those collisions.
//!
//! Both engines are pure functions of an immutable [`SimConfiguration`], an
//! [`ArrivalRate`] and an injected random generator, and return a final
//! [`RunStats`]. Reproducibility comes from seeding one generator for a
//! whole sweep and letting every draw consume from it in a fixed, documented
//! order: all traffic-generation draws of a run happen before any of its
//! backoff draws.

pub mod config;
pub mod defaults;
mod engine;
mod node;
mod rate;
mod slot;
pub mod stats;
mod sweep;
mod traffic;
mod visibility;

pub use self::{
    config::{ConfigurationError, SimConfiguration},
    engine::{run_csma, run_maca, simulate_csma, simulate_maca},
    node::{Node, NodeId},
    rate::{ArrivalRate, ArrivalRateError, ArrivalRateParseError},
    slot::Slot,
    stats::RunStats,
    sweep::{RateSweep, RateSweepError},
    traffic::Traffic,
    visibility::Visibility,
};
