mod id;

pub use self::id::NodeId;
use crate::Slot;
use std::collections::VecDeque;

/// Per-node contention state owned by an engine for the duration of a run.
///
/// A node is two countdowns and a FIFO of pending frame arrivals:
///
/// - `backoff` — slots left until the node may contend again after a
///   collision (CSMA) or a refused reservation (MACA);
/// - `transmitting` — slots of airtime left on the frame currently on the
///   medium;
/// - `queue` — arrival slots of frames waiting to be sent, earliest first.
///   Arrival order is non-decreasing by construction and a popped frame is
///   never revisited.
///
/// Nothing outside the run loop ever aliases a `Node`; all state is created
/// fresh at the start of a run and discarded with it.
pub struct Node {
    id: NodeId,

    backoff: u64,
    transmitting: u64,

    queue: VecDeque<Slot>,
}

impl Node {
    pub(crate) fn new(id: NodeId, queue: VecDeque<Slot>) -> Self {
        Self {
            id,
            backoff: 0,
            transmitting: 0,
            queue,
        }
    }

    /// Returns the identifier of this node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns `true` while the node occupies the medium.
    #[inline]
    pub fn is_transmitting(&self) -> bool {
        self.transmitting > 0
    }

    /// Returns `true` while the node sits out a backoff window.
    #[inline]
    pub fn in_backoff(&self) -> bool {
        self.backoff > 0
    }

    /// Returns `true` if the head-of-queue frame arrived at or before `now`.
    ///
    /// An empty queue is never ready: once drained, the node stays silent
    /// for the rest of the run.
    #[inline]
    pub fn frame_ready(&self, now: Slot) -> bool {
        self.queue.front().is_some_and(|arrival| *arrival <= now)
    }

    /// Number of frames still waiting in the arrival queue.
    #[inline]
    pub fn pending_frames(&self) -> usize {
        self.queue.len()
    }

    /// Consume the head-of-queue frame.
    ///
    /// Called on every attempt, successful or not: a colliding (CSMA) or
    /// deferred (MACA) frame is dropped, not retried.
    pub(crate) fn pop_frame(&mut self) -> Option<Slot> {
        self.queue.pop_front()
    }

    /// Put the node on the medium for `frame_duration` slots.
    pub(crate) fn start_transmission(&mut self, frame_duration: u64) {
        self.transmitting = frame_duration;
    }

    /// Make the node sit out `delay` slots before contending again.
    pub(crate) fn set_backoff(&mut self, delay: u64) {
        self.backoff = delay;
    }

    /// Burn one slot of the backoff window.
    pub(crate) fn tick_backoff(&mut self) {
        self.backoff = self.backoff.saturating_sub(1);
    }

    /// Burn one slot of airtime.
    pub(crate) fn tick_transmission(&mut self) {
        self.transmitting = self.transmitting.saturating_sub(1);
    }
}
