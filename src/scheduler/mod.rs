//! Timer scheduling seam between the classifier and its host runtime.
//!
//! The classifier never implements timer mechanics. It tags every one-shot
//! request with a fresh [`TimerToken`] and compares the token again when the
//! host delivers the fire, so schedulers that cannot cancel are fine: a
//! superseded token simply fires into a no-op. Recurring sequences are
//! identified by a [`RepeatHandle`] with the same discipline.
//!
//! ## Modules
//!
//! - `queue` - deterministic poll-driven implementation used by the demo
//!   and the tests

mod queue;

pub use queue::TimerQueue;

use std::time::Duration;

/// Identity of a scheduled one-shot timer, captured at schedule time and
/// compared at fire time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// Identity of an active recurring sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeatHandle(pub u64);

/// A due timer delivered by the host scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerFire {
    /// A one-shot scheduled with [`DelayScheduler::schedule_once`].
    Once(TimerToken),
    /// One tick of a recurring sequence.
    Tick(RepeatHandle),
}

/// Host-supplied timer facility.
///
/// Implementations are not required to cancel one-shots that were
/// superseded; the classifier tolerates late fires via the token check.
/// Stopping a recurring sequence must be effective, though: no tick may be
/// delivered for a handle after [`stop_repeating`](Self::stop_repeating)
/// returns.
pub trait DelayScheduler {
    /// Schedule a one-shot fire `delay` from now, tagged with `token`.
    fn schedule_once(&mut self, delay: Duration, token: TimerToken);

    /// Start a recurring sequence ticking every `interval`.
    fn start_repeating(&mut self, interval: Duration) -> RepeatHandle;

    /// Stop a recurring sequence. Unknown handles are ignored.
    fn stop_repeating(&mut self, handle: RepeatHandle);
}
