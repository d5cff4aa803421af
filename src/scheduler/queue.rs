//! Deterministic poll-driven timer queue.
//!
//! Single-threaded by construction: the owner advances the queue clock
//! explicitly and dispatches the returned fires itself, so timer callbacks
//! run on the same event-dispatch thread as everything else. The demo loop
//! feeds it frame-stepped elapsed time; the tests feed it synthetic
//! timestamps.

use std::time::Duration;

use tracing::trace;

use super::{DelayScheduler, RepeatHandle, TimerFire, TimerToken};

#[derive(Debug, Clone, Copy)]
struct OneShot {
    due: Duration,
    token: TimerToken,
}

#[derive(Debug, Clone, Copy)]
struct Repeating {
    handle: RepeatHandle,
    interval: Duration,
    next_due: Duration,
}

/// Poll-driven [`DelayScheduler`] with an explicit monotonic clock.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    one_shots: Vec<OneShot>,
    repeating: Vec<Repeating>,
    next_handle: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current queue clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// True when nothing is scheduled.
    pub fn is_idle(&self) -> bool {
        self.one_shots.is_empty() && self.repeating.is_empty()
    }

    /// Advance the clock to `now` and collect every fire that came due,
    /// in chronological order. The clock never moves backwards; an earlier
    /// `now` drains nothing new.
    pub fn advance_to(&mut self, now: Duration) -> Vec<TimerFire> {
        if now > self.now {
            self.now = now;
        }

        let mut due: Vec<(Duration, TimerFire)> = Vec::new();

        let clock = self.now;
        self.one_shots.retain(|shot| {
            if shot.due <= clock {
                due.push((shot.due, TimerFire::Once(shot.token)));
                false
            } else {
                true
            }
        });

        for repeat in &mut self.repeating {
            while repeat.next_due <= clock {
                due.push((repeat.next_due, TimerFire::Tick(repeat.handle)));
                repeat.next_due += repeat.interval;
            }
        }

        // Stable sort keeps one-shots ahead of same-instant repeat ticks.
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, fire)| fire).collect()
    }
}

impl DelayScheduler for TimerQueue {
    fn schedule_once(&mut self, delay: Duration, token: TimerToken) {
        let due = self.now + delay;
        trace!(?token, ?due, "scheduling one-shot");
        self.one_shots.push(OneShot { due, token });
    }

    fn start_repeating(&mut self, interval: Duration) -> RepeatHandle {
        debug_assert!(!interval.is_zero(), "repeat interval must be non-zero");
        self.next_handle += 1;
        let handle = RepeatHandle(self.next_handle);
        self.repeating.push(Repeating {
            handle,
            interval,
            next_due: self.now + interval,
        });
        trace!(?handle, ?interval, "starting repeat sequence");
        handle
    }

    fn stop_repeating(&mut self, handle: RepeatHandle) {
        trace!(?handle, "stopping repeat sequence");
        self.repeating.retain(|repeat| repeat.handle != handle);
    }
}
