//! Per-instance gesture state.

use std::time::Duration;

use crate::scheduler::{RepeatHandle, TimerToken};

/// State owned by a single [`GestureClassifier`](super::GestureClassifier).
///
/// Mutated only by that instance's event-handling methods, always on the
/// host's event-dispatch thread.
///
/// `last_release == None` is the "infinitely past" sentinel: it holds both
/// before the first release and after a double tap has been consumed, so a
/// third rapid tap cannot chain off a just-consumed pair.
#[derive(Debug, Default)]
pub struct GestureState {
    pub(crate) pressed: bool,
    pub(crate) removed: bool,
    pub(crate) last_release: Option<Duration>,
    pub(crate) long_press_token: Option<TimerToken>,
    pub(crate) repeat_arm_token: Option<TimerToken>,
    pub(crate) repeat_handle: Option<RepeatHandle>,
}

impl GestureState {
    /// True between a press and its matching release.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// True once the owning widget has been torn down.
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Invalidate both one-shot timers. Their pending fires, if the host
    /// scheduler cannot cancel them, become stale no-ops.
    pub(crate) fn invalidate_timers(&mut self) {
        self.long_press_token = None;
        self.repeat_arm_token = None;
    }
}
