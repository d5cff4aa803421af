//! The gesture-classifying state machine.
//!
//! Consumes the host's drag stream and reports semantic button events into
//! the configured action slots. All handling runs on the host's
//! event-dispatch thread; delayed work goes through the
//! [`DelayScheduler`] seam and comes back via [`on_timer_fired`] and
//! [`on_repeat_tick`].
//!
//! Anomalous input never raises errors. A duplicate press, a release
//! without a matching press, a stale timer, or a fire after teardown all
//! degrade to no-ops; the component has no way to report synchronously to
//! its event source.
//!
//! [`on_timer_fired`]: GestureClassifier::on_timer_fired
//! [`on_repeat_tick`]: GestureClassifier::on_repeat_tick

use std::time::Duration;

use tracing::trace;

use crate::gesture::{GestureActions, GestureConfig, GestureState};
use crate::scheduler::{DelayScheduler, RepeatHandle, TimerFire, TimerToken};
use crate::types::{Bounds, PointerEvent, PointerPhase};

/// Turns a raw drag stream into semantic button events.
///
/// One instance per button. Owns its [`GestureState`] exclusively.
#[derive(Debug)]
pub struct GestureClassifier {
    config: GestureConfig,
    actions: GestureActions,
    state: GestureState,
    next_token: u64,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig, actions: GestureActions) -> Self {
        Self {
            config,
            actions,
            state: GestureState::default(),
            next_token: 0,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// True between a press and its matching release. Hosts that render a
    /// pressed appearance poll this.
    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    /// Route a pointer sample by phase. Bounds are only consulted for
    /// `Ended` samples.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        bounds: Bounds,
        scheduler: &mut dyn DelayScheduler,
    ) {
        match event.phase {
            PointerPhase::Moved => self.on_pointer_moved(event, scheduler),
            PointerPhase::Ended => self.on_pointer_ended(event, bounds, scheduler),
        }
    }

    /// Handle a moved sample. The first one of a gesture is the press;
    /// subsequent ones are drag updates.
    pub fn on_pointer_moved(&mut self, event: &PointerEvent, scheduler: &mut dyn DelayScheduler) {
        if self.state.pressed {
            if let Some(action) = self.actions.drag_change.as_mut() {
                action(event.position);
            }
            return;
        }

        self.state.pressed = true;
        trace!(x = event.position.x, y = event.position.y, "press began");

        if let Some(action) = self.actions.press.as_mut() {
            action();
        }
        if let Some(action) = self.actions.drag_start.as_mut() {
            action(event.position);
        }
        self.arm_long_press(scheduler);
        self.arm_repeat(scheduler);
    }

    /// Handle the ended sample that closes a press cycle.
    ///
    /// Fixed callback order: timers are invalidated first, then drag end,
    /// double-tap determination, inside/outside classification, and the end
    /// action unconditionally last. Listeners depend on this order.
    pub fn on_pointer_ended(
        &mut self,
        event: &PointerEvent,
        bounds: Bounds,
        scheduler: &mut dyn DelayScheduler,
    ) {
        if !self.state.pressed {
            trace!("release without matching press, ignoring");
            return;
        }

        self.state.pressed = false;
        self.state.invalidate_timers();
        if let Some(handle) = self.state.repeat_handle.take() {
            scheduler.stop_repeating(handle);
        }

        if let Some(action) = self.actions.drag_end.as_mut() {
            action(event.position);
        }

        self.settle_double_tap(event.timestamp);

        if bounds.contains(event.position) {
            if let Some(action) = self.actions.release_inside.as_mut() {
                action();
            }
        } else if let Some(action) = self.actions.release_outside.as_mut() {
            action();
        }

        if let Some(action) = self.actions.end.as_mut() {
            action();
        }
    }

    /// Deliver a due one-shot from the host scheduler.
    ///
    /// A fire whose token matches neither stored token was superseded by a
    /// release or a newer press and does nothing; this staleness check is
    /// the cancellation mechanism for schedulers that cannot cancel.
    pub fn on_timer_fired(&mut self, token: TimerToken, scheduler: &mut dyn DelayScheduler) {
        if self.state.removed {
            trace!(?token, "timer fired after teardown, ignoring");
            return;
        }

        if self.state.long_press_token == Some(token) {
            self.state.long_press_token = None;
            trace!("long press");
            if let Some(action) = self.actions.long_press.as_mut() {
                action();
            }
        } else if self.state.repeat_arm_token == Some(token) {
            self.state.repeat_arm_token = None;
            // at most one repeat sequence may be active
            if let Some(previous) = self.state.repeat_handle.take() {
                scheduler.stop_repeating(previous);
            }
            self.state.repeat_handle = Some(scheduler.start_repeating(self.config.repeat_interval));
            trace!("repeat armed");
        } else {
            trace!(?token, "stale timer, ignoring");
        }
    }

    /// Deliver one tick of the active repeat sequence.
    pub fn on_repeat_tick(&mut self, handle: RepeatHandle) {
        if self.state.removed {
            trace!(?handle, "repeat tick after teardown, ignoring");
            return;
        }
        if self.state.repeat_handle != Some(handle) {
            trace!(?handle, "tick from a stopped repeat sequence, ignoring");
            return;
        }
        if let Some(action) = self.actions.repeat.as_mut() {
            action();
        }
    }

    /// Route a due fire from the host scheduler.
    pub fn on_timer(&mut self, fire: TimerFire, scheduler: &mut dyn DelayScheduler) {
        match fire {
            TimerFire::Once(token) => self.on_timer_fired(token, scheduler),
            TimerFire::Tick(handle) => self.on_repeat_tick(handle),
        }
    }

    /// Mark the owning widget as torn down. Every pending timer delivery
    /// checks this flag before invoking a listener.
    pub fn teardown(&mut self) {
        self.state.removed = true;
    }

    fn settle_double_tap(&mut self, timestamp: Duration) {
        let is_double_tap = match self.state.last_release {
            Some(previous) => timestamp.saturating_sub(previous) < self.config.double_tap_timeout,
            None => false,
        };
        if is_double_tap {
            if let Some(action) = self.actions.double_tap.as_mut() {
                action();
            }
            // a consumed pair cannot seed another double tap
            self.state.last_release = None;
        } else {
            self.state.last_release = Some(timestamp);
        }
    }

    fn arm_long_press(&mut self, scheduler: &mut dyn DelayScheduler) {
        if self.actions.long_press.is_none() {
            return;
        }
        let token = self.fresh_token();
        self.state.long_press_token = Some(token);
        scheduler.schedule_once(self.config.long_press_delay, token);
    }

    fn arm_repeat(&mut self, scheduler: &mut dyn DelayScheduler) {
        if self.actions.repeat.is_none() {
            return;
        }
        let token = self.fresh_token();
        self.state.repeat_arm_token = Some(token);
        scheduler.schedule_once(self.config.repeat_delay, token);
    }

    fn fresh_token(&mut self) -> TimerToken {
        self.next_token += 1;
        TimerToken(self.next_token)
    }
}
