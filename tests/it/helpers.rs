//! Test harness for driving the classifier with a recorded event log.
//!
//! Every action slot pushes its name onto a shared log so ordering
//! assertions read as plain lists. Time is explicit: events carry
//! millisecond timestamps and the harness pumps the timer queue up to each
//! event in frame-sized steps, the way a host frame loop would.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use gesturebutton::gesture::{GestureActions, GestureClassifier, GestureConfig};
use gesturebutton::scheduler::TimerQueue;
use gesturebutton::types::{Bounds, Point, PointerEvent};

/// Shared, ordered log of fired callbacks.
pub type EventLog = Arc<Mutex<Vec<&'static str>>>;

/// Classifier plus timer queue plus recording action slots.
pub struct GestureHarness {
    pub classifier: GestureClassifier,
    pub queue: TimerQueue,
    pub bounds: Bounds,
    log: EventLog,
}

impl GestureHarness {
    pub fn new(config: GestureConfig) -> Self {
        let log: EventLog = Arc::new(Mutex::new(Vec::new()));
        let actions = recording_actions(&log);
        Self {
            classifier: GestureClassifier::new(config, actions),
            queue: TimerQueue::new(),
            bounds: Bounds::new(100.0, 100.0),
            log,
        }
    }

    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Bounds::new(width, height);
        self
    }

    /// Send a moved sample at `at_ms`, after pumping timers up to it.
    pub fn moved(&mut self, x: f32, y: f32, at_ms: u64) {
        self.pump(at_ms);
        let event = PointerEvent::moved(Point::new(x, y), Duration::from_millis(at_ms));
        self.classifier.on_pointer_moved(&event, &mut self.queue);
    }

    /// Send an ended sample at `at_ms`, after pumping timers up to it.
    pub fn released(&mut self, x: f32, y: f32, at_ms: u64) {
        self.pump(at_ms);
        let event = PointerEvent::ended(Point::new(x, y), Duration::from_millis(at_ms));
        self.classifier
            .on_pointer_ended(&event, self.bounds, &mut self.queue);
    }

    /// Advance the timer queue to `at_ms` in 10ms frames, dispatching due
    /// fires to the classifier.
    pub fn pump(&mut self, at_ms: u64) {
        let target = Duration::from_millis(at_ms);
        let mut now = self.queue.now();
        while now < target {
            now = (now + Duration::from_millis(10)).min(target);
            let fires = self.queue.advance_to(now);
            for fire in fires {
                self.classifier.on_timer(fire, &mut self.queue);
            }
        }
    }

    /// Everything fired so far, in order.
    pub fn events(&self) -> Vec<&'static str> {
        self.log.lock().clone()
    }

    /// How many times `name` fired.
    pub fn count(&self, name: &str) -> usize {
        self.log.lock().iter().filter(|e| **e == name).count()
    }

    /// Forget recorded events; useful for asserting on one cycle at a time.
    pub fn clear_events(&mut self) {
        self.log.lock().clear();
    }
}

fn record(log: EventLog, name: &'static str) -> impl FnMut() {
    move || log.lock().push(name)
}

fn record_drag(log: EventLog, name: &'static str) -> impl FnMut(Point) {
    move |_| log.lock().push(name)
}

fn recording_actions(log: &EventLog) -> GestureActions {
    GestureActions::new()
        .on_press(record(log.clone(), "press"))
        .on_release_inside(record(log.clone(), "release_inside"))
        .on_release_outside(record(log.clone(), "release_outside"))
        .on_long_press(record(log.clone(), "long_press"))
        .on_double_tap(record(log.clone(), "double_tap"))
        .on_repeat(record(log.clone(), "repeat"))
        .on_drag_start(record_drag(log.clone(), "drag_start"))
        .on_drag_change(record_drag(log.clone(), "drag_change"))
        .on_drag_end(record_drag(log.clone(), "drag_end"))
        .on_end(record(log.clone(), "end"))
}
