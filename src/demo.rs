//! Scripted demo exercising the classifier end to end.
//!
//! Stands in for a live preview screen: each scenario drives a synthetic
//! drag stream and the timer queue through one button, and the shared
//! presenter collects what a screen would display. The clock is stepped in
//! frame-sized increments so armed repeat sequences tick the way they would
//! under a real frame loop.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::constants::{DEMO_BUTTON_SIZE, DEMO_FRAME_STEP};
use crate::gesture::{GestureActions, GestureClassifier, GestureConfig};
use crate::presenter::GesturePresenter;
use crate::scheduler::TimerQueue;
use crate::types::{Bounds, Point, PointerEvent};

/// Wire every action slot to a shared presenter.
pub fn presenter_actions(presenter: &Arc<Mutex<GesturePresenter>>) -> GestureActions {
    GestureActions::new()
        .on_press({
            let p = presenter.clone();
            move || p.lock().record_press()
        })
        .on_release_inside({
            let p = presenter.clone();
            move || p.lock().record_release_inside()
        })
        .on_release_outside({
            let p = presenter.clone();
            move || p.lock().record_release_outside()
        })
        .on_long_press({
            let p = presenter.clone();
            move || p.lock().record_long_press()
        })
        .on_double_tap({
            let p = presenter.clone();
            move || p.lock().record_double_tap()
        })
        .on_repeat({
            let p = presenter.clone();
            move || p.lock().record_repeat()
        })
        .on_drag_start({
            let p = presenter.clone();
            move |pos| p.lock().record_drag_start(pos)
        })
        .on_drag_change({
            let p = presenter.clone();
            move |pos| p.lock().record_drag_change(pos)
        })
        .on_drag_end({
            let p = presenter.clone();
            move |pos| p.lock().record_drag_end(pos)
        })
        .on_end({
            let p = presenter.clone();
            move || p.lock().record_end()
        })
}

/// One demo button: classifier, timer queue, and shared presenter.
pub struct DemoButton {
    classifier: GestureClassifier,
    queue: TimerQueue,
    presenter: Arc<Mutex<GesturePresenter>>,
    bounds: Bounds,
    clock: Duration,
}

impl DemoButton {
    pub fn new(config: GestureConfig) -> Self {
        let presenter = Arc::new(Mutex::new(GesturePresenter::new()));
        let actions = presenter_actions(&presenter);
        let (width, height) = DEMO_BUTTON_SIZE;
        Self {
            classifier: GestureClassifier::new(config, actions),
            queue: TimerQueue::new(),
            presenter,
            bounds: Bounds::new(width, height),
            clock: Duration::ZERO,
        }
    }

    /// Send a moved sample at the current clock. The first one of a
    /// gesture is the press.
    pub fn touch(&mut self, x: f32, y: f32) {
        let event = PointerEvent::moved(Point::new(x, y), self.clock);
        self.classifier
            .handle_pointer(&event, self.bounds, &mut self.queue);
    }

    /// Alias for scripts where the gesture is already in flight.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        self.touch(x, y);
    }

    /// Send the ended sample that closes the gesture.
    pub fn release(&mut self, x: f32, y: f32) {
        let event = PointerEvent::ended(Point::new(x, y), self.clock);
        self.classifier
            .handle_pointer(&event, self.bounds, &mut self.queue);
    }

    /// Let `delay` of simulated time pass, pumping due timers every frame.
    pub fn wait(&mut self, delay: Duration) {
        let target = self.clock + delay;
        while self.clock < target {
            self.clock = (self.clock + DEMO_FRAME_STEP).min(target);
            let fires = self.queue.advance_to(self.clock);
            for fire in fires {
                self.classifier.on_timer(fire, &mut self.queue);
            }
        }
    }

    pub fn presenter(&self) -> GesturePresenter {
        self.presenter.lock().clone()
    }

    pub fn summary(&self) -> String {
        self.presenter.lock().summary()
    }
}

/// Run every scripted scenario with the given timings.
pub fn run_all(config: GestureConfig) -> Vec<(&'static str, DemoButton)> {
    let scenarios: Vec<(&'static str, fn(&mut DemoButton))> = vec![
        ("single tap", single_tap),
        ("double tap", double_tap),
        ("triple tap", triple_tap),
        ("long press hold", long_press_hold),
        ("repeat hold", repeat_hold),
        ("drag out and release", drag_out),
    ];

    scenarios
        .into_iter()
        .map(|(name, script)| {
            debug!(scenario = name, "running");
            let mut button = DemoButton::new(config);
            script(&mut button);
            (name, button)
        })
        .collect()
}

fn single_tap(button: &mut DemoButton) {
    button.touch(50.0, 50.0);
    button.wait(Duration::from_millis(100));
    button.release(50.0, 50.0);
}

fn double_tap(button: &mut DemoButton) {
    single_tap(button);
    button.wait(Duration::from_millis(50));
    button.touch(50.0, 50.0);
    button.wait(Duration::from_millis(40));
    button.release(50.0, 50.0);
}

fn triple_tap(button: &mut DemoButton) {
    // the third release lands inside the timeout of the second, but the
    // just-consumed pair cannot chain
    double_tap(button);
    button.wait(Duration::from_millis(50));
    button.touch(50.0, 50.0);
    button.wait(Duration::from_millis(40));
    button.release(50.0, 50.0);
}

fn long_press_hold(button: &mut DemoButton) {
    button.touch(50.0, 50.0);
    button.wait(button_long_press_delay(button) + Duration::from_millis(100));
    button.release(50.0, 50.0);
}

fn repeat_hold(button: &mut DemoButton) {
    button.touch(50.0, 50.0);
    button.wait(Duration::from_millis(900));
    button.release(50.0, 50.0);
}

fn drag_out(button: &mut DemoButton) {
    button.touch(50.0, 50.0);
    button.wait(Duration::from_millis(30));
    button.drag_to(80.0, 50.0);
    button.wait(Duration::from_millis(30));
    button.drag_to(130.0, 50.0);
    button.wait(Duration::from_millis(30));
    button.release(130.0, 50.0);
}

fn button_long_press_delay(button: &DemoButton) -> Duration {
    button.classifier.config().long_press_delay
}
