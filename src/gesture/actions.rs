//! Optional callback slots invoked by the classifier.
//!
//! Every slot is independently optional; an unset slot simply means no
//! event is reported for that interaction. Timer-backed events (long press,
//! repeat) are not even scheduled when their slot is unset, so an idle
//! button costs nothing.

use std::fmt;

use crate::types::Point;

/// Callback for events that carry no payload.
pub type Action = Box<dyn FnMut()>;

/// Callback for drag events, invoked with the gesture's current position.
pub type DragAction = Box<dyn FnMut(Point)>;

/// The set of handler slots a button wires into the classifier.
///
/// Built with the `on_*` methods:
///
/// ```ignore
/// let actions = GestureActions::new()
///     .on_press(|| println!("pressed"))
///     .on_release_inside(|| println!("released inside"))
///     .on_drag_change(|pos| println!("dragging at {pos}"));
/// ```
#[derive(Default)]
pub struct GestureActions {
    pub(crate) press: Option<Action>,
    pub(crate) release_inside: Option<Action>,
    pub(crate) release_outside: Option<Action>,
    pub(crate) long_press: Option<Action>,
    pub(crate) double_tap: Option<Action>,
    pub(crate) repeat: Option<Action>,
    pub(crate) drag_start: Option<DragAction>,
    pub(crate) drag_change: Option<DragAction>,
    pub(crate) drag_end: Option<DragAction>,
    pub(crate) end: Option<Action>,
}

impl GestureActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the button transitions to pressed.
    pub fn on_press(mut self, action: impl FnMut() + 'static) -> Self {
        self.press = Some(Box::new(action));
        self
    }

    /// Called when the pointer lifts strictly inside the bounds.
    pub fn on_release_inside(mut self, action: impl FnMut() + 'static) -> Self {
        self.release_inside = Some(Box::new(action));
        self
    }

    /// Called when the pointer lifts on or outside the bounds edge.
    pub fn on_release_outside(mut self, action: impl FnMut() + 'static) -> Self {
        self.release_outside = Some(Box::new(action));
        self
    }

    /// Called once when a press has been held for the long-press delay.
    pub fn on_long_press(mut self, action: impl FnMut() + 'static) -> Self {
        self.long_press = Some(Box::new(action));
        self
    }

    /// Called when a release pairs with the previous one as a double tap.
    pub fn on_double_tap(mut self, action: impl FnMut() + 'static) -> Self {
        self.double_tap = Some(Box::new(action));
        self
    }

    /// Called on every repeat tick while the button is held past the
    /// repeat delay.
    pub fn on_repeat(mut self, action: impl FnMut() + 'static) -> Self {
        self.repeat = Some(Box::new(action));
        self
    }

    /// Called with the press position when a drag gesture starts.
    pub fn on_drag_start(mut self, action: impl FnMut(Point) + 'static) -> Self {
        self.drag_start = Some(Box::new(action));
        self
    }

    /// Called with the current position on every subsequent drag sample.
    pub fn on_drag_change(mut self, action: impl FnMut(Point) + 'static) -> Self {
        self.drag_change = Some(Box::new(action));
        self
    }

    /// Called with the final position when the drag gesture ends.
    pub fn on_drag_end(mut self, action: impl FnMut(Point) + 'static) -> Self {
        self.drag_end = Some(Box::new(action));
        self
    }

    /// Called unconditionally as the last event of every press cycle.
    pub fn on_end(mut self, action: impl FnMut() + 'static) -> Self {
        self.end = Some(Box::new(action));
        self
    }
}

impl fmt::Debug for GestureActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureActions")
            .field("press", &self.press.is_some())
            .field("release_inside", &self.release_inside.is_some())
            .field("release_outside", &self.release_outside.is_some())
            .field("long_press", &self.long_press.is_some())
            .field("double_tap", &self.double_tap.is_some())
            .field("repeat", &self.repeat.is_some())
            .field("drag_start", &self.drag_start.is_some())
            .field("drag_change", &self.drag_change.is_some())
            .field("drag_end", &self.drag_end.is_some())
            .field("end", &self.end.is_some())
            .finish()
    }
}
