//! Derived display state for the demo screen.
//!
//! The classifier only emits events; this presenter owns the counters and
//! last-seen drag positions a live screen would publish. Keeping it outside
//! the core keeps the classifier renderer-agnostic.

use std::fmt::Write as _;

use crate::types::Point;

/// Counters and last-seen drag positions for one button.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GesturePresenter {
    pub pressed: bool,
    pub press_count: u32,
    pub release_inside_count: u32,
    pub release_outside_count: u32,
    pub end_count: u32,
    pub long_press_count: u32,
    pub double_tap_count: u32,
    pub repeat_count: u32,
    pub drag_started: Option<Point>,
    pub drag_changed: Option<Point>,
    pub drag_ended: Option<Point>,
}

impl GesturePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_press(&mut self) {
        self.pressed = true;
        self.press_count += 1;
    }

    pub fn record_release_inside(&mut self) {
        self.release_inside_count += 1;
    }

    pub fn record_release_outside(&mut self) {
        self.release_outside_count += 1;
    }

    /// End closes the press cycle, so the pressed flag drops here.
    pub fn record_end(&mut self) {
        self.pressed = false;
        self.end_count += 1;
    }

    pub fn record_long_press(&mut self) {
        self.long_press_count += 1;
    }

    pub fn record_double_tap(&mut self) {
        self.double_tap_count += 1;
    }

    pub fn record_repeat(&mut self) {
        self.repeat_count += 1;
    }

    pub fn record_drag_start(&mut self, position: Point) {
        self.drag_started = Some(position);
    }

    pub fn record_drag_change(&mut self, position: Point) {
        self.drag_changed = Some(position);
    }

    pub fn record_drag_end(&mut self, position: Point) {
        self.drag_ended = Some(position);
    }

    /// Total releases regardless of inside/outside classification.
    pub fn release_count(&self) -> u32 {
        self.release_inside_count + self.release_outside_count
    }

    /// Render the header panel the demo screen prints.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let mut line = |label: &str, value: String| {
            let _ = writeln!(out, "{label}: {value}");
        };

        line("Pressed", if self.pressed { "YES" } else { "NO" }.to_string());
        line("Presses", self.press_count.to_string());
        line("Releases", self.release_count().to_string());
        line("     Inside", self.release_inside_count.to_string());
        line("     Outside", self.release_outside_count.to_string());
        line("Ended", self.end_count.to_string());
        line("Long presses", self.long_press_count.to_string());
        line("Double taps", self.double_tap_count.to_string());
        line("Repeats", self.repeat_count.to_string());
        line("Drag started", format_position(self.drag_started));
        line("Drag changed", format_position(self.drag_changed));
        line("Drag ended", format_position(self.drag_ended));
        out
    }
}

fn format_position(position: Option<Point>) -> String {
    match position {
        Some(p) => p.to_string(),
        None => "-".to_string(),
    }
}
