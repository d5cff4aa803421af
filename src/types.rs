//! Core geometry and pointer-event types.
//!
//! The classifier works in the button's local coordinate space: positions
//! arrive from the host input system, bounds arrive from the host layout
//! system at release time. Neither is retained.

use std::fmt;
use std::time::Duration;

/// A position in the button's local coordinate space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}, {:.0}", self.x, self.y)
    }
}

/// The rendered widget's size, supplied by the host layout system at
/// release time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Strict interior containment: a point exactly on an edge is outside.
    ///
    /// Boundary releases resolve to "outside" on purpose; release
    /// classification relies on this.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        if p.x <= 0.0 || p.y <= 0.0 {
            return false;
        }
        p.x < self.width && p.y < self.height
    }
}

/// Phase of a low-level pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer moved while the gesture is active. The first moved
    /// sample of a gesture doubles as the press.
    Moved,
    /// The pointer lifted, ending the gesture.
    Ended,
}

/// A single sample from the host input system's drag stream.
///
/// Timestamps are monotonic offsets from an arbitrary stream origin;
/// only differences between them are meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub timestamp: Duration,
    pub phase: PointerPhase,
}

impl PointerEvent {
    #[inline]
    pub fn moved(position: Point, timestamp: Duration) -> Self {
        Self {
            position,
            timestamp,
            phase: PointerPhase::Moved,
        }
    }

    #[inline]
    pub fn ended(position: Point, timestamp: Duration) -> Self {
        Self {
            position,
            timestamp,
            phase: PointerPhase::Ended,
        }
    }
}
