//! Crate-wide default values.
//!
//! Centralizes timing defaults and demo values so the classifier, the
//! settings layer, and the demo screen agree on them.

use std::time::Duration;

// ============================================================================
// Gesture Timing Defaults
// ============================================================================

/// Time a press must be held before it counts as a long press
pub const DEFAULT_LONG_PRESS_DELAY: Duration = Duration::from_millis(500);

/// Maximum time between two releases for them to count as a double tap
pub const DEFAULT_DOUBLE_TAP_TIMEOUT: Duration = Duration::from_millis(200);

/// Time a press must be held before the repeat action starts firing
pub const DEFAULT_REPEAT_DELAY: Duration = Duration::from_millis(500);

/// Cadence of the repeat action once armed
pub const DEFAULT_REPEAT_INTERVAL: Duration = Duration::from_millis(100);

// ============================================================================
// Demo Screen
// ============================================================================

/// Hit rectangle of the demo button, width x height in pixels
pub const DEMO_BUTTON_SIZE: (f32, f32) = (100.0, 100.0);

/// Long-press delay used by the demo button (longer than the default so the
/// hold scenarios read clearly in the output)
pub const DEMO_LONG_PRESS_DELAY: Duration = Duration::from_millis(800);

/// Step size of the demo's simulated frame clock
pub const DEMO_FRAME_STEP: Duration = Duration::from_millis(10);
