//! Gesture classification for the button component.
//!
//! This module turns the host's raw drag stream into semantic button
//! events. The host reports pointer samples and the current bounds; the
//! classifier reports press, release inside/outside, long press, double
//! tap, repeat-while-held, drag updates, and end through optional callback
//! slots.
//!
//! ## Modules
//!
//! - `config` - immutable timing configuration
//! - `actions` - the optional callback slots
//! - `state` - per-instance gesture state
//! - `classifier` - the event-handling state machine

mod actions;
mod classifier;
mod config;
mod state;

pub use actions::{Action, DragAction, GestureActions};
pub use classifier::GestureClassifier;
pub use config::GestureConfig;
pub use state::GestureState;
