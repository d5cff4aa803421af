//! Gesture-recognizing button core.
//!
//! Interprets a continuous pointer drag stream into discrete semantic
//! button events (press, release inside/outside, long press, double tap,
//! repeat-while-held, drag updates, end) and reports them through optional
//! callback slots. Rendering, layout, and styling stay with the host UI;
//! this crate owns the timing and classification logic, a deterministic
//! timer queue, and a scripted demo driver.

pub mod constants;
pub mod demo;
pub mod gesture;
pub mod presenter;
pub mod scheduler;
pub mod settings;
pub mod types;

pub use gesture::{Action, DragAction, GestureActions, GestureClassifier, GestureConfig};
pub use presenter::GesturePresenter;
pub use scheduler::{DelayScheduler, RepeatHandle, TimerFire, TimerQueue, TimerToken};
pub use settings::{GestureSettings, SettingsError, SettingsResult};
pub use types::{Bounds, Point, PointerEvent, PointerPhase};
