//! Input handling: platform-agnostic event types and the per-frame sample
//! the camera controller consumes.

/// Platform-agnostic input events.
pub mod event;
/// Per-frame input snapshot.
pub mod sample;
/// Folds events into per-frame samples.
pub mod tracker;

pub use event::{InputEvent, MouseButton};
pub use sample::{
    Contact, ContactPhase, InputSample, PointerSample, PointerSource,
    ScreenSize, SinglePointer,
};
pub use tracker::InputTracker;
