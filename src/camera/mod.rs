//! Camera control for touch and mouse input.
//!
//! A single [`CameraController`] turns per-frame input into drag rotation,
//! height and planar pans, pinch zoom, idle re-leveling, rotation momentum,
//! and a free-running hover bob.

/// Per-frame controller tying the gesture components together.
pub mod controller;
/// Screen-edge proximity queries.
pub mod edges;
/// Gesture classification and cross-frame gesture history.
pub mod gesture;
/// Free-running vertical bob.
pub mod hover;
/// Rotation momentum after a horizontal swipe.
pub mod momentum;
/// Two-finger pinch to height zoom.
pub mod multi_contact;
/// Camera pose and GPU uniform types.
pub mod pose;
/// One-finger drag mapping.
pub mod single_contact;
/// Idle re-leveling schedule.
pub mod stabilizer;
/// Clamped pitch adjustment.
pub mod tilt;

pub use controller::CameraController;
pub use gesture::Gesture;
pub use pose::{CameraPose, PoseUniform};
pub use stabilizer::StabilizerPhase;
