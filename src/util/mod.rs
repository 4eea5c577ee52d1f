//! Utility modules shared across the crate.

/// Frame timing for driving the controller.
pub mod frame_timing;
