//! Free-running vertical bob.
//!
//! The bob height is a pure function of absolute elapsed time, so missed or
//! irregular frames never drift the phase.

use super::pose::CameraPose;
use crate::options::Options;
use crate::util::frame_timing::FrameTime;

/// Hover oscillator anchored to the camera's starting height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    baseline: f32,
}

impl Hover {
    /// Oscillate around `baseline`.
    pub fn new(baseline: f32) -> Self {
        Self { baseline }
    }

    /// Height the bob is centred on.
    #[inline]
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Bob height at `elapsed` seconds, clamped to the height limits.
    pub fn target_height(&self, elapsed: f32, options: &Options) -> f32 {
        let hover = &options.hover;
        let y = self.baseline + hover.amplitude * (elapsed * hover.frequency).sin();
        options.limits.clamp_height(y)
    }

    /// Ease the pose's height toward the bob height for this frame.
    pub fn apply(&self, pose: &mut CameraPose, time: FrameTime, options: &Options) {
        let target = self.target_height(time.elapsed, options);
        let t = (options.hover.smoothness * time.delta).clamp(0.0, 1.0);
        pose.set_height(pose.position.y + (target - pose.position.y) * t);
    }
}
