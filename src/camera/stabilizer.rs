//! Idle re-leveling.
//!
//! After interaction ends the camera waits for a grace period, then slerps
//! back to upright (zero pitch and roll) while keeping its yaw. Position is
//! never touched.

use serde::{Deserialize, Serialize};

use super::pose::CameraPose;
use crate::options::Options;
use crate::util::frame_timing::FrameTime;

/// Absorbs float error in accumulated frame timestamps, so a grace period
/// of exactly N frames ends on frame N.
const TIME_EPSILON: f32 = 1e-4;

/// Where the stabilizer is in its schedule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StabilizerPhase {
    /// Waiting for interaction to end.
    #[default]
    Armed,
    /// Interaction ended; grace period running.
    Waiting,
    /// Re-leveling every idle frame.
    Stabilizing,
}

/// Re-leveling schedule.
#[derive(Debug, Clone)]
pub struct Stabilizer {
    phase: StabilizerPhase,
    start_time: f32,
}

impl Default for Stabilizer {
    fn default() -> Self {
        Self {
            phase: StabilizerPhase::Armed,
            start_time: 0.0,
        }
    }
}

impl Stabilizer {
    /// Current phase.
    #[inline]
    pub fn phase(&self) -> StabilizerPhase {
        self.phase
    }

    /// Whether a re-level has been scheduled since the last gesture.
    #[inline]
    pub fn should_stabilize(&self) -> bool {
        self.phase != StabilizerPhase::Armed
    }

    /// A new gesture started: drop any scheduled re-level.
    pub fn reset(&mut self) {
        if self.phase != StabilizerPhase::Armed {
            log::debug!("stabilizer reset by new gesture");
        }
        self.phase = StabilizerPhase::Armed;
    }

    /// Advance the schedule on a frame with no usable gesture.
    ///
    /// `has_interacted` suppresses scheduling until the first real gesture,
    /// so an untouched camera is left alone at startup.
    pub fn settle(
        &mut self,
        pose: &mut CameraPose,
        time: FrameTime,
        has_interacted: bool,
        options: &Options,
    ) {
        match self.phase {
            StabilizerPhase::Armed => {
                if has_interacted {
                    self.start_time = time.elapsed;
                    self.phase = StabilizerPhase::Waiting;
                    log::debug!(
                        "stabilizer waiting from t={:.3}s",
                        time.elapsed
                    );
                }
            }
            StabilizerPhase::Waiting | StabilizerPhase::Stabilizing => {
                let waited = time.elapsed - self.start_time;
                if waited + TIME_EPSILON >= options.stabilization.delay {
                    if self.phase == StabilizerPhase::Waiting {
                        log::debug!("stabilizer leveling");
                        self.phase = StabilizerPhase::Stabilizing;
                    }
                    Self::level(pose, time.delta, options);
                }
            }
        }
    }

    /// One slerp step toward the current yaw with pitch and roll zeroed.
    /// The target follows the pose, so yaw applied meanwhile is kept.
    fn level(pose: &mut CameraPose, dt: f32, options: &Options) {
        let position = pose.position;
        let t = (options.stabilization.speed * dt).clamp(0.0, 1.0);
        pose.rotation = pose.rotation.slerp(pose.upright(), t);
        pose.position = position;
    }
}
