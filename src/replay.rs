//! Scripted input sessions.
//!
//! A replay script describes a screen, a starting pose, and a list of frames
//! of [`InputEvent`]s. Running it drives the events through an
//! [`InputTracker`] and a [`CameraController`] at a fixed frame interval and
//! records the pose after every frame. Scripts are TOML:
//!
//! ```toml
//! frame_interval = 0.1
//!
//! [screen]
//! width = 800.0
//! height = 600.0
//!
//! [initial]
//! position = [0.0, 50.0, 0.0]
//! pitch = 30.0
//!
//! [[frames]]
//! events = [{ kind = "touch_started", id = 0, x = 100.0, y = 300.0 }]
//!
//! [[frames]]
//! events = [{ kind = "touch_moved", id = 0, x = 140.0, y = 300.0 }]
//!
//! [[frames]]
//! events = [{ kind = "touch_ended", id = 0, x = 140.0, y = 300.0 }]
//! hold = 10
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraController, CameraPose, Gesture, StabilizerPhase};
use crate::error::HovercamError;
use crate::input::{InputEvent, InputTracker, ScreenSize};
use crate::options::Options;
use crate::util::frame_timing::FrameTime;

/// Starting camera pose, with orientation given as Euler angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialPose {
    /// Starting position. Its height becomes the hover baseline.
    pub position: Vec3,
    /// Yaw in degrees.
    pub yaw: f32,
    /// Pitch in degrees.
    pub pitch: f32,
    /// Roll in degrees.
    pub roll: f32,
}

impl Default for InitialPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 50.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

impl From<InitialPose> for CameraPose {
    fn from(initial: InitialPose) -> Self {
        Self::from_euler_degrees(
            initial.position,
            initial.yaw,
            initial.pitch,
            initial.roll,
        )
    }
}

/// One scripted frame: events delivered before it, plus quiet frames after.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptFrame {
    /// Events delivered before this frame is sampled.
    pub events: Vec<InputEvent>,
    /// Additional frames to run afterwards with no new events.
    pub hold: u32,
}

/// A scripted input session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayScript {
    /// Seconds between frames.
    pub frame_interval: f32,
    /// Screen the events were recorded on.
    pub screen: ScreenSize,
    /// Starting camera pose.
    pub initial: InitialPose,
    /// Frames in order.
    pub frames: Vec<ScriptFrame>,
}

impl Default for ReplayScript {
    fn default() -> Self {
        Self {
            frame_interval: 1.0 / 60.0,
            screen: ScreenSize::default(),
            initial: InitialPose::default(),
            frames: Vec::new(),
        }
    }
}

/// Camera state after one replayed frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Zero-based frame index.
    pub frame: usize,
    /// Elapsed time at this frame, in seconds.
    pub elapsed: f32,
    /// Camera position after the frame.
    pub position: Vec3,
    /// Yaw in degrees.
    pub yaw: f32,
    /// Pitch in degrees.
    pub pitch: f32,
    /// Roll in degrees.
    pub roll: f32,
    /// Gesture the frame was classified as.
    pub gesture: Gesture,
    /// Idle stabilizer phase after the frame.
    pub stabilizer: StabilizerPhase,
}

impl ReplayScript {
    /// Load a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self, HovercamError> {
        let content =
            std::fs::read_to_string(path).map_err(HovercamError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse a script from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, HovercamError> {
        toml::from_str(content)
            .map_err(|e| HovercamError::ScriptParse(e.to_string()))
    }

    /// Total number of frames the script runs, holds included.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames
            .iter()
            .map(|frame| 1 + frame.hold as usize)
            .sum()
    }

    /// Run the script through a fresh controller and return the pose trace.
    #[must_use]
    pub fn run(&self, options: Options) -> Vec<TraceEntry> {
        let mut pose = CameraPose::from(self.initial);
        let mut controller = CameraController::new(options, &pose, self.screen);
        let mut tracker = InputTracker::new(self.screen);
        let mut time = FrameTime::default();
        let mut trace = Vec::with_capacity(self.frame_count());

        for frame in &self.frames {
            for event in &frame.events {
                tracker.handle_event(*event);
            }
            for _ in 0..=frame.hold {
                time = time.step(self.frame_interval);
                let sample = tracker.sample();
                controller.update(&mut pose, &sample, time);

                let (yaw, pitch, roll) = pose.euler_degrees();
                let entry = TraceEntry {
                    frame: trace.len(),
                    elapsed: time.elapsed,
                    position: pose.position,
                    yaw,
                    pitch,
                    roll,
                    gesture: controller.gesture().previous(),
                    stabilizer: controller.stabilizer_phase(),
                };
                log::debug!("{entry:?}");
                trace.push(entry);
            }
        }

        trace
    }
}
