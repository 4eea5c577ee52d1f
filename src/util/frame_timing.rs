use serde::{Deserialize, Serialize};
use web_time::Instant;

/// Timing for one frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Time since the controller's clock started.
    pub elapsed: f32,
    /// Time since the previous frame.
    pub delta: f32,
}

impl FrameTime {
    /// Frame at `elapsed` seconds, `delta` seconds after the previous one.
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    /// The frame `dt` seconds after this one.
    #[must_use]
    pub fn step(self, dt: f32) -> Self {
        Self {
            elapsed: self.elapsed + dt,
            delta: dt,
        }
    }
}

/// Wall-clock frame timer producing [`FrameTime`]s.
pub struct FrameClock {
    /// When the clock started
    start: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single frame's delta (0 = unlimited)
    max_delta: f32,
}

impl FrameClock {
    /// Start a clock. `max_delta` caps the delta reported after a stall
    /// (a debugger pause, a backgrounded tab); 0 disables the cap.
    pub fn new(max_delta: f32) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            max_delta,
        }
    }

    /// Call once per frame, before updating the controller.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        if self.max_delta > 0.0 {
            delta = delta.min(self.max_delta);
        }

        FrameTime {
            elapsed: now.duration_since(self.start).as_secs_f32(),
            delta,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0.25)
    }
}
