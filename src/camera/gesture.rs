//! Gesture classification and cross-frame gesture bookkeeping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::input::{InputSample, PointerSource};

/// What kind of gesture a frame's input represents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// No usable gesture: idle, or more contacts than any gesture uses.
    #[default]
    None,
    /// One touch, or the mouse with no touches.
    SingleContact,
    /// Two touches.
    MultiContact,
}

impl Gesture {
    /// Classify one frame of input.
    pub fn classify(input: &InputSample) -> Self {
        match input.contact_count() {
            0 if input.pointer.pressed => Self::SingleContact,
            1 => Self::SingleContact,
            2 => Self::MultiContact,
            _ => Self::None,
        }
    }
}

/// Gesture history carried between frames.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    previous: Gesture,
    anchor: Vec2,
    source: Option<PointerSource>,
    interacting: bool,
    has_interacted: bool,
}

impl GestureState {
    /// Gesture recorded at the end of the last frame.
    #[inline]
    pub fn previous(&self) -> Gesture {
        self.previous
    }

    /// Reference position single-contact deltas are measured from.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Whether the last frame had any input.
    #[inline]
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Whether any real gesture frame has been seen since construction.
    #[inline]
    pub fn has_interacted(&self) -> bool {
        self.has_interacted
    }

    /// True when `gesture` carries on from the previous frame rather than
    /// starting fresh.
    #[inline]
    pub fn continues(&self, gesture: Gesture) -> bool {
        gesture != Gesture::None && self.previous == gesture
    }

    /// True when a single-contact gesture continues from the previous frame
    /// on the same device. Switching between touch and mouse starts afresh.
    #[inline]
    pub fn continues_pointer(&self, source: PointerSource) -> bool {
        self.continues(Gesture::SingleContact) && self.source == Some(source)
    }

    pub(crate) fn set_interacting(&mut self, interacting: bool) {
        self.interacting = interacting;
    }

    /// Move the anchor to `position`, returning the delta from the old
    /// anchor when the single-contact gesture is continuing on `source`.
    pub(crate) fn advance_anchor(
        &mut self,
        source: PointerSource,
        position: Vec2,
    ) -> Option<Vec2> {
        let continuing = self.continues_pointer(source);
        let delta = position - self.anchor;
        self.anchor = position;
        self.source = Some(source);
        continuing.then_some(delta)
    }

    /// Store this frame's gesture as the previous one.
    pub(crate) fn finish_frame(&mut self, gesture: Gesture) {
        if gesture != Gesture::None {
            self.has_interacted = true;
        }
        if gesture != self.previous {
            log::debug!("gesture {:?} -> {:?}", self.previous, gesture);
        }
        self.previous = gesture;
    }
}
