use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a touch contact within one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPhase {
    /// The contact touched down this frame.
    Began,
    /// The contact moved this frame.
    Moved,
    /// The contact is down but did not move this frame.
    Stationary,
    /// The contact lifted (or was cancelled) this frame.
    Ended,
}

/// One touch contact as seen in a single frame.
///
/// Positions are screen pixels with the origin at the bottom-left, y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Platform touch identifier.
    pub id: u64,
    /// Current position.
    pub position: Vec2,
    /// Movement since the previous frame.
    pub delta: Vec2,
    /// Phase for this frame.
    pub phase: ContactPhase,
}

impl Contact {
    /// A contact that touched down this frame.
    pub fn began(id: u64, position: Vec2) -> Self {
        Self {
            id,
            position,
            delta: Vec2::ZERO,
            phase: ContactPhase::Began,
        }
    }

    /// A contact that moved by `delta` to reach `position` this frame.
    pub fn moved(id: u64, position: Vec2, delta: Vec2) -> Self {
        Self {
            id,
            position,
            delta,
            phase: ContactPhase::Moved,
        }
    }

    /// A contact held still this frame.
    pub fn stationary(id: u64, position: Vec2) -> Self {
        Self {
            id,
            position,
            delta: Vec2::ZERO,
            phase: ContactPhase::Stationary,
        }
    }

    /// Where the contact was on the previous frame.
    #[inline]
    pub fn previous_position(&self) -> Vec2 {
        self.position - self.delta
    }
}

/// Mouse pointer state, used interchangeably with a single touch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerSample {
    /// Cursor position (bottom-left origin, y up).
    pub position: Vec2,
    /// Whether the primary button is held.
    pub pressed: bool,
}

/// Everything the controller needs to know about input for one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSample {
    /// Active touch contacts, including ones that ended this frame.
    pub contacts: Vec<Contact>,
    /// Mouse pointer.
    pub pointer: PointerSample,
}

impl InputSample {
    /// No touches and no mouse press.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A sample carrying the given touch contacts.
    pub fn touches(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            pointer: PointerSample::default(),
        }
    }

    /// A sample with the mouse button held at `position`.
    pub fn mouse_drag(position: Vec2) -> Self {
        Self {
            contacts: Vec::new(),
            pointer: PointerSample {
                position,
                pressed: true,
            },
        }
    }

    /// Number of touch contacts.
    #[inline]
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// True when nothing is touching the screen and the mouse is up.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.contacts.is_empty() && !self.pointer.pressed
    }

    /// The single pointer driving a one-finger gesture.
    ///
    /// A lone touch applies motion only in its `Moved` phase; a held mouse
    /// (with no touches) always does.
    pub fn single_pointer(&self) -> Option<SinglePointer> {
        match self.contacts.as_slice() {
            [contact] => Some(SinglePointer {
                source: PointerSource::Touch,
                position: contact.position,
                applies_motion: contact.phase == ContactPhase::Moved,
            }),
            [] if self.pointer.pressed => Some(SinglePointer {
                source: PointerSource::Mouse,
                position: self.pointer.position,
                applies_motion: true,
            }),
            _ => None,
        }
    }
}

/// Device behind a one-finger gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// A lone touch contact.
    Touch,
    /// The mouse, with no touches down.
    Mouse,
}

/// Position and motion flag of the pointer driving a one-finger gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinglePointer {
    /// Which device the pointer is.
    pub source: PointerSource,
    /// Pointer position, y-up.
    pub position: Vec2,
    /// Whether this frame's movement should be applied.
    pub applies_motion: bool,
}

/// Screen dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ScreenSize {
    /// Screen of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a window position (top-left origin) to screen space
    /// (bottom-left origin, y up).
    #[inline]
    pub fn flip_y(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x, self.height - y)
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}
