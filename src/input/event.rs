use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputTracker`](super::InputTracker) which folds
/// everything that happened between two frames into one
/// [`InputSample`](super::InputSample). Positions are window pixels with the
/// origin at the top-left, as windowing systems report them.
///
/// # Example
///
/// ```ignore
/// tracker.handle_event(InputEvent::TouchStarted { id: 0, x: 120.0, y: 300.0 });
/// let sample = tracker.sample();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// A finger touched the screen.
    TouchStarted {
        /// Platform touch identifier, stable for the touch's lifetime.
        id: u64,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A finger moved.
    TouchMoved {
        /// Platform touch identifier.
        id: u64,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A finger lifted.
    TouchEnded {
        /// Platform touch identifier.
        id: u64,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The platform cancelled a touch (treated as lifted).
    TouchCancelled {
        /// Platform touch identifier.
        id: u64,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event, if it is one the camera cares about.
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, TouchPhase, WindowEvent};

        match event {
            WindowEvent::Touch(touch) => {
                let id = touch.id;
                let x = touch.location.x as f32;
                let y = touch.location.y as f32;
                Some(match touch.phase {
                    TouchPhase::Started => Self::TouchStarted { id, x, y },
                    TouchPhase::Moved => Self::TouchMoved { id, x, y },
                    TouchPhase::Ended => Self::TouchEnded { id, x, y },
                    TouchPhase::Cancelled => Self::TouchCancelled { id },
                })
            }
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            _ => None,
        }
    }
}
