//! Folds a frame's worth of input events into one [`InputSample`].
//!
//! Touch phases follow the usual mobile convention: a contact reports
//! `Began` on the frame it touched down (even if it also moved), `Moved`
//! when it moved, `Stationary` otherwise, and `Ended` exactly once on the
//! frame it lifted, after which it is dropped.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::sample::{
    Contact, ContactPhase, InputSample, PointerSample, ScreenSize,
};

/// Accumulates [`InputEvent`]s between frames.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// tracker.handle_event(event);
///
/// // Once per frame:
/// let sample = tracker.sample();
/// controller.update(&mut pose, &sample, clock.tick());
/// ```
#[derive(Debug, Clone)]
pub struct InputTracker {
    screen: ScreenSize,
    contacts: Vec<Contact>,
    pointer: PointerSample,
}

impl InputTracker {
    /// Tracker for a window of the given size.
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            contacts: Vec::new(),
            pointer: PointerSample::default(),
        }
    }

    /// Screen size used to flip window coordinates.
    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    /// Update the screen size after a window resize.
    pub fn resize(&mut self, screen: ScreenSize) {
        self.screen = screen;
    }

    /// Record one input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::TouchStarted { id, x, y } => {
                let position = self.screen.flip_y(x, y);
                if let Some(contact) = self.contact_mut(id) {
                    *contact = Contact::began(id, position);
                } else {
                    self.contacts.push(Contact::began(id, position));
                }
            }
            InputEvent::TouchMoved { id, x, y } => {
                let position = self.screen.flip_y(x, y);
                if let Some(contact) = self.contact_mut(id) {
                    contact.delta += position - contact.position;
                    contact.position = position;
                    if contact.phase != ContactPhase::Began {
                        contact.phase = ContactPhase::Moved;
                    }
                } else {
                    log::trace!("move for unknown touch {id}, treating as start");
                    self.contacts.push(Contact::began(id, position));
                }
            }
            InputEvent::TouchEnded { id, x, y } => {
                let position = self.screen.flip_y(x, y);
                if let Some(contact) = self.contact_mut(id) {
                    contact.delta += position - contact.position;
                    contact.position = position;
                    contact.phase = ContactPhase::Ended;
                }
            }
            InputEvent::TouchCancelled { id } => {
                if let Some(contact) = self.contact_mut(id) {
                    contact.phase = ContactPhase::Ended;
                }
            }
            InputEvent::CursorMoved { x, y } => {
                self.pointer.position = self.screen.flip_y(x, y);
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.pointer.pressed = pressed;
                }
            }
        }
    }

    /// Snapshot this frame's input and roll contact state over to the next
    /// frame.
    pub fn sample(&mut self) -> InputSample {
        let sample = InputSample {
            contacts: self.contacts.clone(),
            pointer: self.pointer,
        };

        self.contacts
            .retain(|contact| contact.phase != ContactPhase::Ended);
        for contact in &mut self.contacts {
            contact.phase = ContactPhase::Stationary;
            contact.delta = Vec2::ZERO;
        }

        sample
    }

    fn contact_mut(&mut self, id: u64) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|contact| contact.id == id)
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new(ScreenSize::default())
    }
}
