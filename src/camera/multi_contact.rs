//! Two-finger pinch to height zoom.

use super::pose::CameraPose;
use crate::input::{Contact, ContactPhase};
use crate::options::Options;

/// Change in finger separation since the previous frame, positive when the
/// fingers move together.
///
/// Returns `None` when neither contact moved this frame. A non-finite result
/// (e.g. from non-finite positions) collapses to zero.
pub fn pinch_delta(first: &Contact, second: &Contact) -> Option<f32> {
    if first.phase != ContactPhase::Moved && second.phase != ContactPhase::Moved
    {
        return None;
    }

    let previous = first
        .previous_position()
        .distance(second.previous_position());
    let current = first.position.distance(second.position);
    let delta = previous - current;

    Some(if delta.is_finite() { delta } else { 0.0 })
}

/// Raise (or lower) the camera by `pinch * zoom_speed * dt`, clamped to the
/// height limits.
pub fn apply_zoom(pose: &mut CameraPose, pinch: f32, options: &Options, dt: f32) {
    let amount = pinch * options.touch.zoom_speed * dt;
    let height = options.limits.clamp_height(pose.position.y + amount);
    pose.set_height(height);
}
