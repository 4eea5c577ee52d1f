use glam::Vec2;

use crate::input::ScreenSize;

/// Screen-edge proximity tests against the screen size captured when the
/// controller was built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenEdges {
    screen: ScreenSize,
    border: f32,
}

impl ScreenEdges {
    /// Edges of `screen` with a band `border` pixels wide.
    pub fn new(screen: ScreenSize, border: f32) -> Self {
        Self { screen, border }
    }

    /// Screen size the edges were built from.
    #[inline]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    /// True when `position` is within the border of the left or right edge.
    pub fn is_near_horizontal_edge(&self, position: Vec2) -> bool {
        position.x <= self.border || position.x >= self.screen.width - self.border
    }

    /// True when `position` is within the border of the top or bottom edge.
    pub fn is_near_vertical_edge(&self, position: Vec2) -> bool {
        position.y <= self.border || position.y >= self.screen.height - self.border
    }
}
