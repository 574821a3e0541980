//! Vertical safe zone between the header band and the bottom margin.

use deck_core::DeckConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentZone {
    pub top: f32,
    pub bottom: f32,
}

impl ContentZone {
    pub const fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// `header + margin .. height - margin`.
    pub fn from_config(config: &DeckConfig) -> Self {
        Self {
            top: (config.header_height + config.content_margin) as f32,
            bottom: config.card_height.saturating_sub(config.content_margin) as f32,
        }
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Map a 0..1 ratio to an absolute y.
    pub fn y_at(&self, ratio: f32) -> f32 {
        self.top + ratio * self.height()
    }

    pub fn center_y(&self) -> f32 {
        self.y_at(0.5)
    }
}

// ===================================================================
// Tests
// ===================================================================
