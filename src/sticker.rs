use egui::Pos2;

use crate::surface::RenderSurface;

/// Sticker orientation in whole degrees, always within `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation(f32);

impl Rotation {
    pub const QUARTER_TURN: f32 = 90.0;

    pub fn new(degrees: f32) -> Self {
        let normalized = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        Self(if normalized >= 360.0 { 0.0 } else { normalized })
    }

    pub fn degrees(self) -> f32 {
        self.0
    }

    /// Rotate clockwise by 90 degrees
    pub fn quarter_turn(self) -> Self {
        Self::new(self.0 + Self::QUARTER_TURN)
    }
}

/// An emoji (or any short text) stamped onto the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSticker {
    glyph: String,
    position: Pos2,
    rotation: Rotation,
}

impl PlacedSticker {
    pub fn new(glyph: impl Into<String>, position: Pos2, rotation: Rotation) -> Self {
        Self {
            glyph: glyph.into(),
            position,
            rotation,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Center of the glyph in surface coordinates
    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub(crate) fn move_to(&mut self, position: Pos2) {
        self.position = position;
    }

    pub(crate) fn rotate(&mut self) {
        self.rotation = self.rotation.quarter_turn();
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) {
        surface.draw_glyph(&self.glyph, self.position, self.rotation.degrees());
    }
}
