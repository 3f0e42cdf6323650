use egui::{Color32, Pos2};

use crate::sticker::Rotation;
use crate::surface::RenderSurface;

/// What the ghost under the pointer looks like
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewLook {
    Marker { thickness: f32, color: Color32 },
    Sticker { glyph: String, rotation: Rotation },
}

/// Ghost indicator that follows the pointer between actions.
///
/// Never committed and never part of history. Hidden while a stroke is
/// being drawn or a sticker is being placed.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPreview {
    look: PreviewLook,
    /// Unknown until the pointer first moves over the surface
    position: Option<Pos2>,
    active: bool,
    /// Opacity of the marker ghost's fill
    fill_alpha: u8,
    outline: Color32,
}

impl ToolPreview {
    pub fn new(look: PreviewLook, fill_alpha: u8, outline: Color32) -> Self {
        Self {
            look,
            position: None,
            active: true,
            fill_alpha,
            outline,
        }
    }

    /// Switch to a new look, e.g. after a tool change. Keeps the position.
    pub fn set_look(&mut self, look: PreviewLook) {
        self.look = look;
    }

    pub fn update_position(&mut self, position: Pos2) {
        self.position = Some(position);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// True when rendering would draw something
    pub fn is_visible(&self) -> bool {
        self.active && self.position.is_some()
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) {
        if !self.active {
            return;
        }
        let Some(position) = self.position else {
            return;
        };

        match &self.look {
            PreviewLook::Marker { thickness, color } => {
                let [r, g, b, _] = color.to_srgba_unmultiplied();
                let fill = Color32::from_rgba_unmultiplied(r, g, b, self.fill_alpha);
                surface.draw_circle(position, thickness / 2.0, fill, self.outline);
            }
            PreviewLook::Sticker { glyph, rotation } => {
                surface.draw_glyph(glyph, position, rotation.degrees());
            }
        }
    }
}
