use crate::sticker::PlacedSticker;
use crate::stroke::Stroke;
use crate::surface::RenderSurface;

/// Every kind of element that can be committed to the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(PlacedSticker),
}

impl Drawable {
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        match self {
            Drawable::Stroke(stroke) => stroke.render(surface),
            Drawable::Sticker(sticker) => sticker.render(surface),
        }
    }

    /// Short name for UI lists and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Stroke(_) => "stroke",
            Drawable::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&PlacedSticker> {
        match self {
            Drawable::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Drawable::Stroke(stroke)
    }
}

impl From<PlacedSticker> for Drawable {
    fn from(sticker: PlacedSticker) -> Self {
        Drawable::Sticker(sticker)
    }
}
