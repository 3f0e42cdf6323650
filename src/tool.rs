use egui::Color32;

use crate::config::SketchpadConfig;

/// The drawing behavior currently in effect
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Marker { thickness: f32 },
    Sticker { glyph: String },
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Marker { .. } => "Marker",
            Tool::Sticker { .. } => "Sticker",
        }
    }

    pub fn is_sticker(&self) -> bool {
        matches!(self, Tool::Sticker { .. })
    }
}

/// What the toolbar asks for when a tool button is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSelection {
    ThinMarker,
    ThickMarker,
    /// Index into the [`StickerPalette`]
    Sticker(usize),
}

/// Marker presets and the sticker choices offered by the toolbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPalette {
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    pub stickers: StickerPalette,
}

impl ToolPalette {
    pub fn from_config(config: &SketchpadConfig) -> Self {
        Self {
            thin_thickness: config.thin_thickness,
            thick_thickness: config.thick_thickness,
            stickers: StickerPalette::new(config.stickers.iter().cloned()),
        }
    }

    /// Resolve a toolbar selection into a concrete tool.
    /// Unknown sticker indices resolve to nothing.
    pub fn resolve(&self, selection: ToolSelection) -> Option<Tool> {
        match selection {
            ToolSelection::ThinMarker => Some(Tool::Marker {
                thickness: self.thin_thickness,
            }),
            ToolSelection::ThickMarker => Some(Tool::Marker {
                thickness: self.thick_thickness,
            }),
            ToolSelection::Sticker(index) => self.stickers.get(index).map(|glyph| Tool::Sticker {
                glyph: glyph.to_owned(),
            }),
        }
    }
}

impl Default for ToolPalette {
    fn default() -> Self {
        Self::from_config(&SketchpadConfig::default())
    }
}

/// Ordered sticker glyphs, duplicates removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickerPalette {
    glyphs: Vec<String>,
}

impl StickerPalette {
    pub fn new(glyphs: impl IntoIterator<Item = String>) -> Self {
        let mut palette = Self::default();
        for glyph in glyphs {
            palette.add_custom(&glyph);
        }
        palette
    }

    /// Register a user-supplied sticker.
    ///
    /// Surrounding whitespace is trimmed. Empty input and glyphs already in
    /// the palette are rejected. Returns the index of the new sticker.
    pub fn add_custom(&mut self, text: &str) -> Option<usize> {
        let glyph = text.trim();
        if glyph.is_empty() || self.glyphs.iter().any(|existing| existing == glyph) {
            return None;
        }
        self.glyphs.push(glyph.to_owned());
        Some(self.glyphs.len() - 1)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.glyphs.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.glyphs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Marker settings used for new strokes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSettings {
    pub thickness: f32,
    pub color: Color32,
}
