use std::fs;
use std::path::{Path, PathBuf};

use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::SketchpadResult;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Settings for the sketchpad session and its export.
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old files
pub struct SketchpadConfig {
    /// Drawing surface size in surface units
    pub canvas_size: [f32; 2],
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    /// RGBA, unmultiplied
    pub stroke_color: [u8; 4],
    pub background_color: [u8; 4],
    /// Font size used for stickers on screen
    pub sticker_size: f32,
    pub stickers: Vec<String>,
    /// Opacity of the marker ghost, which takes the stroke color
    pub preview_alpha: u8,
    pub preview_outline: [u8; 4],
    pub export: ExportSettings,
}

/// Settings for PNG export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Width and height of the exported image in pixels
    pub size: [u32; 2],
    pub path: PathBuf,
    /// TrueType/OpenType font used to rasterize sticker glyphs.
    /// Stickers are left out of the export when this is not set.
    pub font_path: Option<PathBuf>,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256.0, 256.0],
            thin_thickness: 2.0,
            thick_thickness: 8.0,
            stroke_color: [0, 0, 0, 255],
            background_color: [255, 255, 255, 255],
            sticker_size: 24.0,
            stickers: vec!["😀".to_owned(), "🥳".to_owned(), "🎉".to_owned()],
            preview_alpha: 153,
            preview_outline: [255, 0, 0, 255],
            export: ExportSettings::default(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            size: [1024, 1024],
            path: PathBuf::from("sketchpad.png"),
            font_path: None,
        }
    }
}

impl SketchpadConfig {
    /// Load a config from a JSON file
    pub fn load(path: &Path) -> SketchpadResult<Self> {
        let data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: &Path) -> SketchpadResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Load the file named by `SKETCHPAD_CONFIG`, falling back to defaults when
    /// the variable is unset or the file is unusable.
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                let path = PathBuf::from(path);
                Self::load(&path).unwrap_or_else(|err| {
                    log::error!("Ignoring config {}: {}", path.display(), err);
                    Self::default()
                })
            }
            None => Self::default(),
        }
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_size[0], self.canvas_size[1])
    }

    pub fn stroke_color(&self) -> Color32 {
        to_color(self.stroke_color)
    }

    pub fn background_color(&self) -> Color32 {
        to_color(self.background_color)
    }

    pub fn preview_outline(&self) -> Color32 {
        to_color(self.preview_outline)
    }
}

fn to_color([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}
