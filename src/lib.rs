#![warn(clippy::all, rust_2018_idioms)]

pub const APP_NAME: &str = "Sticker Sketchpad";

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod drawable;
pub mod error;
pub mod export;
mod geometry;
pub mod history;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod sketchpad;
pub mod state;
pub mod sticker;
pub mod stroke;
pub mod surface;
pub mod tool;

pub use app::SketchpadApp;
pub use command::Command;
pub use config::SketchpadConfig;
pub use drawable::Drawable;
pub use error::{SketchpadError, SketchpadResult};
pub use history::History;
pub use input::InputEvent;
pub use sketchpad::{Effect, Sketchpad};
pub use sticker::{PlacedSticker, Rotation};
pub use stroke::Stroke;
pub use surface::{DrawCall, RecordingSurface, RenderSurface};
pub use tool::{Tool, ToolSelection};
