use egui::Color32;

use crate::tool::ToolSelection;

/// Requests coming from the toolbar and controls rather than the pointer
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Undo,
    Redo,
    /// Drop every committed element and the redo buffer
    Clear,
    SelectTool(ToolSelection),
    /// Color used for strokes started from now on
    SetColor(Color32),
    /// Register a user-typed sticker and arm it. Blank or duplicate input is ignored.
    AddCustomSticker(String),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Clear => "Clear",
            Command::SelectTool(_) => "SelectTool",
            Command::SetColor(_) => "SetColor",
            Command::AddCustomSticker(_) => "AddCustomSticker",
        }
    }
}
