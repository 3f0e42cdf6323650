//! The sketchpad session: history, tools and the pointer state machine.
//!
//! All mutation goes through [`Sketchpad::handle_input`] and
//! [`Sketchpad::execute`]. Both return the [`Effect`]s the host has to act
//! on, so the whole interaction can be driven from tests without a window.

use egui::{Key, Pos2, Rect, Vec2};

use crate::command::Command;
use crate::config::SketchpadConfig;
use crate::drawable::Drawable;
use crate::history::History;
use crate::input::InputEvent;
use crate::preview::{PreviewLook, ToolPreview};
use crate::state::InteractionState;
use crate::sticker::{PlacedSticker, Rotation};
use crate::stroke::Stroke;
use crate::surface::RenderSurface;
use crate::tool::{MarkerSettings, Tool, ToolPalette, ToolSelection};

/// Something the host must do after an event was handled
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The scene changed; render it again
    Redraw,
    /// The active tool changed, e.g. to update toolbar highlighting
    ToolChanged(Tool),
}

/// One drawing session, created at startup and owned by the app.
#[derive(Debug, Clone)]
pub struct Sketchpad {
    history: History,
    state: InteractionState,
    tool: Tool,
    /// Last selected marker and the current stroke color.
    /// Sticker placement falls back to this marker once the sticker is down.
    marker: MarkerSettings,
    sticker_rotation: Rotation,
    palette: ToolPalette,
    preview: ToolPreview,
    canvas_size: Vec2,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(&SketchpadConfig::default())
    }
}

impl Sketchpad {
    /// Start a session with the thin marker selected
    pub fn new(config: &SketchpadConfig) -> Self {
        let palette = ToolPalette::from_config(config);
        let marker = MarkerSettings {
            thickness: palette.thin_thickness,
            color: config.stroke_color(),
        };
        let preview = ToolPreview::new(
            PreviewLook::Marker {
                thickness: marker.thickness,
                color: marker.color,
            },
            config.preview_alpha,
            config.preview_outline(),
        );

        Self {
            history: History::new(),
            state: InteractionState::Idle,
            tool: Tool::Marker {
                thickness: marker.thickness,
            },
            marker,
            sticker_rotation: Rotation::default(),
            palette,
            preview,
            canvas_size: config.canvas_size(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Committed elements, oldest first
    pub fn drawables(&self) -> &[Drawable] {
        self.history.drawables()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn marker(&self) -> MarkerSettings {
        self.marker
    }

    pub fn sticker_rotation(&self) -> Rotation {
        self.sticker_rotation
    }

    pub fn palette(&self) -> &ToolPalette {
        &self.palette
    }

    pub fn preview(&self) -> &ToolPreview {
        &self.preview
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn canvas_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.canvas_size)
    }

    /// Feed one pointer or keyboard event through the state machine
    pub fn handle_input(&mut self, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::PointerDown { position } => self.pointer_down(position),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { position } => self.pointer_up(position),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::KeyPressed { key } => self.key_pressed(key),
        }
    }

    /// Apply a toolbar or control request
    pub fn execute(&mut self, command: Command) -> Vec<Effect> {
        log::debug!("Executing {} in state {}", command.name(), self.state.name());
        match command {
            Command::Undo => {
                self.end_drag();
                if self.history.undo() {
                    vec![Effect::Redraw]
                } else {
                    log::debug!("Nothing to undo");
                    Vec::new()
                }
            }
            Command::Redo => {
                self.end_drag();
                if self.history.redo() {
                    vec![Effect::Redraw]
                } else {
                    log::debug!("Nothing to redo");
                    Vec::new()
                }
            }
            Command::Clear => {
                self.end_drag();
                self.history.clear();
                log::info!("Canvas cleared");
                vec![Effect::Redraw]
            }
            Command::SelectTool(selection) => self.select_tool(selection),
            Command::SetColor(color) => {
                self.marker.color = color;
                self.preview.set_look(self.preview_look());
                vec![Effect::Redraw]
            }
            Command::AddCustomSticker(text) => match self.palette.stickers.add_custom(&text) {
                Some(index) => {
                    log::info!("Registered custom sticker {:?}", text.trim());
                    self.select_tool(ToolSelection::Sticker(index))
                }
                None => {
                    log::debug!("Rejected custom sticker {:?}", text);
                    Vec::new()
                }
            },
        }
    }

    /// Draw the whole scene: background, committed elements oldest first,
    /// the sticker being placed, then the tool preview on top.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        surface.clear(self.canvas_rect());
        for drawable in self.history.drawables() {
            drawable.render(surface);
        }
        if let Some(sticker) = self.state.live_sticker() {
            sticker.render(surface);
        }
        self.preview.render(surface);
    }

    fn pointer_down(&mut self, position: Pos2) -> Vec<Effect> {
        if !self.state.is_idle() {
            return Vec::new();
        }
        self.preview.update_position(position);
        self.preview.set_active(false);

        match &self.tool {
            Tool::Marker { thickness } => {
                // Committed right away so a click without a drag is still undoable
                self.history.commit(Stroke::new(position, *thickness, self.marker.color));
                self.state = InteractionState::Drawing;
            }
            Tool::Sticker { glyph } => {
                let sticker = PlacedSticker::new(glyph.clone(), position, self.sticker_rotation);
                self.state = InteractionState::PlacingSticker { sticker };
            }
        }
        log::debug!("Pointer down at {:?}, now {}", position, self.state.name());
        vec![Effect::Redraw]
    }

    fn pointer_move(&mut self, position: Pos2) -> Vec<Effect> {
        self.preview.update_position(position);

        match self.state {
            InteractionState::Idle => {}
            InteractionState::Drawing => match self.history.tail_stroke_mut() {
                Some(stroke) => stroke.add_point(position),
                None => {
                    log::warn!("Active stroke disappeared from history; ending drag");
                    self.end_drag();
                }
            },
            InteractionState::PlacingSticker { ref mut sticker } => sticker.move_to(position),
        }
        vec![Effect::Redraw]
    }

    fn pointer_up(&mut self, position: Pos2) -> Vec<Effect> {
        match std::mem::take(&mut self.state) {
            InteractionState::Idle => Vec::new(),
            InteractionState::Drawing => {
                self.preview.update_position(position);
                self.preview.set_active(true);
                vec![Effect::Redraw]
            }
            InteractionState::PlacingSticker { mut sticker } => {
                sticker.move_to(position);
                log::info!(
                    "Placed sticker {} at {:?} rotated {}°",
                    sticker.glyph(),
                    sticker.position(),
                    sticker.rotation().degrees()
                );
                self.history.commit(sticker);

                // Sticker placement is one-shot: go back to the last marker
                self.tool = Tool::Marker {
                    thickness: self.marker.thickness,
                };
                self.sticker_rotation = Rotation::default();
                self.preview.set_look(self.preview_look());
                self.preview.update_position(position);
                self.preview.set_active(true);
                vec![Effect::Redraw, Effect::ToolChanged(self.tool.clone())]
            }
        }
    }

    fn pointer_leave(&mut self) -> Vec<Effect> {
        match self.state {
            InteractionState::Idle => Vec::new(),
            // Whatever was captured of the stroke stays committed
            InteractionState::Drawing => {
                self.end_drag();
                vec![Effect::Redraw]
            }
            InteractionState::PlacingSticker { .. } => {
                log::debug!("Sticker placement cancelled: pointer left the canvas");
                self.state = InteractionState::Idle;
                self.preview.set_active(true);
                vec![Effect::Redraw]
            }
        }
    }

    fn key_pressed(&mut self, key: Key) -> Vec<Effect> {
        if key != Key::R {
            return Vec::new();
        }

        match self.state {
            InteractionState::PlacingSticker { ref mut sticker } => {
                sticker.rotate();
                self.sticker_rotation = sticker.rotation();
            }
            InteractionState::Idle if self.tool.is_sticker() => {
                self.sticker_rotation = self.sticker_rotation.quarter_turn();
            }
            _ => return Vec::new(),
        }
        // Hidden during placement, but shown again if the placement is cancelled
        self.preview.set_look(self.preview_look());
        log::debug!("Sticker rotation now {}°", self.sticker_rotation.degrees());
        vec![Effect::Redraw]
    }

    fn select_tool(&mut self, selection: ToolSelection) -> Vec<Effect> {
        let Some(tool) = self.palette.resolve(selection) else {
            log::warn!("Unknown tool selection {:?}", selection);
            return Vec::new();
        };

        self.end_drag();
        if let Tool::Marker { thickness } = tool {
            self.marker.thickness = thickness;
        }
        // Drops any sticker that was being placed
        self.state = InteractionState::Idle;
        self.sticker_rotation = Rotation::default();
        self.tool = tool;
        self.preview.set_look(self.preview_look());
        self.preview.set_active(true);

        log::info!("Tool selected: {:?}", self.tool);
        vec![Effect::ToolChanged(self.tool.clone()), Effect::Redraw]
    }

    /// Stop extending the active stroke. Its points stay committed.
    fn end_drag(&mut self) {
        if matches!(self.state, InteractionState::Drawing) {
            self.state = InteractionState::Idle;
            self.preview.set_active(true);
        }
    }

    fn preview_look(&self) -> PreviewLook {
        match &self.tool {
            Tool::Marker { thickness } => PreviewLook::Marker {
                thickness: *thickness,
                color: self.marker.color,
            },
            Tool::Sticker { glyph } => PreviewLook::Sticker {
                glyph: glyph.clone(),
                rotation: self.sticker_rotation,
            },
        }
    }
}
