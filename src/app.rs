use crate::command::Command;
use crate::config::SketchpadConfig;
use crate::export::Exporter;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::PainterSurface;
use crate::sketchpad::{Effect, Sketchpad};
use crate::tool::ToolSelection;

/// The sketchpad window: a tool panel on the left and the canvas in the middle.
pub struct SketchpadApp {
    config: SketchpadConfig,
    sketchpad: Sketchpad,
    input: InputHandler,
    exporter: Exporter,
    /// Contents of the custom sticker text field
    custom_sticker: String,
    /// Outcome of the last export, shown under the export button
    status: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(SketchpadConfig::from_env())
    }

    pub fn with_config(config: SketchpadConfig) -> Self {
        let exporter = Exporter::from_config(&config).unwrap_or_else(|err| {
            log::error!("Sticker font unavailable, exporting strokes only: {}", err);
            Exporter::new(
                config.export.size,
                config.canvas_size(),
                config.background_color(),
                config.sticker_size,
            )
        });

        Self {
            sketchpad: Sketchpad::new(&config),
            input: InputHandler::new(egui::Rect::NOTHING),
            exporter,
            custom_sticker: String::new(),
            status: None,
            config,
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn custom_sticker_mut(&mut self) -> &mut String {
        &mut self.custom_sticker
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// True when `selection` resolves to the tool currently in use
    pub fn is_selected(&self, selection: ToolSelection) -> bool {
        self.sketchpad.palette().resolve(selection).as_ref() == Some(self.sketchpad.tool())
    }

    pub fn execute(&mut self, ctx: &egui::Context, command: Command) {
        let effects = self.sketchpad.execute(command);
        Self::apply_effects(ctx, effects);
    }

    /// Translate this frame's pointer and key input into sketchpad events
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            let effects = self.sketchpad.handle_input(event);
            Self::apply_effects(ctx, effects);
        }
    }

    pub fn paint_canvas(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let mut surface = PainterSurface::new(
            painter,
            canvas_rect,
            self.config.background_color(),
            self.config.sticker_size,
        );
        self.sketchpad.render(&mut surface);
    }

    pub fn export(&mut self) {
        let path = &self.config.export.path;
        let status = match self.exporter.export_png(self.sketchpad.drawables(), path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("Export failed: {}", err);
                format!("Export failed: {}", err)
            }
        };
        self.status = Some(status);
    }

    fn apply_effects(ctx: &egui::Context, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Redraw => ctx.request_repaint(),
                Effect::ToolChanged(tool) => log::debug!("Active tool is now {:?}", tool),
            }
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
