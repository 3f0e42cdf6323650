use crate::SketchpadApp;
use crate::command::Command;
use crate::components::ToolButton;
use crate::tool::ToolSelection;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.horizontal(|ui| {
                for (selection, label) in [
                    (ToolSelection::ThinMarker, "Thin Marker"),
                    (ToolSelection::ThickMarker, "Thick Marker"),
                ] {
                    if ui.selectable_label(app.is_selected(selection), label).clicked() {
                        log::info!("Tool selected from UI: {}", label);
                        app.execute(ctx, Command::SelectTool(selection));
                    }
                }
            });

            let mut color = app.sketchpad().marker().color;
            ui.horizontal(|ui| {
                ui.label("Color:");
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.execute(ctx, Command::SetColor(color));
                }
            });

            ui.separator();
            ui.label("Stickers (press R to rotate)");

            let stickers: Vec<String> = app
                .sketchpad()
                .palette()
                .stickers
                .iter()
                .map(str::to_owned)
                .collect();
            ui.horizontal_wrapped(|ui| {
                for (index, glyph) in stickers.iter().enumerate() {
                    let selection = ToolSelection::Sticker(index);
                    if ToolButton::new(glyph, app.is_selected(selection))
                        .show(ui)
                        .clicked()
                    {
                        app.execute(ctx, Command::SelectTool(selection));
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(app.custom_sticker_mut())
                        .hint_text("Custom sticker")
                        .desired_width(100.0),
                );
                if ui.button("Add").clicked() {
                    let text = std::mem::take(app.custom_sticker_mut());
                    app.execute(ctx, Command::AddCustomSticker(text));
                }
            });

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let history = app.sketchpad().history();
                let can_undo = history.can_undo();
                let can_redo = history.can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.execute(ctx, Command::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.execute(ctx, Command::Redo);
                }
                if ui.button("Clear").clicked() {
                    app.execute(ctx, Command::Clear);
                }
            });

            if ui.button("Export PNG").clicked() {
                app.export();
            }
            if let Some(status) = app.status() {
                ui.label(status);
            }

            ui.separator();

            let sketchpad = app.sketchpad();
            ui.label(format!("State: {}", sketchpad.state().name()));
            ui.label(format!(
                "Tool: {} (rotation {}°)",
                sketchpad.tool().name(),
                sketchpad.sticker_rotation().degrees()
            ));
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", sketchpad.history().len()));
                ui.label(format!(
                    "Redo stack size: {}",
                    sketchpad.history().redo_stack().len()
                ));
            });
        });
}
