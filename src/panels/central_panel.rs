use crate::SketchpadApp;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(crate::APP_NAME);

        let canvas_size = app.sketchpad().canvas_size();
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        app.handle_input(ctx, canvas_rect);

        // Render the canvas
        app.paint_canvas(&painter, canvas_rect);
    });
}
