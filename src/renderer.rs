use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use crate::surface::RenderSurface;

/// Outline width of the marker ghost, in points
const PREVIEW_OUTLINE_WIDTH: f32 = 2.0;

/// Renders sketchpad calls with an egui painter.
///
/// Surface coordinates are offset by the canvas origin, so `(0, 0)` lands on
/// the top-left corner of the canvas rect inside the window.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Vec2,
    background: Color32,
    glyph_size: f32,
}

impl<'a> PainterSurface<'a> {
    /// Creates a surface for the canvas occupying `canvas_rect` on screen
    ///
    /// Args:
    ///     painter (Painter): The painter to draw with
    ///     canvas_rect (Rect): Where the canvas is on screen
    ///     background (Color32): Color used by `clear`
    ///     glyph_size (f32): Font size for sticker glyphs
    pub fn new(
        painter: &'a Painter,
        canvas_rect: Rect,
        background: Color32,
        glyph_size: f32,
    ) -> Self {
        Self {
            painter,
            origin: canvas_rect.min.to_vec2(),
            background,
            glyph_size,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.origin
    }
}

impl RenderSurface for PainterSurface<'_> {
    fn clear(&mut self, region: Rect) {
        self.painter
            .rect_filled(region.translate(self.origin), 0.0, self.background);
    }

    fn draw_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        match points {
            [] => {}
            // A click without a drag still leaves a dot
            [point] => {
                self.painter
                    .circle_filled(self.to_screen(*point), thickness / 2.0, color);
            }
            _ => {
                let points = points.iter().map(|point| self.to_screen(*point)).collect();
                self.painter
                    .add(Shape::line(points, EguiStroke::new(thickness, color)));
            }
        }
    }

    fn draw_glyph(&mut self, text: &str, center: Pos2, rotation_degrees: f32) {
        let galley = self.painter.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(self.glyph_size),
            Color32::BLACK,
        );
        // TextShape rotates around its top-left corner; shift it so the
        // rotation happens around the glyph center instead.
        let angle = rotation_degrees.to_radians();
        let half_size = galley.size() / 2.0;
        let top_left = self.to_screen(center) - Rot2::from_angle(angle) * half_size;

        self.painter
            .add(TextShape::new(top_left, galley, Color32::BLACK).with_angle(angle));
    }

    fn draw_circle(&mut self, center: Pos2, radius: f32, fill: Color32, outline: Color32) {
        self.painter.circle(
            self.to_screen(center),
            radius,
            fill,
            EguiStroke::new(PREVIEW_OUTLINE_WIDTH, outline),
        );
    }
}
