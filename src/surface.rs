use egui::{Color32, Pos2, Rect};

/// A 2D drawing target.
///
/// Coordinates are surface-relative: `(0, 0)` is the top-left corner of the
/// drawing area. The sketchpad core only ever issues these calls, so it does
/// not care whether the target is an egui painter, a pixel buffer or a log.
pub trait RenderSurface {
    /// Wipe `region` back to the background
    fn clear(&mut self, region: Rect);

    /// Draw connected line segments through `points`
    fn draw_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    /// Draw `text` centered on `center`, rotated clockwise by `rotation_degrees`
    fn draw_glyph(&mut self, text: &str, center: Pos2, rotation_degrees: f32);

    /// Draw a filled circle with a thin outline
    fn draw_circle(&mut self, center: Pos2, radius: f32, fill: Color32, outline: Color32);
}

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rect),
    Polyline {
        points: Vec<Pos2>,
        thickness: f32,
        color: Color32,
    },
    Glyph {
        text: String,
        center: Pos2,
        rotation_degrees: f32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
        outline: Color32,
    },
}

/// Surface that remembers every call instead of drawing.
///
/// Two recordings of the same scene compare equal, which is how redraw output
/// is checked without a window.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, region: Rect) {
        self.calls.push(DrawCall::Clear(region));
    }

    fn draw_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            thickness,
            color,
        });
    }

    fn draw_glyph(&mut self, text: &str, center: Pos2, rotation_degrees: f32) {
        self.calls.push(DrawCall::Glyph {
            text: text.to_owned(),
            center,
            rotation_degrees,
        });
    }

    fn draw_circle(&mut self, center: Pos2, radius: f32, fill: Color32, outline: Color32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            fill,
            outline,
        });
    }
}
