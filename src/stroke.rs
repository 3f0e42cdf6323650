use egui::{Color32, Pos2};

use crate::surface::RenderSurface;

/// A freehand line: ordered points drawn with one thickness and color.
///
/// A stroke always has at least one point, the place where the pointer went
/// down. Points are only appended while its drag is active.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            color,
            thickness,
        }
    }

    // Extend the line as the marker drags
    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) {
        surface.draw_polyline(&self.points, self.thickness, self.color);
    }
}
