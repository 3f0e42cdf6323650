//! PNG export.
//!
//! The committed scene is replayed onto a [`RasterSurface`], an
//! [`image::RgbaImage`] scaled from canvas units to the export resolution.
//! The tool preview is never exported.

use std::fs;
use std::path::Path;

use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use egui::emath::Rot2;
use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::config::SketchpadConfig;
use crate::drawable::Drawable;
use crate::error::{SketchpadError, SketchpadResult};
use crate::geometry;
use crate::surface::RenderSurface;

/// Load a TrueType/OpenType font for rasterizing sticker glyphs
pub fn load_font(path: &Path) -> SketchpadResult<FontArc> {
    let data = fs::read(path)?;
    FontArc::try_from_vec(data)
        .map_err(|err| SketchpadError::InvalidFont(format!("{}: {}", path.display(), err)))
}

/// Renders a list of drawables into an image of a fixed size
#[derive(Clone)]
pub struct Exporter {
    size: [u32; 2],
    canvas_size: Vec2,
    background: Color32,
    glyph_size: f32,
    font: Option<FontArc>,
}

impl Exporter {
    pub fn new(size: [u32; 2], canvas_size: Vec2, background: Color32, glyph_size: f32) -> Self {
        Self {
            size,
            canvas_size,
            background,
            glyph_size,
            font: None,
        }
    }

    /// Build an exporter from config, loading the sticker font if one is set
    pub fn from_config(config: &SketchpadConfig) -> SketchpadResult<Self> {
        let exporter = Self::new(
            config.export.size,
            config.canvas_size(),
            config.background_color(),
            config.sticker_size,
        );
        match &config.export.font_path {
            Some(path) => Ok(exporter.with_font(load_font(path)?)),
            None => Ok(exporter),
        }
    }

    pub fn with_font(mut self, font: FontArc) -> Self {
        self.font = Some(font);
        self
    }

    pub fn size(&self) -> [u32; 2] {
        self.size
    }

    pub fn render(&self, drawables: &[Drawable]) -> RgbaImage {
        let mut surface = RasterSurface::new(
            self.size,
            self.canvas_size,
            self.background,
            self.glyph_size,
        );
        if let Some(font) = &self.font {
            surface = surface.with_font(font.clone());
        }

        surface.clear(Rect::from_min_size(Pos2::ZERO, self.canvas_size));
        for drawable in drawables {
            drawable.render(&mut surface);
        }
        surface.into_image()
    }

    /// Render and write a PNG file
    pub fn export_png(&self, drawables: &[Drawable], path: &Path) -> SketchpadResult<()> {
        let image = self.render(drawables);
        image.save_with_format(path, ImageFormat::Png)?;
        log::info!(
            "Exported {} elements to {} ({}x{})",
            drawables.len(),
            path.display(),
            self.size[0],
            self.size[1]
        );
        Ok(())
    }
}

/// A pixel buffer implementing [`RenderSurface`].
///
/// Canvas coordinates are scaled to pixels, and so is stroke thickness.
/// Glyphs need a font; without one they are skipped.
pub struct RasterSurface {
    image: RgbaImage,
    /// Pixels per canvas unit along each axis
    scale: Vec2,
    background: Color32,
    glyph_size: f32,
    font: Option<FontArc>,
}

impl RasterSurface {
    pub fn new(size: [u32; 2], canvas_size: Vec2, background: Color32, glyph_size: f32) -> Self {
        let fill = Rgba(background.to_srgba_unmultiplied());
        Self {
            image: RgbaImage::from_pixel(size[0], size[1], fill),
            scale: vec2(
                size[0] as f32 / canvas_size.x,
                size[1] as f32 / canvas_size.y,
            ),
            background,
            glyph_size,
            font: None,
        }
    }

    pub fn with_font(mut self, font: FontArc) -> Self {
        self.font = Some(font);
        self
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn to_pixels(&self, pos: Pos2) -> Pos2 {
        pos2(pos.x * self.scale.x, pos.y * self.scale.y)
    }

    /// Scale for lengths that have no direction (thickness, font size)
    fn length_scale(&self) -> f32 {
        (self.scale.x + self.scale.y) / 2.0
    }

    /// Integer pixel range covered by `rect`, clipped to the image
    fn pixel_range(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let (width, height) = self.image.dimensions();
        let x0 = rect.min.x.floor().max(0.0) as u32;
        let y0 = rect.min.y.floor().max(0.0) as u32;
        let x1 = (rect.max.x.ceil().max(0.0) as u32).min(width);
        let y1 = (rect.max.y.ceil().max(0.0) as u32).min(height);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    /// Source-over blend of `color` at `coverage` into one pixel
    fn blend(&mut self, x: u32, y: u32, color: Color32, coverage: f32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let alpha = (a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let pixel = self.image.get_pixel_mut(x, y);
        let dst_alpha = pixel[3] as f32 / 255.0;
        let out_alpha = alpha + dst_alpha * (1.0 - alpha);
        for (channel, src) in [r, g, b].into_iter().enumerate() {
            let src = src as f32 / 255.0;
            let dst = pixel[channel] as f32 / 255.0;
            let out = if out_alpha > 0.0 {
                (src * alpha + dst * dst_alpha * (1.0 - alpha)) / out_alpha
            } else {
                0.0
            };
            pixel[channel] = (out * 255.0).round() as u8;
        }
        pixel[3] = (out_alpha * 255.0).round() as u8;
    }

    /// Glyph coverage laid out left to right, one value per pixel
    fn rasterize_text(
        font: &FontArc,
        text: &str,
        px_size: f32,
    ) -> Option<(Vec<f32>, usize, usize)> {
        let scaled = font.as_scaled(PxScale::from(px_size));

        let mut caret = 0.0;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::new();
        for c in text.chars().filter(|c| !c.is_control()) {
            let id = scaled.glyph_id(c);
            if let Some(previous) = previous {
                caret += scaled.kern(previous, id);
            }
            glyphs.push(id.with_scale_and_position(px_size, point(caret, scaled.ascent())));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        let width = caret.ceil() as usize;
        let height = scaled.height().ceil() as usize;
        if width == 0 || height == 0 {
            return None;
        }

        let mut coverage = vec![0.0_f32; width * height];
        let mut outlined_any = false;
        for glyph in glyphs {
            // Whitespace has no outline, and neither do bitmap-only (CBDT) emoji
            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            outlined_any = true;
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, c| {
                let x = bounds.min.x as i64 + gx as i64;
                let y = bounds.min.y as i64 + gy as i64;
                if (0..width as i64).contains(&x) && (0..height as i64).contains(&y) {
                    let index = y as usize * width + x as usize;
                    coverage[index] = coverage[index].max(c);
                }
            });
        }

        if !outlined_any {
            log::warn!("Font has no outlines for {:?}; it is left out of export", text);
            return None;
        }
        Some((coverage, width, height))
    }
}

impl RenderSurface for RasterSurface {
    fn clear(&mut self, region: Rect) {
        let region = Rect::from_min_max(self.to_pixels(region.min), self.to_pixels(region.max));
        let Some((x0, y0, x1, y1)) = self.pixel_range(region) else {
            return;
        };
        let background = Rgba(self.background.to_srgba_unmultiplied());
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, background);
            }
        }
    }

    fn draw_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        if points.is_empty() {
            return;
        }
        let points: Vec<Pos2> = points.iter().map(|point| self.to_pixels(*point)).collect();
        let radius = thickness * self.length_scale() / 2.0;

        let bounds = geometry::calculate_bounds(&points, radius + 1.0);
        let Some((x0, y0, x1, y1)) = self.pixel_range(bounds) else {
            return;
        };
        let width = (x1 - x0) as usize;
        let mut coverage = vec![0.0_f32; width * (y1 - y0) as usize];

        // A single point is a zero-length segment, i.e. a dot
        let segments: Vec<(Pos2, Pos2)> = if points.len() == 1 {
            vec![(points[0], points[0])]
        } else {
            points.windows(2).map(|pair| (pair[0], pair[1])).collect()
        };

        // Max coverage per pixel, so joints are not blended twice
        for (start, end) in segments {
            let segment_bounds = geometry::calculate_bounds(&[start, end], radius + 1.0);
            let Some((sx0, sy0, sx1, sy1)) = self.pixel_range(segment_bounds) else {
                continue;
            };
            for y in sy0.max(y0)..sy1.min(y1) {
                for x in sx0.max(x0)..sx1.min(x1) {
                    let center = pos2(x as f32 + 0.5, y as f32 + 0.5);
                    let distance = geometry::distance_to_line_segment(center, start, end);
                    let c = (radius + 0.5 - distance).clamp(0.0, 1.0);
                    let index = (y - y0) as usize * width + (x - x0) as usize;
                    coverage[index] = coverage[index].max(c);
                }
            }
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let c = coverage[(y - y0) as usize * width + (x - x0) as usize];
                if c > 0.0 {
                    self.blend(x, y, color, c);
                }
            }
        }
    }

    fn draw_glyph(&mut self, text: &str, center: Pos2, rotation_degrees: f32) {
        let Some(font) = &self.font else {
            log::warn!("No sticker font configured; {:?} left out of export", text);
            return;
        };
        let px_size = self.glyph_size * self.length_scale();
        let Some((coverage, width, height)) = Self::rasterize_text(font, text, px_size) else {
            return;
        };

        // Sample the upright text through the inverse rotation around its center
        let text_center = vec2(width as f32 / 2.0, height as f32 / 2.0);
        let center = self.to_pixels(center);
        let inverse = Rot2::from_angle(-rotation_degrees.to_radians());
        let reach = text_center.length() + 1.0;
        let area = Rect::from_center_size(center, Vec2::splat(reach * 2.0));
        let Some((x0, y0, x1, y1)) = self.pixel_range(area) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let offset = pos2(x as f32 + 0.5, y as f32 + 0.5) - center;
                let source = inverse * offset + text_center;
                if source.x < 0.0 || source.y < 0.0 {
                    continue;
                }
                let (sx, sy) = (source.x as usize, source.y as usize);
                if sx < width && sy < height {
                    let c = coverage[sy * width + sx];
                    if c > 0.0 {
                        self.blend(x, y, Color32::BLACK, c);
                    }
                }
            }
        }
    }

    fn draw_circle(&mut self, center: Pos2, radius: f32, fill: Color32, outline: Color32) {
        let center = self.to_pixels(center);
        let radius = radius * self.length_scale();
        let area = Rect::from_center_size(center, Vec2::splat(radius * 2.0 + 4.0));
        let Some((x0, y0, x1, y1)) = self.pixel_range(area) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let distance = (pos2(x as f32 + 0.5, y as f32 + 0.5) - center).length();
                let inside = (radius + 0.5 - distance).clamp(0.0, 1.0);
                if inside > 0.0 {
                    self.blend(x, y, fill, inside);
                }
                let ring = (1.5 - (distance - radius).abs()).clamp(0.0, 1.0);
                if ring > 0.0 {
                    self.blend(x, y, outline, ring);
                }
            }
        }
    }
}
