// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use area_render::{DrawCmd, DrawSurface, Vertex};
use kurbo::{Affine, Circle, Point, Rect, Size};
use peniko::Color;
use vello_cpu::kurbo::{
    Affine as CpuAffine, BezPath, Circle as CpuCircle, Rect as CpuRect, Shape as _, Stroke,
};
use vello_cpu::{Pixmap, RenderContext};

use crate::font::Font;

const CIRCLE_TOLERANCE: f64 = 0.1;
const HAIRLINE_WIDTH: f64 = 1.0;

/// [`DrawSurface`] rasterizing into an in-memory pixmap with `vello_cpu`.
pub struct VelloCpuSurface {
    ctx: RenderContext,
    pixmap: Pixmap,
    font: Option<Font>,
}

impl fmt::Debug for VelloCpuSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VelloCpuSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}

impl VelloCpuSurface {
    /// Creates a surface of `size` pixels (rounded, at least 1×1).
    ///
    /// Without a font, [`DrawCmd::Text`] is ignored.
    #[must_use]
    pub fn new(size: Size, font: Option<Font>) -> Self {
        let (width, height) = pixel_dims(size);
        Self {
            ctx: RenderContext::new(width, height),
            pixmap: Pixmap::new(width, height),
            font,
        }
    }

    /// Width of the pixmap in pixels.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.pixmap.width()
    }

    /// Height of the pixmap in pixels.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.pixmap.height()
    }

    /// Whether text commands will be drawn.
    #[must_use]
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Premultiplied RGBA of one pixel of the presented frame.
    #[must_use]
    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = usize::from(y) * usize::from(self.width()) + usize::from(x);
        let p = self.pixmap.data().get(idx)?;
        Some([p.r, p.g, p.b, p.a])
    }

    /// Writes the presented frame as `0x00RRGGBB` words, row by row.
    ///
    /// `out` is resized to `width * height`.
    pub fn copy_0rgb(&self, out: &mut Vec<u32>) {
        out.clear();
        out.reserve(self.pixmap.data().len());
        for p in self.pixmap.data() {
            out.push((u32::from(p.r) << 16) | (u32::from(p.g) << 8) | u32::from(p.b));
        }
    }

    fn fill_text(&mut self, text: &str, position: Point, size: f32, color: Color) {
        let Some(font) = &self.font else {
            return;
        };
        let path = font.line_path(text, size);
        if path.elements().is_empty() {
            return;
        }
        self.ctx
            .set_transform(CpuAffine::translate((position.x, position.y)));
        self.ctx.set_paint(color);
        self.ctx.fill_path(&path);
    }

    fn stroke_strip(&mut self, vertices: &[Vertex], transform: Affine) {
        // Hairlines: map to screen space here so the stroke width is not
        // scaled by the view transform.
        self.ctx.set_transform(CpuAffine::IDENTITY);
        self.ctx.set_stroke(Stroke::new(HAIRLINE_WIDTH));
        for pair in vertices.windows(2) {
            let a = transform * pair[0].position;
            let b = transform * pair[1].position;
            let mut segment = BezPath::new();
            segment.move_to((a.x, a.y));
            segment.line_to((b.x, b.y));
            self.ctx.set_paint(pair[0].color);
            self.ctx.stroke_path(&segment);
        }
    }
}

impl DrawSurface for VelloCpuSurface {
    fn resize(&mut self, size: Size) {
        let (width, height) = pixel_dims(size);
        if width == self.width() && height == self.height() {
            return;
        }
        tracing::debug!(width, height, "resizing raster surface");
        self.ctx = RenderContext::new(width, height);
        self.pixmap = Pixmap::new(width, height);
    }

    fn clear(&mut self) {
        self.ctx.reset();
    }

    fn draw(&mut self, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::FillRect {
                rect,
                color,
                transform,
            } => {
                self.ctx.set_transform(affine_to_cpu(*transform));
                self.ctx.set_paint(*color);
                self.ctx.fill_rect(&rect_to_cpu(*rect));
            }
            DrawCmd::FillCircle {
                circle,
                color,
                transform,
            } => {
                self.ctx.set_transform(affine_to_cpu(*transform));
                self.ctx.set_paint(*color);
                self.ctx
                    .fill_path(&circle_to_cpu(*circle).to_path(CIRCLE_TOLERANCE));
            }
            DrawCmd::LineStrip {
                vertices,
                transform,
            } => self.stroke_strip(vertices, *transform),
            DrawCmd::Text {
                text,
                position,
                size,
                color,
            } => self.fill_text(text, *position, *size, *color),
        }
    }

    fn present(&mut self) {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "values are rounded and clamped to [1, u16::MAX] before casting"
)]
fn pixel_dims(size: Size) -> (u16, u16) {
    let clamp = |v: f64| v.round().clamp(1.0, f64::from(u16::MAX)) as u16;
    (clamp(size.width), clamp(size.height))
}

fn affine_to_cpu(xf: Affine) -> CpuAffine {
    CpuAffine::new(xf.as_coeffs())
}

fn rect_to_cpu(rect: Rect) -> CpuRect {
    CpuRect::new(rect.x0, rect.y0, rect.x1, rect.y1)
}

fn circle_to_cpu(circle: Circle) -> CpuCircle {
    CpuCircle::new((circle.center.x, circle.center.y), circle.radius)
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::pixel_dims;

    #[test]
    fn pixel_dims_round_and_clamp() {
        assert_eq!(pixel_dims(Size::new(800.4, 599.6)), (800, 600));
        assert_eq!(pixel_dims(Size::new(0.0, -5.0)), (1, 1));
        assert_eq!(pixel_dims(Size::new(1e9, 10.0)), (u16::MAX, 10));
    }
}
