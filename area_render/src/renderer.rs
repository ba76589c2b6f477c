// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use area_view::{DisplayFlags, ViewState};
use kurbo::{Affine, Circle, Point, Rect, Size};
use peniko::Color;

use crate::command::{DrawCmd, Vertex};
use crate::surface::DrawSurface;

/// Colors and metrics used to build a frame. Set once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Fill behind everything else.
    pub background: Color,
    /// Fill of the canvas-origin marker.
    pub marker_color: Color,
    /// Radius of the canvas-origin marker, in canvas units.
    pub marker_radius: f64,
    /// Color of the boundary box outline.
    pub boundary_color: Color,
    /// Color of overlay text.
    pub text_color: Color,
    /// Overlay font size in pixels.
    pub text_size: f32,
    /// Vertical distance between overlay lines.
    pub line_height: f64,
    /// Left inset of overlay lines.
    pub text_inset: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0, 0, 0),
            marker_color: Color::from_rgb8(255, 0, 0),
            marker_radius: 20.0,
            boundary_color: Color::from_rgb8(0, 255, 0),
            text_color: Color::from_rgb8(255, 255, 255),
            text_size: 12.0,
            line_height: 12.0,
            text_inset: 1.0,
        }
    }
}

/// Builds the per-frame command list.
#[derive(Clone, Debug)]
pub struct Renderer {
    config: RenderConfig,
    text_enabled: bool,
}

impl Renderer {
    /// Creates a renderer with text output enabled.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            text_enabled: true,
        }
    }

    /// The configuration this renderer was created with.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Whether overlay text may be emitted.
    #[must_use]
    pub fn text_enabled(&self) -> bool {
        self.text_enabled
    }

    /// Enables or disables overlay text regardless of
    /// [`DisplayFlags::show_overlay`]. Used when no font is available.
    pub fn set_text_enabled(&mut self, enabled: bool) {
        self.text_enabled = enabled;
    }

    /// Appends this frame's commands to `out` in painter's order.
    ///
    /// `pointer` is the pointer position in screen space.
    pub fn build(
        &self,
        view: &ViewState,
        flags: &DisplayFlags,
        pointer: Point,
        out: &mut Vec<DrawCmd>,
    ) {
        let viewport = view.viewport_size();
        let transform = view.transform();

        out.push(DrawCmd::FillRect {
            rect: viewport.to_rect(),
            color: self.config.background,
            transform: Affine::IDENTITY,
        });

        if flags.show_boundary_box {
            out.push(DrawCmd::LineStrip {
                vertices: boundary_vertices(viewport, self.config.boundary_color).to_vec(),
                transform,
            });
        }

        // Positioned by its bounding box, so the box's corner sits at the
        // canvas origin.
        let r = self.config.marker_radius;
        out.push(DrawCmd::FillCircle {
            circle: Circle::new((r, r), r),
            color: self.config.marker_color,
            transform,
        });

        if flags.show_overlay && self.text_enabled {
            let mut y = 0.0;
            for text in self.overlay_lines(view, pointer) {
                out.push(DrawCmd::Text {
                    text,
                    position: Point::new(self.config.text_inset, y),
                    size: self.config.text_size,
                    color: self.config.text_color,
                });
                y += self.config.line_height;
            }
        }
    }

    /// Builds the frame and paints it onto `surface`.
    ///
    /// The caller is responsible for [`DrawSurface::clear`] and
    /// [`DrawSurface::present`].
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        view: &ViewState,
        flags: &DisplayFlags,
        pointer: Point,
        surface: &mut S,
    ) {
        let mut frame = Vec::with_capacity(6);
        self.build(view, flags, pointer, &mut frame);
        for cmd in &frame {
            surface.draw(cmd);
        }
    }

    /// The three overlay lines: origin, scale, and pointer readout.
    ///
    /// The pointer readout subtracts the origin but does not divide by the
    /// scale (see [`ViewState::pointer_offset`]).
    #[must_use]
    pub fn overlay_lines(&self, view: &ViewState, pointer: Point) -> [String; 3] {
        let origin = view.origin();
        let mouse = view.pointer_offset(pointer);
        [
            format!(
                "originX: {} originY: {}",
                format_number(origin.x),
                format_number(origin.y)
            ),
            format!("scale: {}", format_number(view.scale())),
            format!(
                "mouseX: {} mouseY: {}",
                format_number(mouse.x),
                format_number(mouse.y)
            ),
        ]
    }
}

/// Closed outline of the rectangle `(0, 0)..viewport`.
fn boundary_vertices(viewport: Size, color: Color) -> [Vertex; 5] {
    let Rect { x0, y0, x1, y1 } = viewport.to_rect();
    [
        Vertex::new(Point::new(x0, y0), color),
        Vertex::new(Point::new(x1, y0), color),
        Vertex::new(Point::new(x1, y1), color),
        Vertex::new(Point::new(x0, y1), color),
        Vertex::new(Point::new(x0, y0), color),
    ]
}

/// Formats `value` with at most three decimals and no trailing zeros.
///
/// `1.0` prints as `1`, `0.25` as `0.25`, `-0.0` as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    let mut s = format!("{value:.3}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = String::from("0");
    }
    s
}
