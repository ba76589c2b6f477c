// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Circle, Point, Rect};
use peniko::Color;

/// A colored point of a [`DrawCmd::LineStrip`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Position before the command's transform is applied.
    pub position: Point,
    /// Color of the segment starting at this vertex.
    pub color: Color,
}

impl Vertex {
    /// Creates a vertex.
    #[must_use]
    pub const fn new(position: Point, color: Color) -> Self {
        Self { position, color }
    }
}

/// One draw call of a frame.
///
/// Geometric commands carry the transform they are drawn through; text is
/// always placed in screen space.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Filled axis-aligned rectangle.
    FillRect {
        /// Rectangle in user space.
        rect: Rect,
        /// Fill color.
        color: Color,
        /// User → screen transform.
        transform: Affine,
    },
    /// Filled circle.
    FillCircle {
        /// Circle in user space.
        circle: Circle,
        /// Fill color.
        color: Color,
        /// User → screen transform.
        transform: Affine,
    },
    /// Connected hairline segments through `vertices`, in order.
    ///
    /// A closed outline repeats its first vertex at the end.
    LineStrip {
        /// Vertices in user space.
        vertices: Vec<Vertex>,
        /// User → screen transform.
        transform: Affine,
    },
    /// A single line of text.
    Text {
        /// The text to draw.
        text: String,
        /// Top-left corner of the line in screen space.
        position: Point,
        /// Font size in pixels.
        size: f32,
        /// Fill color.
        color: Color,
    },
}
