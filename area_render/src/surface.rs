// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Size;

use crate::command::DrawCmd;

/// Something a frame can be painted onto.
///
/// A frame is `clear`, any number of `draw` calls in painter's order, then
/// `present`. `resize` may be called between frames when the window changes
/// size and replaces the logical view with `(0, 0, width, height)`.
pub trait DrawSurface {
    /// Adopts a new logical size.
    fn resize(&mut self, size: Size);

    /// Starts a new frame, discarding previous content.
    fn clear(&mut self);

    /// Paints one command over the current content.
    fn draw(&mut self, cmd: &DrawCmd);

    /// Finishes the frame and makes it visible.
    fn present(&mut self);
}

/// Call received by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    /// [`DrawSurface::resize`].
    Resize(Size),
    /// [`DrawSurface::clear`].
    Clear,
    /// [`DrawSurface::draw`].
    Draw(DrawCmd),
    /// [`DrawSurface::present`].
    Present,
}

/// [`DrawSurface`] that records calls instead of rasterizing.
///
/// Intended for tests and debugging that want to assert on emitted commands.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    size: Option<Size>,
}

impl RecordingSurface {
    /// All calls in the order they were made.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Most recent size passed to [`DrawSurface::resize`], if any.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Number of presented frames.
    #[must_use]
    pub fn frames_presented(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Present))
            .count()
    }

    /// Draw commands issued since the most recent [`DrawSurface::clear`].
    #[must_use]
    pub fn draws(&self) -> Vec<&DrawCmd> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, SurfaceCall::Clear))
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Draw(cmd) => Some(cmd),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, size: Size) {
        self.size = Some(size);
        self.calls.push(SurfaceCall::Resize(size));
    }

    fn clear(&mut self) {
        self.calls.push(SurfaceCall::Clear);
    }

    fn draw(&mut self, cmd: &DrawCmd) {
        self.calls.push(SurfaceCall::Draw(cmd.clone()));
    }

    fn present(&mut self) {
        self.calls.push(SurfaceCall::Present);
    }
}
