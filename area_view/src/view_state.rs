// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Affine, Point, Size, Vec2};

use crate::flags::PanDirection;

/// Smallest scale reachable by [`ViewState::zoom`] unless reconfigured.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;

/// Largest scale reachable by [`ViewState::zoom`] unless reconfigured.
pub const DEFAULT_MAX_SCALE: f64 = 4.0;

/// Scale values are kept on this grid.
const SCALE_QUANTUM: f64 = 1e6;

/// Origin offset, uniform scale, and the extents they are clamped against.
///
/// The view maps a canvas-space point `p` to `p * scale + origin` in screen
/// space. All mutators are total: out-of-range requests are clamped or
/// ignored, never rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    origin: Vec2,
    scale: f64,
    canvas_size: Size,
    viewport_size: Size,
    min_scale: f64,
    max_scale: f64,
}

impl ViewState {
    /// Creates a view over `canvas_size` seen through a viewport of
    /// `viewport_size`.
    ///
    /// - Initial origin is `(0, 0)`.
    /// - Initial scale is `1.0`.
    /// - Scale is clamped to `[0.1, 4.0]`.
    #[must_use]
    pub fn new(canvas_size: Size, viewport_size: Size) -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: 1.0,
            canvas_size,
            viewport_size,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }

    /// Current origin offset in screen units.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Fixed size of the virtual canvas.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Current size of the viewport (the window's drawable area).
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Configured `(min, max)` scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The range is normalized so that `min <= max` and the current scale is
    /// clamped into it.
    pub fn set_scale_limits(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_scale = min;
        self.max_scale = max;
        self.scale = self.scale.clamp(min, max);
    }

    /// Largest origin reachable by panning on each axis.
    ///
    /// This is `canvas - viewport`, floored at zero when the viewport is
    /// larger than the canvas.
    #[must_use]
    pub fn origin_limit(&self) -> Vec2 {
        Vec2::new(
            (self.canvas_size.width - self.viewport_size.width).max(0.0),
            (self.canvas_size.height - self.viewport_size.height).max(0.0),
        )
    }

    /// Moves the origin by `step` along every direction in `directions`.
    ///
    /// [`PanDirection::LEFT`] and [`PanDirection::TOP`] increase the origin
    /// but only while it is below [`ViewState::origin_limit`];
    /// [`PanDirection::RIGHT`] and [`PanDirection::DOWN`] decrease it but
    /// only while it is above zero. A step that would cross either end stops
    /// at it. At a boundary further steps in that direction are no-ops.
    pub fn pan(&mut self, directions: PanDirection, step: f64) {
        let limit = self.origin_limit();
        if directions.contains(PanDirection::LEFT) && self.origin.x < limit.x {
            self.origin.x = (self.origin.x + step).min(limit.x);
        }
        if directions.contains(PanDirection::TOP) && self.origin.y < limit.y {
            self.origin.y = (self.origin.y + step).min(limit.y);
        }
        if directions.contains(PanDirection::RIGHT) && self.origin.x > 0.0 {
            self.origin.x = (self.origin.x - step).max(0.0);
        }
        if directions.contains(PanDirection::DOWN) && self.origin.y > 0.0 {
            self.origin.y = (self.origin.y - step).max(0.0);
        }
    }

    /// Adds `delta` to the scale, clamping into the configured limits.
    pub fn zoom(&mut self, delta: f64) {
        let next = quantize_scale(self.scale + delta);
        self.scale = next.clamp(self.min_scale, self.max_scale);
    }

    /// Replaces the viewport size.
    ///
    /// The origin is left as is, so after shrinking the canvas it may lie
    /// beyond [`ViewState::origin_limit`] until [`ViewState::clamp_origin`]
    /// is called or the user pans back.
    pub fn resize(&mut self, viewport_size: Size) {
        self.viewport_size = viewport_size;
    }

    /// Pulls the origin back into `[0, origin_limit]` on both axes.
    pub fn clamp_origin(&mut self) {
        let limit = self.origin_limit();
        self.origin = Vec2::new(
            self.origin.x.clamp(0.0, limit.x),
            self.origin.y.clamp(0.0, limit.y),
        );
    }

    /// Resets the scale to `1.0` and/or the origin to `(0, 0)`.
    pub fn reset(&mut self, reset_scale: bool, reset_origin: bool) {
        if reset_scale {
            self.scale = 1.0;
        }
        if reset_origin {
            self.origin = Vec2::ZERO;
        }
    }

    /// Canvas → screen transform: translate by the origin, then scale.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.origin) * Affine::scale(self.scale)
    }

    /// Maps a canvas-space point to screen space.
    #[must_use]
    pub fn canvas_to_screen(&self, pt: Point) -> Point {
        self.transform() * pt
    }

    /// Maps a screen-space point to canvas space (the inverse of
    /// [`ViewState::transform`]).
    #[must_use]
    pub fn screen_to_canvas(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.origin.x) / self.scale,
            (pt.y - self.origin.y) / self.scale,
        )
    }

    /// Screen-space point with the origin subtracted and the scale ignored.
    ///
    /// Equal to [`ViewState::screen_to_canvas`] only while `scale == 1`.
    /// This is the pointer readout shown in the overlay.
    #[must_use]
    pub fn pointer_offset(&self, pt: Point) -> Point {
        pt - self.origin
    }
}

fn quantize_scale(scale: f64) -> f64 {
    (scale * SCALE_QUANTUM).round() / SCALE_QUANTUM
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ViewState};
    use crate::PanDirection;

    fn view() -> ViewState {
        ViewState::new(Size::new(5000.0, 5000.0), Size::new(800.0, 600.0))
    }

    #[test]
    fn ten_left_pans_move_origin_by_one_hundred() {
        let mut vp = view();
        for _ in 0..10 {
            vp.pan(PanDirection::LEFT, 10.0);
        }
        assert_eq!(vp.origin(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn left_pan_stops_at_canvas_minus_viewport() {
        let mut vp = view();
        for _ in 0..420 {
            vp.pan(PanDirection::LEFT, 10.0);
        }
        assert_eq!(vp.origin().x, 4200.0);

        for _ in 0..5 {
            vp.pan(PanDirection::LEFT, 10.0);
            assert_eq!(vp.origin().x, 4200.0, "pan past the limit must be a no-op");
        }
    }

    #[test]
    fn top_pan_uses_vertical_extent() {
        let mut vp = view();
        for _ in 0..1000 {
            vp.pan(PanDirection::TOP, 10.0);
        }
        assert_eq!(vp.origin().y, 4400.0);
    }

    #[test]
    fn right_and_down_stop_at_zero() {
        let mut vp = view();
        vp.pan(PanDirection::RIGHT | PanDirection::DOWN, 10.0);
        assert_eq!(vp.origin(), Vec2::ZERO);

        vp.pan(PanDirection::LEFT | PanDirection::TOP, 25.0);
        vp.pan(PanDirection::RIGHT | PanDirection::DOWN, 10.0);
        assert_eq!(vp.origin(), Vec2::new(15.0, 15.0));
        vp.pan(PanDirection::RIGHT | PanDirection::DOWN, 10.0);
        assert_eq!(vp.origin(), Vec2::new(5.0, 5.0));
        vp.pan(PanDirection::RIGHT | PanDirection::DOWN, 10.0);
        assert_eq!(vp.origin(), Vec2::ZERO);
    }

    #[test]
    fn unaligned_step_never_overshoots_limit() {
        let mut vp = ViewState::new(Size::new(100.0, 100.0), Size::new(75.0, 75.0));
        for _ in 0..10 {
            vp.pan(PanDirection::LEFT, 10.0);
        }
        assert_eq!(vp.origin().x, 25.0);
    }

    #[test]
    fn viewport_larger_than_canvas_cannot_pan() {
        let mut vp = ViewState::new(Size::new(500.0, 500.0), Size::new(800.0, 600.0));
        vp.pan(PanDirection::all(), 10.0);
        assert_eq!(vp.origin(), Vec2::ZERO);
        assert_eq!(vp.origin_limit(), Vec2::ZERO);
    }

    #[test]
    fn nine_zoom_outs_land_exactly_on_min_scale() {
        let mut vp = view();
        for _ in 0..9 {
            vp.zoom(-0.1);
        }
        assert_eq!(vp.scale(), DEFAULT_MIN_SCALE);

        vp.zoom(-0.1);
        assert_eq!(vp.scale(), DEFAULT_MIN_SCALE);
    }

    #[test]
    fn zoom_in_is_monotonic_until_max() {
        let mut vp = view();
        let mut last = vp.scale();
        for _ in 0..100 {
            vp.zoom(0.1);
            assert!(vp.scale() >= last, "zoom in must not decrease scale");
            assert!(vp.scale() <= DEFAULT_MAX_SCALE);
            last = vp.scale();
        }
        assert_eq!(vp.scale(), DEFAULT_MAX_SCALE);
    }

    #[test]
    fn zoom_steps_stay_on_decimal_grid() {
        let mut vp = view();
        vp.zoom(0.1);
        vp.zoom(0.1);
        assert_eq!(vp.scale(), 1.2);
        vp.zoom(-0.1);
        assert_eq!(vp.scale(), 1.1);
    }

    #[test]
    fn scale_limits_are_normalized_and_reclamp() {
        let mut vp = view();
        vp.zoom(2.0);
        vp.set_scale_limits(2.0, 0.5);
        assert_eq!(vp.scale_limits(), (0.5, 2.0));
        assert_eq!(vp.scale(), 2.0);
    }

    #[test]
    fn reset_restores_defaults_independently() {
        let mut vp = view();
        vp.pan(PanDirection::LEFT, 30.0);
        vp.zoom(0.5);

        vp.reset(true, false);
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.origin().x, 30.0);

        vp.zoom(0.5);
        vp.reset(false, true);
        assert_eq!(vp.scale(), 1.5);
        assert_eq!(vp.origin(), Vec2::ZERO);

        vp.pan(PanDirection::TOP, 30.0);
        vp.reset(true, true);
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.origin(), Vec2::ZERO);
    }

    #[test]
    fn resize_keeps_stale_origin_until_clamped() {
        let mut vp = ViewState::new(Size::new(1000.0, 1000.0), Size::new(400.0, 300.0));
        for _ in 0..60 {
            vp.pan(PanDirection::LEFT, 10.0);
        }
        assert_eq!(vp.origin().x, 600.0);

        vp.resize(Size::new(800.0, 600.0));
        assert_eq!(vp.viewport_size(), Size::new(800.0, 600.0));
        assert_eq!(vp.canvas_size(), Size::new(1000.0, 1000.0));
        assert_eq!(vp.origin().x, 600.0);

        // Stale origin: LEFT is gated, RIGHT still walks back.
        vp.pan(PanDirection::LEFT, 10.0);
        assert_eq!(vp.origin().x, 600.0);

        vp.clamp_origin();
        assert_eq!(vp.origin().x, 200.0);
    }

    #[test]
    fn transform_translates_then_scales() {
        let mut vp = view();
        vp.pan(PanDirection::LEFT | PanDirection::TOP, 10.0);
        vp.zoom(1.0);

        let p = Point::new(5.0, 7.0);
        assert_eq!(vp.canvas_to_screen(p), Point::new(20.0, 24.0));
        let back = vp.screen_to_canvas(vp.canvas_to_screen(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn pointer_offset_ignores_scale() {
        let mut vp = view();
        vp.pan(PanDirection::LEFT, 10.0);
        vp.zoom(1.0);

        let screen = Point::new(50.0, 40.0);
        assert_eq!(vp.pointer_offset(screen), Point::new(40.0, 40.0));
        assert_eq!(vp.screen_to_canvas(screen), Point::new(20.0, 20.0));
    }
}
