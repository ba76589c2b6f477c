// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use area_input::InputDispatcher;
use area_render::{DrawSurface, Renderer};
use area_view::{DisplayFlags, ViewState};
use kurbo::{Point, Size};
use ui_events::keyboard::{Key, KeyState, KeyboardEvent};

use crate::config::AreaConfig;

/// Host-independent input to the frame loop.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    /// The window was asked to close.
    Closed,
    /// The drawable area changed size.
    Resized(Size),
    /// A key changed state.
    Key {
        /// Press or release.
        state: KeyState,
        /// Logical key.
        key: Key,
    },
    /// The pointer moved to this screen position.
    PointerMoved(Point),
}

impl From<KeyboardEvent> for ViewerEvent {
    fn from(event: KeyboardEvent) -> Self {
        Self::Key {
            state: event.state,
            key: event.key,
        }
    }
}

/// Whether the loop keeps iterating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    /// Frames are still being produced.
    #[default]
    Running,
    /// A close was received; no further frames will be drawn.
    Closed,
}

/// The frame loop: owns all view state and turns events into frames.
#[derive(Clone, Debug)]
pub struct Viewer {
    view: ViewState,
    flags: DisplayFlags,
    dispatcher: InputDispatcher,
    renderer: Renderer,
    pointer: Point,
    clamp_on_resize: bool,
    state: LoopState,
}

impl Viewer {
    /// Builds a viewer from `config` for a drawable area of `viewport`.
    #[must_use]
    pub fn new(config: &AreaConfig, viewport: Size) -> Self {
        let mut view = ViewState::new(config.canvas_size, viewport);
        let (min, max) = config.scale_limits;
        view.set_scale_limits(min, max);
        Self {
            view,
            flags: config.initial_flags,
            dispatcher: InputDispatcher::default()
                .with_pan_step(config.pan_step)
                .with_zoom_step(config.zoom_step),
            renderer: Renderer::new(config.render),
            pointer: Point::ZERO,
            clamp_on_resize: config.clamp_on_resize,
            state: LoopState::Running,
        }
    }

    /// Current view state.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Current display toggles.
    #[must_use]
    pub fn flags(&self) -> &DisplayFlags {
        &self.flags
    }

    /// Last known pointer position in screen space.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Current loop state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The frame builder, e.g. to disable text when no font loaded.
    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// Applies one event. Resizes are forwarded to `surface`.
    pub fn handle_event<S: DrawSurface + ?Sized>(&mut self, event: ViewerEvent, surface: &mut S) {
        match event {
            ViewerEvent::Closed => {
                tracing::info!("close requested");
                self.state = LoopState::Closed;
            }
            ViewerEvent::Resized(size) => {
                tracing::debug!(width = size.width, height = size.height, "viewport resized");
                self.view.resize(size);
                if self.clamp_on_resize {
                    self.view.clamp_origin();
                }
                surface.resize(size);
            }
            ViewerEvent::Key { state, key } => {
                self.dispatcher
                    .dispatch_key(state, &key, &mut self.view, &mut self.flags);
            }
            ViewerEvent::PointerMoved(pos) => self.pointer = pos,
        }
    }

    /// Runs one loop iteration: drains `events`, then clears, renders and
    /// presents one frame.
    ///
    /// A close still finishes the iteration it arrives in. Once closed,
    /// further calls do nothing.
    pub fn run_frame<S, I>(&mut self, events: I, surface: &mut S) -> LoopState
    where
        S: DrawSurface + ?Sized,
        I: IntoIterator<Item = ViewerEvent>,
    {
        if self.state == LoopState::Closed {
            return self.state;
        }
        for event in events {
            self.handle_event(event, surface);
        }
        surface.clear();
        self.renderer
            .render(&self.view, &self.flags, self.pointer, surface);
        surface.present();
        self.state
    }
}
