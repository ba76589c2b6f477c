// Copyright 2026 the Area Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! winit + softbuffer host for a [`Viewer`].

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use area_render::{DrawCmd, DrawSurface};
use area_render_vello_cpu::{Font, VelloCpuSurface};
use kurbo::{Point, Size};
use ui_events_winit::{WindowEventReducer, WindowEventTranslation};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::AreaConfig;
use crate::viewer::{LoopState, Viewer, ViewerEvent};

/// Opens the window and runs the viewer until it is closed.
///
/// Returns an error if the event loop, window or presentation surface
/// cannot be created.
pub fn run(config: AreaConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = AreaApp::new(config);
    event_loop
        .run_app(&mut app)
        .context("event loop terminated abnormally")?;
    app.error.map_or(Ok(()), Err)
}

/// Wraps an error that is only [`fmt::Display`], such as softbuffer's, which
/// is neither `Send` nor [`std::error::Error`].
fn message_error<E: fmt::Display>(what: &'static str) -> impl FnOnce(E) -> anyhow::Error {
    move |err| anyhow::anyhow!("{what}: {err}")
}

/// How soon a queued event needs a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Wake {
    /// Picked up by the next paced frame.
    Idle,
    /// Ask the window for a redraw.
    Redraw,
    /// Run the frame right away. Closing must not wait on a redraw that a
    /// hidden window may never receive.
    Now,
}

/// Converts the non-keyboard window events the viewer cares about.
fn viewer_event(event: &WindowEvent) -> Option<(ViewerEvent, Wake)> {
    match event {
        WindowEvent::CloseRequested => Some((ViewerEvent::Closed, Wake::Now)),
        WindowEvent::Resized(size) => {
            Some((ViewerEvent::Resized(physical_size(*size)), Wake::Redraw))
        }
        WindowEvent::CursorMoved { position, .. } => {
            let PhysicalPosition { x, y } = *position;
            Some((ViewerEvent::PointerMoved(Point::new(x, y)), Wake::Idle))
        }
        _ => None,
    }
}

/// Queues `event`. A [`Wake::Now`] event drains the queue and finishes a
/// frame immediately, returning the resulting loop state.
fn enqueue<S: DrawSurface + ?Sized>(
    viewer: &mut Viewer,
    pending: &mut Vec<ViewerEvent>,
    surface: &mut S,
    event: ViewerEvent,
    wake: Wake,
) -> Option<LoopState> {
    pending.push(event);
    (wake == Wake::Now).then(|| viewer.run_frame(pending.drain(..), surface))
}

fn physical_size(size: PhysicalSize<u32>) -> Size {
    Size::new(f64::from(size.width), f64::from(size.height))
}

/// Raster surface paired with the window it is shown in.
struct WindowSurface {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    raster: VelloCpuSurface,
    scratch: Vec<u32>,
}

impl WindowSurface {
    fn new(window: Arc<Window>, font: Option<Font>) -> anyhow::Result<Self> {
        let context = softbuffer::Context::new(window.clone())
            .map_err(message_error("failed to create softbuffer context"))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(message_error("failed to create softbuffer surface"))?;
        let mut this = Self {
            raster: VelloCpuSurface::new(physical_size(window.inner_size()), font),
            window,
            surface,
            scratch: Vec::new(),
        };
        this.resize_buffer();
        Ok(this)
    }

    fn resize_buffer(&mut self) {
        let (Some(width), Some(height)) = (
            NonZeroU32::new(u32::from(self.raster.width())),
            NonZeroU32::new(u32::from(self.raster.height())),
        ) else {
            return;
        };
        if let Err(err) = self.surface.resize(width, height) {
            tracing::error!(error = %err, "failed to resize presentation buffer");
        }
    }

    fn blit(&mut self) -> Result<(), softbuffer::SoftBufferError> {
        self.raster.copy_0rgb(&mut self.scratch);
        let mut buffer = self.surface.buffer_mut()?;
        let len = buffer.len().min(self.scratch.len());
        buffer[..len].copy_from_slice(&self.scratch[..len]);
        self.window.pre_present_notify();
        buffer.present()
    }
}

impl DrawSurface for WindowSurface {
    fn resize(&mut self, size: Size) {
        self.raster.resize(size);
        self.resize_buffer();
    }

    fn clear(&mut self) {
        self.raster.clear();
    }

    fn draw(&mut self, cmd: &DrawCmd) {
        self.raster.draw(cmd);
    }

    fn present(&mut self) {
        self.raster.present();
        if let Err(err) = self.blit() {
            tracing::error!(error = %err, "failed to present frame");
        }
    }
}

struct AreaApp {
    config: AreaConfig,
    viewer: Viewer,
    font: Option<Font>,
    reducer: WindowEventReducer,
    pending: Vec<ViewerEvent>,
    surface: Option<WindowSurface>,
    next_frame: Instant,
    error: Option<anyhow::Error>,
}

impl AreaApp {
    fn new(config: AreaConfig) -> Self {
        let mut viewer = Viewer::new(&config, config.window_size);
        let font = match Font::load_first(&config.font_paths) {
            Ok(font) => {
                tracing::info!(?font, "overlay font loaded");
                Some(font)
            }
            Err(err) => {
                tracing::warn!(error = %err, "no overlay font available, overlay text disabled");
                viewer.renderer_mut().set_text_enabled(false);
                None
            }
        };
        tracing::info!(
            max_fps = config.max_fps,
            vsync = config.vsync,
            "frame pacing configured; vsync is left to the compositor"
        );
        Self {
            config,
            viewer,
            font,
            reducer: WindowEventReducer::default(),
            pending: Vec::new(),
            surface: None,
            next_frame: Instant::now(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!(error = %err, "shutting down");
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_surface(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<WindowSurface> {
        let size = self.config.window_size;
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(size.width, size.height))
            .with_resizable(true);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let inner = window.inner_size();
        tracing::info!(
            width = inner.width,
            height = inner.height,
            title = %self.config.title,
            "window created"
        );
        WindowSurface::new(window, self.font.clone())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if self.viewer.run_frame(self.pending.drain(..), surface) == LoopState::Closed {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for AreaApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }
        match self.create_surface(event_loop) {
            Ok(surface) => {
                // The platform may not honor the requested size.
                let size = physical_size(surface.window.inner_size());
                self.pending.push(ViewerEvent::Resized(size));
                surface.window.request_redraw();
                self.surface = Some(surface);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self
            .surface
            .as_ref()
            .filter(|s| s.window.id() == window_id)
            .map(|s| s.window.clone())
        else {
            return;
        };

        if let Some(WindowEventTranslation::Keyboard(k)) =
            self.reducer.reduce(window.scale_factor(), &event)
        {
            self.pending.push(k.into());
        }

        if let Some((translated, wake)) = viewer_event(&event) {
            if wake == Wake::Redraw {
                window.request_redraw();
            }
            let Some(surface) = self.surface.as_mut() else {
                return;
            };
            let state = enqueue(
                &mut self.viewer,
                &mut self.pending,
                surface,
                translated,
                wake,
            );
            if state == Some(LoopState::Closed) {
                event_loop.exit();
            }
        } else if matches!(event, WindowEvent::RedrawRequested) {
            self.redraw(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(surface) = &self.surface else {
            return;
        };
        let Some(interval) = self.config.frame_interval() else {
            surface.window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Poll);
            return;
        };
        let now = Instant::now();
        if now >= self.next_frame {
            surface.window.request_redraw();
            self.next_frame = now + interval;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
