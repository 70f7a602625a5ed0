use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, Canvas, FrameCtx};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::paint::Color;
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "proscenium".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until it is disposed.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Where the app sits in its `create .. dispose` lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Lifecycle {
    /// Window not created yet; `create` has not run.
    Pending,
    Running,
    Paused,
    /// `dispose` has run. Terminal.
    Disposed,
}

/// Records the clear requested during a frame.
struct FrameCanvas {
    clear: Option<Color>,
}

impl Canvas for FrameCanvas {
    fn clear(&mut self, color: Color) {
        self.clear = Some(color);
    }
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    lifecycle: Lifecycle,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            lifecycle: Lifecycle::Pending,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
            .try_build()
            .context("GPU initialization failed")?;

        self.entry = Some(entry);
        Ok(())
    }

    fn request_redraw(&self) {
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create initial window: {e:#}");
            self.lifecycle = Lifecycle::Disposed;
            event_loop.exit();
            return;
        }

        self.app.create();
        self.lifecycle = Lifecycle::Running;

        if let Some(entry) = &self.entry {
            let size = entry.with_gpu(|gpu| gpu.size());
            self.app.resize(size.width, size.height);
        }

        self.request_redraw();
    }

    fn pause(&mut self) {
        if self.lifecycle == Lifecycle::Running {
            self.lifecycle = Lifecycle::Paused;
            self.app.pause();
        }
    }

    fn resume(&mut self) {
        if self.lifecycle == Lifecycle::Paused {
            self.lifecycle = Lifecycle::Running;
            if let Some(entry) = &mut self.entry {
                entry.with_clock_mut(|clock| clock.reset());
            }
            self.app.resume();
            self.request_redraw();
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if matches!(self.lifecycle, Lifecycle::Running | Lifecycle::Paused) {
            self.app.dispose();
        }
        self.lifecycle = Lifecycle::Disposed;
        event_loop.exit();
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if let Some(entry) = &mut self.entry {
            entry.with_gpu_mut(|gpu| gpu.resize(new_size));
        }
        if matches!(self.lifecycle, Lifecycle::Running | Lifecycle::Paused) {
            self.app.resize(new_size.width, new_size.height);
        }
        self.request_redraw();
    }

    /// Drives one frame: app render, clear + present, then `frame_presented`.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry else {
            return;
        };

        let mut control = AppControl::Continue;
        let mut surface_fatal = false;

        entry.with_mut(|fields| {
            let time = fields.clock.tick();
            let mut canvas = FrameCanvas { clear: None };

            control = app.render(&mut FrameCtx::new(time, &mut canvas));

            fields.window.pre_present_notify();
            let clear = canvas.clear.unwrap_or(Color::BLACK);
            match fields.gpu.present_clear(clear) {
                Ok(()) => {}
                Err(SurfaceErrorAction::Fatal) => surface_fatal = true,
                Err(action) => log::debug!("frame {} not presented: {action:?}", time.frame_index),
            }

            app.frame_presented();
        });

        if surface_fatal {
            log::error!("fatal surface error, shutting down");
            self.shutdown(event_loop);
        } else if control == AppControl::Exit {
            log::info!("exit requested by app");
            self.shutdown(event_loop);
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        match self.lifecycle {
            Lifecycle::Pending => self.start(event_loop),
            Lifecycle::Paused => self.resume(),
            Lifecycle::Running | Lifecycle::Disposed => {}
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.pause();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.lifecycle == Lifecycle::Disposed {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw while running; pacing is the app's job.
        if self.lifecycle == Lifecycle::Running {
            self.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => self.shutdown(event_loop),

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.entry.as_ref().map(|e| e.with_window(|w| w.inner_size())) {
                    self.resize(size);
                }
            }

            WindowEvent::Occluded(true) => self.pause(),
            WindowEvent::Occluded(false) => self.resume(),

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, event_loop: &ActiveEventLoop) {
        self.shutdown(event_loop);
    }
}
