//! Platform layer: windowing, event loop and the frame driver.
//!
//! - One redraw per loop iteration, requested from `about_to_wait`.
//! - Keyboard input becomes [`corelib::Command`]s, see [`input`].
//! - Resize reconfigures the surface and the camera projection.

pub mod input;
pub mod timing;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use corelib::{CameraPreset, RenderMode, SceneContext};
use renderer::GpuState;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::input::command_for_key;
use crate::timing::FrameClock;

/// Startup options collected by the binary.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub backends: wgpu::Backends,
    pub show_fps: bool,
    pub width: u32,
    pub height: u32,
    pub camera: CameraPreset,
    pub render_mode: RenderMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            show_fps: false,
            width: 1280,
            height: 720,
            camera: CameraPreset::Axonometric,
            render_mode: RenderMode::Filled,
        }
    }
}

struct App {
    config: RunConfig,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    scene: SceneContext,
    clock: FrameClock,
    /// Fatal error raised inside the event loop, returned from [`run`].
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: RunConfig) -> Self {
        let mut scene = SceneContext::new(config.width as f32 / config.height.max(1) as f32);
        scene.select_camera(config.camera);
        scene.mode = config.render_mode;
        Self {
            config,
            window: None,
            gpu: None,
            scene,
            clock: FrameClock::new(Instant::now()),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title("Heliscene")
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );
        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        let gpu = pollster::block_on(GpuState::new(window.clone(), self.config.backends))
            .context("GPU initialization failed")?;
        if let Err(e) = self.scene.resize(size.width, size.height) {
            log::warn!("Keeping initial aspect ratio: {e}");
        }

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(gpu);
        self.clock = FrameClock::new(Instant::now());
        Ok(())
    }

    fn redraw(&mut self) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let now = Instant::now();
        let dt = self.clock.tick(now);

        let frame = self.scene.frame(dt);
        let draws = frame.draws.len();
        match gpu.render(&frame) {
            Ok(()) => {}
            Err(e) if GpuState::is_surface_lost(&e) => {
                log::warn!("Surface {e}, reconfiguring");
                gpu.recreate_surface();
            }
            Err(e) => log::error!("Unable to render: {e}"),
        }

        if self.config.show_fps {
            if let Some(fps) = self.clock.fps(now) {
                log::info!(
                    "FPS: {:.1} ({} draws, {:?})",
                    fps,
                    draws,
                    self.scene.flight.phase
                );
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested. Exiting event loop.");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                log::info!("Resized: {}x{}", size.width, size.height);
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(size.width, size.height);
                }
                if let Err(e) = self.scene.resize(size.width, size.height) {
                    log::debug!("Ignoring resize: {e}");
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::info!("Scale factor changed: {:.3}", scale_factor);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape && state == ElementState::Pressed {
                    log::info!("Escape pressed. Exiting event loop.");
                    event_loop.exit();
                } else if let Some(command) = command_for_key(code, state) {
                    self.scene.apply(command);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open the window and drive the scene until it is closed.
pub fn run(config: RunConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("Event loop error: {e:?}"))?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
