use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use cgmath::Vector3;
use log::{info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use crate::audio::AmbientAudio;
use crate::display::{ChannelReadout, LogReadout};
use crate::gfx::camera::{CameraController, CameraManager, OrbitCamera};
use crate::gfx::host::{NullRenderHost, RenderHost};
use crate::gfx::picking::{self, FlatWater};
use crate::input::{bindings, InputTracker, TrackedKey};
use crate::model::{ColorChannels, CreationSession};
use crate::scene::Scene;

/// Orbit speed for held arrow keys (radians per second).
const ROTATE_SPEED: f32 = 1.0;
/// Distance change per scroll line.
const ZOOM_SPEED: f32 = 10.0;

/// Initial camera placement relative to the look-at target.
const INITIAL_DISTANCE: f32 = 105.0;
const INITIAL_POLAR: f32 = 1.2;
const INITIAL_AZIMUTH: f32 = 0.3;
/// The fixed orbit target, slightly above the water.
const LOOK_AT: Vector3<f32> = Vector3::new(0.0, 10.0, 0.0);

const DEFAULT_WINDOW_SIZE: (f32, f32) = (1200.0, 800.0);

/// Per-frame clock. Read once per frame; every subsystem sees the same
/// timestamp and delta, so the camera, previews, and animations never
/// observe different clocks within a frame.
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

/// One frame's clock reading.
#[derive(Debug, Clone, Copy)]
pub struct FrameTick {
    /// Milliseconds since the app started.
    pub elapsed_ms: f64,
    /// Milliseconds since the previous tick.
    pub delta_ms: f64,
}

impl FrameTick {
    pub fn delta_secs(&self) -> f32 {
        (self.delta_ms / 1000.0) as f32
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Current timestamp for event handlers that fire between frames.
    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Advance the clock by one frame.
    pub fn tick(&mut self) -> FrameTick {
        let now = Instant::now();
        let tick = FrameTick {
            elapsed_ms: now.duration_since(self.start).as_secs_f64() * 1000.0,
            delta_ms: now.duration_since(self.last).as_secs_f64() * 1000.0,
        };
        self.last = now;
        tick
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// The flotsam application: winit event loop plus the interaction state.
pub struct FlotsamApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    scene: Scene,
    input: InputTracker,
    colors: ColorChannels,
    session: Option<CreationSession>,
    host: Box<dyn RenderHost>,
    readout: Box<dyn ChannelReadout>,
    audio: Option<AmbientAudio>,
    ambient_path: PathBuf,
    clock: FrameClock,
    cursor: (f32, f32),
    window_size: (f32, f32),
}

impl FlotsamApp {
    /// Create a new flotsam application with default settings
    pub fn new() -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        Self {
            event_loop: Some(event_loop),
            app_state: AppState::new(
                Box::new(NullRenderHost::new()),
                Box::new(LogReadout::new()),
            ),
        }
    }

    /// Attach the rendering collaborator the scene draws through.
    pub fn set_render_host(&mut self, host: Box<dyn RenderHost>) {
        self.app_state.host = host;
    }

    /// Attach the channel readout refreshed every frame.
    pub fn set_channel_readout(&mut self, readout: Box<dyn ChannelReadout>) {
        self.app_state.readout = readout;
    }

    /// Use a different ambient audio asset.
    pub fn set_ambient_sound(&mut self, path: impl Into<PathBuf>) {
        self.app_state.ambient_path = path.into();
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> anyhow::Result<()> {
        let _ = env_logger::try_init();

        let event_loop = self
            .event_loop
            .take()
            .context("event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;
        Ok(())
    }
}

impl Default for FlotsamApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    fn new(host: Box<dyn RenderHost>, readout: Box<dyn ChannelReadout>) -> Self {
        let camera = OrbitCamera::new(
            INITIAL_DISTANCE,
            INITIAL_POLAR,
            INITIAL_AZIMUTH,
            LOOK_AT,
            DEFAULT_WINDOW_SIZE.0 / DEFAULT_WINDOW_SIZE.1,
        );
        let controller = CameraController::new(ROTATE_SPEED);
        let scene = Scene::new(CameraManager::new(camera, controller));

        Self {
            window: None,
            scene,
            input: InputTracker::new(),
            colors: ColorChannels::new(),
            session: None,
            host,
            readout,
            audio: None,
            ambient_path: PathBuf::from("assets/ambient.ogg"),
            clock: FrameClock::new(),
            cursor: (DEFAULT_WINDOW_SIZE.0 / 2.0, DEFAULT_WINDOW_SIZE.1 / 2.0),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    /// Begin a creation session at the cursor's resolved anchor.
    fn pointer_down(&mut self, now_ms: f64) {
        // A second down event while holding cannot normally arrive; keep the
        // active session if it does
        if self.session.is_some() {
            return;
        }
        let camera = &self.scene.camera_manager.camera;
        let ray = picking::screen_to_ray(self.cursor, self.window_size, camera);
        let water = FlatWater {
            height: self.scene.water_height,
        };
        let anchor = picking::resolve_anchor(&ray, &water, camera.target.y);
        self.session = Some(CreationSession::begin(now_ms, anchor));
    }

    /// End the session: tear down the preview and commit the object.
    fn pointer_up(&mut self, now_ms: f64) {
        let Some(session) = self.session.take() else {
            return;
        };
        let params = session.finish(now_ms, self.input.modifier_held());
        self.scene.preview.teardown(self.host.as_mut());
        self.scene.spawn(
            self.host.as_mut(),
            session.anchor(),
            params,
            self.colors.committed(),
            now_ms,
        );
    }

    fn key_down(&mut self, key: TrackedKey, now_ms: f64) {
        self.input.key_down(key, now_ms);
    }

    fn key_up(&mut self, key: TrackedKey, now_ms: f64) {
        if let Some(release) = self.input.key_up(key, now_ms) {
            self.colors.commit(release.channel, release.elapsed_ms);
        }
    }

    /// Focus loss: release events for held keys and buttons may never
    /// arrive, so drop every hold without committing anything.
    fn cancel_holds(&mut self) {
        self.input.clear_holds();
        if self.session.take().is_some() {
            info!("creation session cancelled on focus loss");
        }
        self.scene.preview.teardown(self.host.as_mut());
    }

    /// Advance everything by one frame from a single clock reading.
    fn advance_frame(&mut self, tick: FrameTick) {
        self.scene
            .camera_manager
            .update(self.input.arrows(), tick.delta_secs());

        let distance = self.scene.camera_manager.camera.distance();
        if let Some(audio) = &self.audio {
            audio.apply_distance(distance);
        }

        let committed = self.colors.committed();
        let preview_colors = self.colors.preview(self.input.channels(), tick.elapsed_ms);
        self.readout.refresh(committed, preview_colors);

        if let Some(session) = &mut self.session {
            let params = session.live(tick.elapsed_ms, self.input.modifier_held());
            let anchor = session.anchor();
            self.scene.preview.update(
                self.host.as_mut(),
                anchor,
                params.size,
                params.roundness,
                preview_colors,
            );
        }

        self.scene.update(self.host.as_mut(), tick.elapsed_ms);
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Ok(window) = event_loop.create_window(
            WindowAttributes::default().with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) {
            let window_handle = Arc::new(window);
            let (width, height): (u32, u32) = window_handle.inner_size().into();
            if width > 0 && height > 0 {
                self.window_size = (width as f32, height as f32);
                self.scene
                    .camera_manager
                    .camera
                    .resize_projection(width, height);
            }
            self.window = Some(window_handle);

            // Fire-and-forget: a missing device or asset just means silence
            match AmbientAudio::load(&self.ambient_path, self.scene.camera_manager.camera.target) {
                Ok(audio) => self.audio = Some(audio),
                Err(err) => warn!("ambient sound absent: {}", err),
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if matches!(
                    event.physical_key,
                    PhysicalKey::Code(KeyCode::Escape)
                ) && event.state == ElementState::Pressed
                {
                    event_loop.exit();
                    return;
                }
                if let Some(key) = bindings::tracked_key(event.physical_key) {
                    let now_ms = self.clock.now_ms();
                    match event.state {
                        ElementState::Pressed => self.key_down(key, now_ms),
                        ElementState::Released => self.key_up(key, now_ms),
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if bindings::is_primary_button(button) {
                    let now_ms = self.clock.now_ms();
                    match state {
                        ElementState::Pressed => self.pointer_down(now_ms),
                        ElementState::Released => self.pointer_up(now_ms),
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = -match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / 20.0,
                };
                self.scene.camera_manager.camera.add_distance(scroll * ZOOM_SPEED);
            }
            WindowEvent::Focused(false) => {
                self.cancel_holds();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if width > 0 && height > 0 {
                    self.window_size = (width as f32, height as f32);
                    self.scene
                        .camera_manager
                        .camera
                        .resize_projection(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let tick = self.clock.tick();
                self.advance_frame(tick);
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
