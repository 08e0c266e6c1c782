//! Drag Me! - window-coupled 2D physics
//!
//! Opens a small window with a box, a ball and a wedge inside four walls.
//! Dragging the window drags the walls, and the shapes get knocked around.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use dragme::config::AppConfig;
use dragme::input::{InputAction, InputMapper};
use dragme::scene::DemoScene;
use dragme::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem, WindowTracker};
use dragme_math::Vec2;
use dragme_physics::ShapeError;
use dragme_render::{DrawList, Palette, Viewport};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    scene: DemoScene,
    simulation: SimulationSystem,
    tracker: WindowTracker,
    viewport: Viewport,
    palette: Palette,
    next_tick: Instant,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, ShapeError> {
        let viewport = Viewport::new(
            config.window.width as f32,
            config.window.height as f32,
            config.scene.pixels_per_meter,
        );
        let scene = DemoScene::build(
            Vec2::new(viewport.width, viewport.height),
            &config.scene,
            config.physics.to_physics_config(),
        )?;
        let simulation = SimulationSystem::new(&config.physics);

        Ok(Self {
            config,
            window: None,
            renderer: None,
            scene,
            simulation,
            tracker: WindowTracker::unseeded(),
            viewport,
            palette: Palette::default(),
            next_tick: Instant::now(),
        })
    }

    /// Rebuild the scene for the current content size
    fn reset_scene(&mut self) {
        let size = Vec2::new(self.viewport.width, self.viewport.height);
        if let Err(e) = self.scene.rebuild(size) {
            log::error!("Failed to rebuild scene: {}", e);
        }
    }

    /// Follow a change of the content size (resize or DPI change)
    fn on_content_resized(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let (width, height) = window.logical_size();
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        if (width, height) != (self.viewport.width, self.viewport.height) {
            log::debug!("Content size changed to {}x{}", width, height);
            self.viewport.width = width;
            self.viewport.height = height;
            self.reset_scene();
        }
    }

    fn on_window_moved(&mut self, position: winit::dpi::PhysicalPosition<i32>) {
        let scale_factor = self.window.as_ref().map(|w| w.scale_factor()).unwrap_or(1.0);
        let Some(delta) = self.tracker.on_moved(position, scale_factor) else {
            return;
        };
        if self.config.debug.log_window_moves {
            log::debug!("Window moved by ({}, {})", delta.dx, delta.dy);
        }

        self.scene
            .apply_window_motion(delta.to_vec2(), self.simulation.timestep());
        if self.config.scene.contain_bodies {
            self.scene.contain_dynamic_bodies();
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetScene => {
                self.reset_scene();
                log::info!("Scene reset");
            }
            InputAction::TogglePause => {
                let paused = self.simulation.toggle_pause();
                log::info!("Simulation {}", if paused { "paused" } else { "resumed" });
                if let Some(window) = &self.window {
                    window.update_title(paused);
                }
            }
            InputAction::StepOnce => {
                if self.simulation.is_paused() {
                    self.simulation.step_once(&mut self.scene);
                }
            }
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        let draw_list = DrawList::from_world(
            self.scene.world(),
            &self.viewport,
            &self.palette,
            self.config.rendering.circle_segments,
        );

        match renderer.render_frame(&draw_list, (self.viewport.width, self.viewport.height)) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                renderer.reconfigure();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match RenderSystem::new(window.window().clone(), self.config.window.vsync) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        self.tracker = match window.outer_position() {
            Some(position) => WindowTracker::new(position),
            None => WindowTracker::unseeded(),
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.on_content_resized();

        self.next_tick = Instant::now();
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Moved(position) => {
                self.on_window_moved(position);
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
                self.on_content_resized();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_tick {
            self.simulation.update(&mut self.scene);
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_tick = now + self.config.physics.tick_interval();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

fn main() {
    // Config first so it can pick the default log level
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging (RUST_LOG still wins)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Drag Me!");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to build scene: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
