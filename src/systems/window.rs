//! Window management system
//!
//! Handles window creation, centering, position queries, and title updates.

use std::sync::Arc;
use winit::{
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event_loop::ActiveEventLoop,
    window::Window,
};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        if config.centered {
            if let Some(monitor) = event_loop.primary_monitor() {
                let size: PhysicalSize<u32> =
                    LogicalSize::new(config.width, config.height).to_physical(monitor.scale_factor());
                attrs = attrs.with_position(centered_position(monitor.position(), monitor.size(), size));
            } else {
                log::warn!("No primary monitor reported; leaving window placement to the OS");
            }
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Current outer position, if the platform reports one
    pub fn outer_position(&self) -> Option<PhysicalPosition<i32>> {
        self.window.outer_position().ok()
    }

    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    /// Content size in logical pixels
    pub fn logical_size(&self) -> (f32, f32) {
        let size: LogicalSize<f32> = self.window.inner_size().to_logical(self.window.scale_factor());
        (size.width, size.height)
    }

    /// Update window title with simulation state
    pub fn update_title(&self, paused: bool) {
        self.window.set_title(&format_title(&self.base_title, paused));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Top-left position that centers a window of `size` on a monitor
pub fn centered_position(
    monitor_position: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let x = monitor_position.x + (monitor_size.width as i32 - size.width as i32) / 2;
    let y = monitor_position.y + (monitor_size.height as i32 - size.height as i32) / 2;
    PhysicalPosition::new(x, y)
}

fn format_title(base: &str, paused: bool) -> String {
    if paused {
        format!("{} [Paused - Space to resume, . to step]", base)
    } else {
        base.to_string()
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
