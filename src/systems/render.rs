//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Shape pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use dragme_render::{
    context::{ContextError, RenderContext},
    pipeline::{ShapePipeline, ViewportUniforms},
    DrawList,
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface or initialization error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Other(e.to_string())
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    shape_pipeline: ShapePipeline,
}

impl RenderSystem {
    /// Create render system for a window
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let shape_pipeline = ShapePipeline::new(&context.device, context.config.format);

        log::info!(
            "Renderer ready: {}x{} surface, format {:?}",
            context.size.width,
            context.size.height,
            context.config.format
        );

        Ok(Self {
            context,
            shape_pipeline,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure after the surface was lost
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Render a single frame
    ///
    /// `viewport_size` is the size, in the same pixel units as the draw list
    /// vertices, that maps onto the whole surface.
    pub fn render_frame(&mut self, draw_list: &DrawList, viewport_size: (f32, f32)) -> Result<(), RenderError> {
        self.shape_pipeline.update_uniforms(
            &self.context.queue,
            &ViewportUniforms::new(viewport_size.0, viewport_size.1),
        );
        self.shape_pipeline
            .upload_vertices(&self.context.device, &self.context.queue, &draw_list.vertices);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.shape_pipeline
            .render(&mut encoder, &view, draw_list.clear_color.to_wgpu());

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_context_error_converts() {
        let err: RenderError = ContextError::NoAdapter.into();
        assert_eq!(err.to_string(), "Render error: No suitable GPU adapter found");
    }
}
