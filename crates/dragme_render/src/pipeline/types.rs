//! GPU-compatible data types for the shape pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A vertex in window pixel space with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in pixels (x right, y down)
    pub position: [f32; 2],
    /// Linear RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for converting pixels to clip space
/// Layout: 16 bytes (must match shape.wgsl ViewportUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewportUniforms {
    /// Viewport size in pixels
    pub size: [f32; 2],
    /// Padding to a 16-byte uniform
    pub _padding: [f32; 2],
}

impl ViewportUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width, height],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ViewportUniforms {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex2d_size() {
        // 2 floats position + 4 floats color = 24 bytes
        assert_eq!(size_of::<Vertex2D>(), 24);
    }

    #[test]
    fn test_viewport_uniforms_size() {
        assert_eq!(size_of::<ViewportUniforms>(), 16);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Vertex2D>(), 4);
        assert_eq!(std::mem::align_of::<ViewportUniforms>(), 4);
    }
}
