//! Rendering pipeline components
//!
//! This module contains the render pipeline that draws tessellated shapes.

pub mod shape_pipeline;
pub mod types;

// Re-export types
pub use types::{Vertex2D, ViewportUniforms};

// Re-export pipelines
pub use shape_pipeline::{ShapePipeline, INITIAL_VERTEX_CAPACITY};
