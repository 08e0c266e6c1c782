//! 2D Rendering Library
//!
//! This crate provides the wgpu-based renderer that draws the physics world
//! as flat filled shapes.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`viewport::Viewport`] - Maps physics coordinates to window pixels
//! - [`palette::Palette`] - Colors for each kind of shape
//! - [`draw_list::DrawList`] - Tessellates the world into colored triangles
//! - [`pipeline::ShapePipeline`] - Draws a `DrawList` in a single render pass

pub mod context;
pub mod draw_list;
pub mod palette;
pub mod pipeline;
pub mod viewport;

pub use draw_list::{DrawList, DEFAULT_CIRCLE_SEGMENTS};
pub use palette::{Color, Palette};
pub use viewport::Viewport;
