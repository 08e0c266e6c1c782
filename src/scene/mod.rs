//! Scene construction and window coupling
//!
//! This module provides a declarative API for building walled 2D scenes
//! and the demo scene that follows the application window.

mod demo_scene;
mod scene_builder;

pub use demo_scene::DemoScene;
pub use scene_builder::{Boundary, BoundaryLayout, BuiltScene, SceneBuilder};
