//! Drag Me! - a window with a physics world inside it
//!
//! Drag the window around and the walls move with it while the shapes
//! inside try to stay where they are on screen.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
