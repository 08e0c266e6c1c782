//! Application systems
//!
//! The pieces `main.rs` wires together: the window, move tracking, the
//! fixed-step simulation driver and the GPU renderer.

mod render;
mod simulation;
mod tracking;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem};
pub use tracking::{WindowDelta, WindowTracker};
pub use window::{centered_position, WindowError, WindowSystem};
