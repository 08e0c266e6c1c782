//! Keyboard controls
//!
//! Maps key presses to the handful of actions the demo understands.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
