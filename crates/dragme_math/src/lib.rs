//! 2D Mathematics Library
//!
//! Small value types shared by the physics and rendering crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components

mod vec2;

pub use vec2::Vec2;
