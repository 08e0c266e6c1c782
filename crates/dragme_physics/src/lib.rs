//! 2D physics for Drag Me!
//!
//! A thin wrapper over [rapier2d](https://rapier.rs): rapier owns the world,
//! integration and contact solving. This crate adds:
//! - Validated shape and body descriptions ([`Shape`], [`BodyDesc`])
//! - Static, kinematic and dynamic body types mapped onto rapier's
//! - Read-only body views in `dragme_math` types ([`BodyRef`], [`WorldShape`])

pub mod body;
pub mod material;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{BodyDesc, BodyKey, BodyRef, BodyType};
pub use material::PhysicsMaterial;
pub use shapes::{Shape, ShapeError, WorldShape};
pub use world::{PhysicsConfig, PhysicsWorld};
