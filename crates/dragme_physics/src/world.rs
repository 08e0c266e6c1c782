//! Physics world and simulation
//!
//! Owns the rapier pipeline and its sets. Callers only ever see [`BodyKey`]s,
//! [`BodyRef`] views and `Vec2` values; rapier types stay inside this crate.

use crate::body::{BodyDesc, BodyKey, BodyRef};
use dragme_math::Vec2;
use rapier2d::prelude::*;
use std::num::NonZeroUsize;

/// Configuration for the physics simulation
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Gravity acceleration (negative y = down)
    pub gravity: Vec2,
    /// Constraint solver iterations per step
    pub solver_iterations: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -30.0),
            solver_iterations: 12,
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Set the solver iteration count (at least one is always run)
    pub fn with_solver_iterations(mut self, iterations: usize) -> Self {
        self.solver_iterations = iterations;
        self
    }

    fn integration_parameters(&self) -> IntegrationParameters {
        let mut params = IntegrationParameters::default();
        params.num_solver_iterations = NonZeroUsize::new(self.solver_iterations).unwrap_or(NonZeroUsize::MIN);
        params
    }
}

/// The physics world containing all rigid bodies
pub struct PhysicsWorld {
    config: PhysicsConfig,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            integration_parameters: config.integration_parameters(),
            config,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Replace the configuration; bodies are kept
    pub fn set_config(&mut self, config: PhysicsConfig) {
        self.integration_parameters = config.integration_parameters();
        self.config = config;
    }

    /// Add a body with its collider and return its key
    pub fn add_body(&mut self, desc: BodyDesc) -> BodyKey {
        let (body, collider) = desc.build();
        let key = self.bodies.insert(body);
        self.colliders.insert_with_parent(collider, key, &mut self.bodies);
        key
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Get a view of a body, or None for a stale key
    pub fn get_body(&self, key: BodyKey) -> Option<BodyRef<'_>> {
        BodyRef::new(self.bodies.get(key)?, &self.colliders)
    }

    /// Iterate over all bodies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyKey, BodyRef<'_>)> {
        self.bodies
            .iter()
            .filter_map(|(key, body)| Some((key, BodyRef::new(body, &self.colliders)?)))
    }

    /// Place a body's origin and rotation, waking it up
    pub fn set_transform(&mut self, key: BodyKey, position: Vec2, angle: f32) {
        if let Some(body) = self.bodies.get_mut(key) {
            body.set_position(Isometry::new(Vector::new(position.x, position.y), angle), true);
        }
    }

    /// Move a body's origin by `delta` without touching its velocity
    pub fn translate(&mut self, key: BodyKey, delta: Vec2) {
        if let Some(body) = self.bodies.get_mut(key) {
            let moved = body.translation() + Vector::new(delta.x, delta.y);
            body.set_translation(moved, true);
        }
    }

    pub fn set_linear_velocity(&mut self, key: BodyKey, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(key) {
            body.set_linvel(Vector::new(velocity.x, velocity.y), true);
        }
    }

    pub fn set_angular_velocity(&mut self, key: BodyKey, angular_velocity: f32) {
        if let Some(body) = self.bodies.get_mut(key) {
            body.set_angvel(angular_velocity, true);
        }
    }

    /// Step the simulation forward by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        let gravity = Vector::new(self.config.gravity.x, self.config.gravity.y);
        self.pipeline.step(
            &gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
