//! The "Drag Me!" scene and its window coupling
//!
//! Physics coordinates are window-relative: the origin is the center of the
//! window content. When the window moves by `d`, everything that should stay
//! put on screen is shifted by `-d`. The walls are shifted by `-d` as well and
//! then sweep back onto their anchors during the next step, so bodies and
//! walls close the gap `d` exactly once and the sweep knocks bodies around.
//! The sweep is clamped to [`MAX_WALL_SWEEP`]; anything beyond it reaches
//! the bodies only through [`DemoScene::contain_dynamic_bodies`].

use dragme_math::Vec2;
use dragme_physics::{BodyDesc, BodyKey, PhysicsConfig, PhysicsMaterial, PhysicsWorld, ShapeError};

use super::scene_builder::{Boundary, BoundaryLayout, SceneBuilder};
use crate::config::SceneConfig;

/// Restitution shared by the demo bodies
const BODY_RESTITUTION: f32 = 0.5;

/// Longest distance the walls travel in one step, in meters
pub const MAX_WALL_SWEEP: f32 = 2.0;

/// A walled physics world that follows the application window
pub struct DemoScene {
    world: PhysicsWorld,
    boundaries: Vec<Boundary>,
    dynamic: Vec<BodyKey>,
    interior: Vec2,
    /// Wall displacement accumulated since the last step
    pending: Vec2,
    settings: SceneConfig,
    physics: PhysicsConfig,
}

impl DemoScene {
    /// Build the demo for a content area of `content_size` logical pixels
    pub fn build(content_size: Vec2, settings: &SceneConfig, physics: PhysicsConfig) -> Result<Self, ShapeError> {
        let layout = Self::layout(content_size, settings);

        let quad = BodyDesc::cuboid(Vec2::new(0.0, 2.0), Vec2::new(3.0, 3.0))?
            .with_material(PhysicsMaterial::new(0.5, BODY_RESTITUTION));
        let ball = BodyDesc::circle(Vec2::new(-3.0, 5.0), 2.0)?
            .with_material(PhysicsMaterial::new(PhysicsMaterial::default().friction, BODY_RESTITUTION));
        let wedge = BodyDesc::polygon(
            Vec2::new(3.0, 7.0),
            &[Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(0.0, 3.0)],
        )?
        .with_material(PhysicsMaterial::new(PhysicsMaterial::default().friction, BODY_RESTITUTION));

        let built = SceneBuilder::new()
            .with_physics(physics.clone())
            .add_boundaries(layout)?
            .add_body(quad)
            .add_body(ball)
            .add_body(wedge)
            .build();

        log::info!(
            "Built scene: {} bodies, interior {:.2} x {:.2} m",
            built.world.body_count(),
            2.0 * built.interior.x,
            2.0 * built.interior.y
        );

        Ok(Self {
            world: built.world,
            boundaries: built.boundaries,
            dynamic: built.dynamic,
            interior: built.interior,
            pending: Vec2::ZERO,
            settings: settings.clone(),
            physics,
        })
    }

    /// Throw the current world away and build a fresh one
    pub fn rebuild(&mut self, content_size: Vec2) -> Result<(), ShapeError> {
        *self = Self::build(content_size, &self.settings, self.physics.clone())?;
        log::debug!("Scene reset");
        Ok(())
    }

    fn layout(content_size: Vec2, settings: &SceneConfig) -> BoundaryLayout {
        BoundaryLayout {
            half_extents: Vec2::new(
                content_size.x / (2.0 * settings.pixels_per_meter),
                content_size.y / (2.0 * settings.pixels_per_meter),
            ),
            thickness: settings.boundary_thickness,
            offset: settings.boundary_offset,
            restitution: settings.boundary_restitution,
        }
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    pub fn dynamic_bodies(&self) -> &[BodyKey] {
        &self.dynamic
    }

    /// Half extents of the space inside the walls
    pub fn interior(&self) -> Vec2 {
        self.interior
    }

    pub fn settings(&self) -> &SceneConfig {
        &self.settings
    }

    /// Wall displacement waiting for the next step
    pub fn pending_displacement(&self) -> Vec2 {
        self.pending
    }

    /// Convert a window delta in logical pixels to physics units
    ///
    /// Screen y grows downward while physics y grows upward.
    pub fn pixels_to_meters(&self, delta_px: Vec2) -> Vec2 {
        let scale = self.settings.pixels_per_meter;
        Vec2::new(delta_px.x / scale, -delta_px.y / scale)
    }

    /// React to the window moving by `delta_px` logical pixels
    ///
    /// Dynamic bodies are shifted against the motion so they stay put on
    /// screen. The walls are placed behind their anchors by the accumulated
    /// motion (clamped to [`MAX_WALL_SWEEP`]) with the velocity that carries
    /// them back in one step of `step_dt` seconds.
    pub fn apply_window_motion(&mut self, delta_px: Vec2, step_dt: f32) {
        let delta = self.pixels_to_meters(delta_px);
        if delta == Vec2::ZERO {
            return;
        }

        for &key in &self.dynamic {
            self.world.translate(key, -delta);
        }

        self.pending += delta;
        let sweep = self.wall_sweep();
        let velocity = if step_dt > 0.0 { sweep * (1.0 / step_dt) } else { Vec2::ZERO };
        for boundary in &self.boundaries {
            self.world.set_transform(boundary.key, boundary.anchor - sweep, 0.0);
            self.world.set_linear_velocity(boundary.key, velocity);
        }
    }

    /// The part of the pending motion the walls cover in the next step
    pub fn wall_sweep(&self) -> Vec2 {
        let length = self.pending.length();
        if length > MAX_WALL_SWEEP {
            self.pending * (MAX_WALL_SWEEP / length)
        } else {
            self.pending
        }
    }

    /// Put the walls back on their anchors once a step has consumed the motion
    pub fn after_step(&mut self) {
        for boundary in &self.boundaries {
            self.world.set_transform(boundary.key, boundary.anchor, 0.0);
            self.world.set_linear_velocity(boundary.key, Vec2::ZERO);
            self.world.set_angular_velocity(boundary.key, 0.0);
        }
        self.pending = Vec2::ZERO;
    }

    /// Pull any dynamic body whose center left the interior back inside
    ///
    /// A body can start out partly overlapping a wall, so only the center is
    /// clamped; the solver pushes the rest out. Returns the number of bodies
    /// that were moved.
    pub fn contain_dynamic_bodies(&mut self) -> usize {
        let mut moved = 0;
        for &key in &self.dynamic {
            let Some(center) = self.world.get_body(key).map(|body| body.world_center()) else {
                continue;
            };
            let clamped = center.clamp_components(-self.interior, self.interior);
            if clamped != center {
                self.world.translate(key, clamped - center);
                moved += 1;
            }
        }
        if moved > 0 {
            log::debug!("Pulled {} bodies back inside the walls", moved);
        }
        moved
    }

    /// Step the world and re-anchor the walls
    pub fn step(&mut self, dt: f32) {
        self.world.step(dt);
        self.after_step();
    }
}
