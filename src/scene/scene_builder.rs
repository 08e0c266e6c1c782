//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for building a walled 2D scene with physics.

use dragme_math::Vec2;
use dragme_physics::{BodyDesc, BodyKey, BodyType, PhysicsConfig, PhysicsMaterial, PhysicsWorld, ShapeError};

/// A wall that follows the window, with its rest position in window-relative physics space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub key: BodyKey,
    pub anchor: Vec2,
}

/// Wall placement around a content area
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryLayout {
    /// Half of the content area in physics units
    pub half_extents: Vec2,
    /// Half-thickness of each wall
    pub thickness: f32,
    /// Wall center distance as a multiple of the half extents
    pub offset: f32,
    pub restitution: f32,
}

impl BoundaryLayout {
    /// Half extents of the open space between the inner faces of the walls
    pub fn interior(&self) -> Vec2 {
        Vec2::new(
            (self.offset * self.half_extents.x - self.thickness).max(0.0),
            (self.offset * self.half_extents.y - self.thickness).max(0.0),
        )
    }

    /// Center and half extents of the bottom, top, left and right walls
    pub fn walls(&self) -> [(Vec2, Vec2); 4] {
        let Vec2 { x: hw, y: hh } = self.half_extents;
        let t = self.thickness;
        let k = self.offset;
        [
            (Vec2::new(0.0, -k * hh), Vec2::new(hw, t)),
            (Vec2::new(0.0, k * hh), Vec2::new(hw, t)),
            (Vec2::new(-k * hw, 0.0), Vec2::new(t, hh)),
            (Vec2::new(k * hw, 0.0), Vec2::new(t, hh)),
        ]
    }
}

/// The parts of a built scene, handed to `DemoScene`
pub struct BuiltScene {
    pub world: PhysicsWorld,
    pub boundaries: Vec<Boundary>,
    pub dynamic: Vec<BodyKey>,
    pub interior: Vec2,
}

/// Builder for constructing walled 2D scenes with physics
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new()
///     .with_physics(PhysicsConfig::default())
///     .add_boundaries(layout)?
///     .add_body(BodyDesc::circle(Vec2::new(-3.0, 5.0), 2.0)?)
///     .build();
/// ```
pub struct SceneBuilder {
    world: PhysicsWorld,
    boundaries: Vec<Boundary>,
    dynamic: Vec<BodyKey>,
    interior: Vec2,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new() -> Self {
        Self {
            world: PhysicsWorld::new(),
            boundaries: Vec::new(),
            dynamic: Vec::new(),
            interior: Vec2::ZERO,
        }
    }

    /// Use the given physics configuration
    ///
    /// Call before adding bodies; bodies already added are kept.
    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.world.set_config(config);
        self
    }

    /// Add four kinematic walls enclosing the content area
    ///
    /// Kinematic bodies never collide with each other, so overlapping
    /// corners need no filtering.
    pub fn add_boundaries(mut self, layout: BoundaryLayout) -> Result<Self, ShapeError> {
        let material = PhysicsMaterial::new(PhysicsMaterial::default().friction, layout.restitution);
        for (center, half_extents) in layout.walls() {
            let wall = BodyDesc::cuboid(center, half_extents)?
                .with_body_type(BodyType::Kinematic)
                .with_material(material);
            let key = self.world.add_body(wall);
            self.boundaries.push(Boundary { key, anchor: center });
        }
        self.interior = layout.interior();
        Ok(self)
    }

    /// Add a free-moving body
    ///
    /// Bodies that are not dynamic are added to the world but not tracked
    /// as window-anchored content.
    pub fn add_body(mut self, body: BodyDesc) -> Self {
        let is_dynamic = body.body_type() == BodyType::Dynamic;
        let key = self.world.add_body(body);
        if is_dynamic {
            self.dynamic.push(key);
        }
        self
    }

    /// Finish building
    pub fn build(self) -> BuiltScene {
        BuiltScene {
            world: self.world,
            boundaries: self.boundaries,
            dynamic: self.dynamic,
            interior: self.interior,
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
