//! Rigid body descriptions and read-only views

use crate::material::PhysicsMaterial;
use crate::shapes::{Shape, ShapeError, WorldShape};
use dragme_math::Vec2;
use rapier2d::prelude::*;

/// Key to a rigid body in the physics world
///
/// Generational: a key to a removed body never resolves to a newer one.
pub type BodyKey = RigidBodyHandle;

/// How a body participates in the simulation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyType {
    /// Never moves
    Static,
    /// Moves by its velocity only; unaffected by gravity and contacts
    Kinematic,
    /// Fully simulated
    #[default]
    Dynamic,
}

impl From<BodyType> for RigidBodyType {
    fn from(body_type: BodyType) -> Self {
        match body_type {
            BodyType::Static => RigidBodyType::Fixed,
            BodyType::Kinematic => RigidBodyType::KinematicVelocityBased,
            BodyType::Dynamic => RigidBodyType::Dynamic,
        }
    }
}

impl From<RigidBodyType> for BodyType {
    fn from(body_type: RigidBodyType) -> Self {
        match body_type {
            RigidBodyType::Fixed => BodyType::Static,
            RigidBodyType::KinematicVelocityBased | RigidBodyType::KinematicPositionBased => BodyType::Kinematic,
            RigidBodyType::Dynamic => BodyType::Dynamic,
        }
    }
}

/// Everything needed to add one body with one collider to the world
///
/// The body's `position` is its origin; the shape is defined relative to it.
/// The center of mass may be offset from the origin (e.g. a right triangle
/// whose origin sits on a corner).
#[derive(Clone)]
pub struct BodyDesc {
    body_type: BodyType,
    position: Vec2,
    collider: ColliderBuilder,
    material: PhysicsMaterial,
}

impl BodyDesc {
    /// Describe a dynamic body with the default material
    pub fn new(position: Vec2, shape: &Shape) -> Result<Self, ShapeError> {
        Ok(Self {
            body_type: BodyType::Dynamic,
            position,
            collider: shape.collider_builder()?,
            material: PhysicsMaterial::default(),
        })
    }

    pub fn circle(position: Vec2, radius: f32) -> Result<Self, ShapeError> {
        Self::new(position, &Shape::circle(radius)?)
    }

    pub fn cuboid(position: Vec2, half_extents: Vec2) -> Result<Self, ShapeError> {
        Self::new(position, &Shape::cuboid(half_extents)?)
    }

    /// Convex polygon with body-local vertices
    pub fn polygon(position: Vec2, vertices: &[Vec2]) -> Result<Self, ShapeError> {
        Self::new(position, &Shape::polygon(vertices)?)
    }

    pub fn with_body_type(mut self, body_type: BodyType) -> Self {
        self.body_type = body_type;
        self
    }

    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn body_type(&self) -> BodyType {
        self.body_type
    }

    /// Build the rapier body and its collider
    ///
    /// Dynamic bodies get continuous collision detection so a fast knock
    /// from a wall cannot carry them through another wall.
    pub(crate) fn build(self) -> (RigidBody, Collider) {
        let body = RigidBodyBuilder::new(self.body_type.into())
            .translation(Vector::new(self.position.x, self.position.y))
            .ccd_enabled(self.body_type == BodyType::Dynamic)
            .build();
        let collider = self.material.apply(self.collider).build();
        (body, collider)
    }
}

/// Read-only view of a body and its collider
#[derive(Clone, Copy)]
pub struct BodyRef<'a> {
    body: &'a RigidBody,
    collider: &'a Collider,
}

impl<'a> BodyRef<'a> {
    pub(crate) fn new(body: &'a RigidBody, colliders: &'a ColliderSet) -> Option<Self> {
        let handle = body.colliders().first()?;
        let collider = colliders.get(*handle)?;
        Some(Self { body, collider })
    }

    pub fn body_type(&self) -> BodyType {
        self.body.body_type().into()
    }

    pub fn is_dynamic(&self) -> bool {
        self.body.is_dynamic()
    }

    /// Body origin in world space
    pub fn position(&self) -> Vec2 {
        let t = self.body.translation();
        Vec2::new(t.x, t.y)
    }

    /// Rotation in radians, counter-clockwise positive
    pub fn angle(&self) -> f32 {
        self.body.rotation().angle()
    }

    pub fn linear_velocity(&self) -> Vec2 {
        let v = self.body.linvel();
        Vec2::new(v.x, v.y)
    }

    pub fn material(&self) -> PhysicsMaterial {
        PhysicsMaterial::of(self.collider)
    }

    /// Collider outline at the body's current pose
    ///
    /// Computed from the body pose rather than the collider's cached pose, so
    /// it reflects teleports made since the last step.
    pub fn shape(&self) -> Option<WorldShape> {
        WorldShape::from_collider(self.collider, self.body.position())
    }

    /// Center of mass in world space
    pub fn world_center(&self) -> Vec2 {
        self.shape().map_or_else(|| self.position(), |shape| shape.centroid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_type_round_trip() {
        for body_type in [BodyType::Static, BodyType::Kinematic, BodyType::Dynamic] {
            let rapier: RigidBodyType = body_type.into();
            assert_eq!(BodyType::from(rapier), body_type);
        }
        assert_eq!(BodyType::from(RigidBodyType::KinematicPositionBased), BodyType::Kinematic);
    }

    #[test]
    fn test_desc_defaults_to_dynamic() {
        let desc = BodyDesc::circle(Vec2::ZERO, 1.0).unwrap();
        assert_eq!(desc.body_type(), BodyType::Dynamic);

        let desc = desc.with_body_type(BodyType::Kinematic);
        assert_eq!(desc.body_type(), BodyType::Kinematic);
    }

    #[test]
    fn test_invalid_shapes_are_rejected() {
        assert!(BodyDesc::circle(Vec2::ZERO, -1.0).is_err());
        assert!(BodyDesc::cuboid(Vec2::ZERO, Vec2::new(0.0, 1.0)).is_err());
        assert!(BodyDesc::polygon(Vec2::ZERO, &[Vec2::ZERO, Vec2::X]).is_err());
    }

    #[test]
    fn test_build_places_body_and_material() {
        let (body, collider) = BodyDesc::cuboid(Vec2::new(0.0, 2.0), Vec2::new(3.0, 3.0))
            .unwrap()
            .with_material(PhysicsMaterial::new(0.5, 0.5))
            .build();

        assert!(body.is_dynamic());
        assert!(body.is_ccd_enabled());
        assert_eq!(*body.translation(), Vector::new(0.0, 2.0));
        assert_eq!(collider.restitution(), 0.5);
        assert_eq!(collider.friction(), 0.5);
    }

    #[test]
    fn test_walls_skip_ccd() {
        let (body, _) = BodyDesc::cuboid(Vec2::ZERO, Vec2::new(10.0, 1.0))
            .unwrap()
            .with_body_type(BodyType::Kinematic)
            .build();
        assert!(body.is_kinematic());
        assert!(!body.is_ccd_enabled());
    }
}
