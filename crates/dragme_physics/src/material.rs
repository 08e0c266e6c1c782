//! Physical material properties for collision response

use rapier2d::prelude::*;

/// Physical material properties for collision response
///
/// Materials define how objects interact during collisions, including
/// friction (how much objects resist sliding), restitution (bounciness)
/// and density (mass per unit area).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsMaterial {
    /// Friction coefficient (0.0 = ice, 1.0 = rubber)
    pub friction: f32,
    /// Restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,
    /// Mass per unit area (only meaningful for dynamic bodies)
    pub density: f32,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self {
            friction: 0.2,
            restitution: 0.0,
            density: 1.0,
        }
    }
}

impl PhysicsMaterial {
    /// Create a new physics material with custom friction and restitution
    ///
    /// Values are clamped to the range [0.0, 1.0]; density is 1.0.
    pub fn new(friction: f32, restitution: f32) -> Self {
        Self {
            friction: friction.clamp(0.0, 1.0),
            restitution: restitution.clamp(0.0, 1.0),
            density: 1.0,
        }
    }

    /// Apply to a collider under construction
    ///
    /// When two colliders touch, the bouncier one wins.
    pub(crate) fn apply(&self, builder: ColliderBuilder) -> ColliderBuilder {
        builder
            .friction(self.friction)
            .restitution(self.restitution)
            .restitution_combine_rule(CoefficientCombineRule::Max)
            .density(self.density)
    }

    /// Read the material back from a built collider
    pub(crate) fn of(collider: &Collider) -> Self {
        Self {
            friction: collider.friction(),
            restitution: collider.restitution(),
            density: collider.density(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let mat = PhysicsMaterial::default();
        assert_eq!(mat.friction, 0.2);
        assert_eq!(mat.restitution, 0.0);
        assert_eq!(mat.density, 1.0);
    }

    #[test]
    fn test_new_clamps_values() {
        let mat = PhysicsMaterial::new(1.5, -0.5);
        assert_eq!(mat.friction, 1.0);
        assert_eq!(mat.restitution, 0.0);
    }

    #[test]
    fn test_round_trips_through_collider() {
        let mat = PhysicsMaterial::new(0.5, 0.5);
        let collider = mat.apply(ColliderBuilder::ball(1.0)).build();
        assert_eq!(PhysicsMaterial::of(&collider), mat);
    }
}
