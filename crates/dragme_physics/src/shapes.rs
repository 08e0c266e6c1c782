//! Collision shapes
//!
//! A [`Shape`] is described in body-local coordinates and turned into a
//! rapier collider when its body is added to the world. [`WorldShape`] is the
//! read-back in world coordinates used for drawing and containment.

use dragme_math::Vec2;
use rapier2d::parry::shape::TypedShape;
use rapier2d::prelude::*;

/// Polygons with less area than this are rejected
const MIN_POLYGON_AREA: f32 = 1e-4;

/// Errors raised while building a shape
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A radius or extent was not strictly positive (or not finite)
    NonPositiveSize(f32),
    /// Fewer than 3 vertices
    VertexCount(usize),
    /// The vertices enclose (almost) no area
    Degenerate,
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::NonPositiveSize(v) => write!(f, "Shape size must be positive, got {}", v),
            ShapeError::VertexCount(n) => write!(f, "Polygon needs at least 3 vertices, got {}", n),
            ShapeError::Degenerate => write!(f, "Polygon has zero area"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// A collision shape in body-local coordinates
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Circle centered on the body origin
    Circle { radius: f32 },
    /// Axis-aligned box centered on the body origin
    Box { half_extents: Vec2 },
    /// Convex polygon; non-convex input is replaced by its convex hull
    Polygon { vertices: Vec<Vec2> },
}

impl Shape {
    pub fn circle(radius: f32) -> Result<Self, ShapeError> {
        check_positive(radius)?;
        Ok(Shape::Circle { radius })
    }

    pub fn cuboid(half_extents: Vec2) -> Result<Self, ShapeError> {
        check_positive(half_extents.x)?;
        check_positive(half_extents.y)?;
        Ok(Shape::Box { half_extents })
    }

    pub fn polygon(vertices: &[Vec2]) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::VertexCount(vertices.len()));
        }
        let area = signed_area(vertices);
        if area.is_nan() || area.abs() < MIN_POLYGON_AREA {
            return Err(ShapeError::Degenerate);
        }
        Ok(Shape::Polygon {
            vertices: vertices.to_vec(),
        })
    }

    /// Build the rapier collider for this shape
    pub(crate) fn collider_builder(&self) -> Result<ColliderBuilder, ShapeError> {
        match self {
            Shape::Circle { radius } => Ok(ColliderBuilder::ball(*radius)),
            Shape::Box { half_extents } => Ok(ColliderBuilder::cuboid(half_extents.x, half_extents.y)),
            Shape::Polygon { vertices } => {
                let points: Vec<Point<Real>> = vertices.iter().map(|v| Point::new(v.x, v.y)).collect();
                ColliderBuilder::convex_hull(&points).ok_or(ShapeError::Degenerate)
            }
        }
    }
}

/// A collider's outline in world coordinates
#[derive(Clone, Debug, PartialEq)]
pub enum WorldShape {
    Circle { center: Vec2, radius: f32 },
    /// Counter-clockwise vertices
    Polygon(Vec<Vec2>),
}

impl WorldShape {
    /// Read back a collider attached at the origin of a body with pose `pose`
    pub(crate) fn from_collider(collider: &Collider, pose: &Isometry<Real>) -> Option<Self> {
        let to_world = |p: &Point<Real>| {
            let p = pose.transform_point(p);
            Vec2::new(p.x, p.y)
        };
        match collider.shape().as_typed_shape() {
            TypedShape::Ball(ball) => Some(WorldShape::Circle {
                center: to_world(&Point::origin()),
                radius: ball.radius,
            }),
            TypedShape::Cuboid(cuboid) => {
                let h = cuboid.half_extents;
                let corners = [
                    Point::new(-h.x, -h.y),
                    Point::new(h.x, -h.y),
                    Point::new(h.x, h.y),
                    Point::new(-h.x, h.y),
                ];
                Some(WorldShape::Polygon(corners.iter().map(to_world).collect()))
            }
            TypedShape::ConvexPolygon(polygon) => {
                Some(WorldShape::Polygon(polygon.points().iter().map(to_world).collect()))
            }
            _ => None,
        }
    }

    /// Area centroid, which is the center of mass at uniform density
    pub fn centroid(&self) -> Vec2 {
        match self {
            WorldShape::Circle { center, .. } => *center,
            WorldShape::Polygon(vertices) => polygon_centroid(vertices),
        }
    }
}

fn check_positive(value: f32) -> Result<(), ShapeError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonPositiveSize(value))
    }
}

/// Shoelace area, positive for counter-clockwise winding
fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    let twice: f32 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x * b.y - a.y * b.x
        })
        .sum();
    0.5 * twice
}

fn polygon_centroid(vertices: &[Vec2]) -> Vec2 {
    let n = vertices.len();
    if n == 0 {
        return Vec2::ZERO;
    }
    // Relative to the first vertex to keep the sums small
    let origin = vertices[0];
    let mut area = 0.0;
    let mut weighted = Vec2::ZERO;
    for i in 1..n.saturating_sub(1) {
        let a = vertices[i] - origin;
        let b = vertices[i + 1] - origin;
        let tri = 0.5 * (a.x * b.y - a.y * b.x);
        area += tri;
        weighted += (a + b) * (tri / 3.0);
    }
    if area.abs() <= f32::EPSILON {
        let sum = vertices.iter().fold(Vec2::ZERO, |acc, &v| acc + v);
        return sum / n as f32;
    }
    origin + weighted / area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_must_be_positive() {
        assert!(Shape::circle(2.0).is_ok());
        assert_eq!(Shape::circle(0.0), Err(ShapeError::NonPositiveSize(0.0)));
        assert!(Shape::cuboid(Vec2::new(1.0, -1.0)).is_err());
        assert!(Shape::circle(f32::NAN).is_err());
    }

    #[test]
    fn test_polygon_validation() {
        let two = [Vec2::ZERO, Vec2::X];
        assert_eq!(Shape::polygon(&two), Err(ShapeError::VertexCount(2)));

        let flat = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)];
        assert_eq!(Shape::polygon(&flat), Err(ShapeError::Degenerate));

        // Clockwise input is accepted
        let clockwise = [Vec2::ZERO, Vec2::new(0.0, 3.0), Vec2::new(3.0, 0.0)];
        assert!(Shape::polygon(&clockwise).is_ok());
    }

    #[test]
    fn test_collider_builders() {
        let wedge = Shape::polygon(&[Vec2::ZERO, Vec2::new(3.0, 0.0), Vec2::new(0.0, 3.0)]).unwrap();
        assert!(wedge.collider_builder().is_ok());
        assert!(Shape::circle(1.0).unwrap().collider_builder().is_ok());
    }

    #[test]
    fn test_box_read_back() {
        let collider = Shape::cuboid(Vec2::new(3.0, 1.0))
            .unwrap()
            .collider_builder()
            .unwrap()
            .build();
        let pose = Isometry::new(Vector::new(2.0, 5.0), 0.0);
        let shape = WorldShape::from_collider(&collider, &pose).unwrap();

        let WorldShape::Polygon(vertices) = &shape else {
            panic!("expected polygon");
        };
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[0], Vec2::new(-1.0, 4.0));
        assert_eq!(vertices[2], Vec2::new(5.0, 6.0));
        assert!((shape.centroid() - Vec2::new(2.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn test_circle_read_back() {
        let collider = ColliderBuilder::ball(2.0).build();
        let pose = Isometry::new(Vector::new(-3.0, 5.0), 1.0);
        let shape = WorldShape::from_collider(&collider, &pose).unwrap();
        assert!(matches!(shape, WorldShape::Circle { radius, .. } if radius == 2.0));
        assert!((shape.centroid() - Vec2::new(-3.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn test_triangle_centroid() {
        let shape = WorldShape::Polygon(vec![
            Vec2::new(3.0, 7.0),
            Vec2::new(6.0, 7.0),
            Vec2::new(3.0, 10.0),
        ]);
        assert!((shape.centroid() - Vec2::new(4.0, 8.0)).length() < 1e-5);
    }
}
