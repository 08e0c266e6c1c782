//! Draw list - bridges the physics world to GPU vertices
//!
//! Every frame the world is tessellated from scratch into a flat list of
//! pixel-space triangles. Polygons become triangle fans over their world
//! vertices and circles become fans around their world center. Bodies whose
//! collider has no drawable outline are skipped.

use crate::palette::{Color, Palette};
use crate::pipeline::Vertex2D;
use crate::viewport::Viewport;
use dragme_math::Vec2;
use dragme_physics::{BodyRef, PhysicsWorld, WorldShape};

/// Segments used to approximate a circle
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 32;

/// Pixel-space triangles ready for upload, plus the clear color
pub struct DrawList {
    /// Triangle list vertices (three per triangle)
    pub vertices: Vec<Vertex2D>,
    /// Background color the frame is cleared to
    pub clear_color: Color,
}

impl DrawList {
    /// Create an empty draw list with the given background
    pub fn new(clear_color: Color) -> Self {
        Self {
            vertices: Vec::new(),
            clear_color,
        }
    }

    /// Tessellate every body in the world
    pub fn from_world(world: &PhysicsWorld, viewport: &Viewport, palette: &Palette, circle_segments: u32) -> Self {
        let mut list = Self::new(palette.background);
        for (_, body) in world.iter() {
            list.add_body(&body, viewport, palette, circle_segments);
        }
        list
    }

    /// Add one body's fill to the list
    pub fn add_body(&mut self, body: &BodyRef<'_>, viewport: &Viewport, palette: &Palette, circle_segments: u32) {
        match body.shape() {
            Some(WorldShape::Polygon(vertices)) => {
                let color = palette.polygon_color(vertices.len(), body.is_dynamic());
                let points: Vec<Vec2> = vertices.into_iter().map(|v| viewport.to_screen(v)).collect();
                self.add_fan(&points, color);
            }
            Some(WorldShape::Circle { center, radius }) => {
                let center = viewport.to_screen(center);
                let radius = viewport.scale_length(radius);
                self.add_circle(center, radius, palette.circle, circle_segments);
            }
            None => {}
        }
    }

    /// Add a convex outline as a triangle fan anchored at its first point
    pub fn add_fan(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let color = color.to_array();
        let anchor = points[0].to_array();
        for pair in points[1..].windows(2) {
            self.vertices.push(Vertex2D::new(anchor, color));
            self.vertices.push(Vertex2D::new(pair[0].to_array(), color));
            self.vertices.push(Vertex2D::new(pair[1].to_array(), color));
        }
    }

    /// Add a filled circle in pixel space
    pub fn add_circle(&mut self, center: Vec2, radius: f32, color: Color, segments: u32) {
        let segments = segments.max(3);
        let color = color.to_array();
        let step = std::f32::consts::TAU / segments as f32;
        let point = |i: u32| {
            let theta = i as f32 * step;
            (center + Vec2::new(theta.cos(), theta.sin()) * radius).to_array()
        };
        for i in 0..segments {
            self.vertices.push(Vertex2D::new(center.to_array(), color));
            self.vertices.push(Vertex2D::new(point(i), color));
            self.vertices.push(Vertex2D::new(point(i + 1), color));
        }
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new(Palette::default().background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragme_physics::{BodyDesc, BodyType};

    fn world_with(body: BodyDesc) -> PhysicsWorld {
        let mut world = PhysicsWorld::new();
        world.add_body(body);
        world
    }

    #[test]
    fn test_empty_world_only_clears() {
        let list = DrawList::from_world(&PhysicsWorld::new(), &Viewport::default(), &Palette::default(), 16);
        assert_eq!(list.vertex_count(), 0);
        assert_eq!(list.clear_color, Palette::default().background);
    }

    #[test]
    fn test_box_becomes_two_green_triangles() {
        let body = BodyDesc::cuboid(Vec2::ZERO, Vec2::new(1.0, 1.0)).unwrap();
        let list = DrawList::from_world(&world_with(body), &Viewport::default(), &Palette::default(), 16);

        assert_eq!(list.triangle_count(), 2);
        assert!(list.vertices.iter().all(|v| v.color == Color::GREEN.to_array()));

        // First world vertex (-1, -1) lands at (370, 330)
        assert_eq!(list.vertices[0].position, [370.0, 330.0]);
    }

    #[test]
    fn test_triangle_is_blue() {
        let body = BodyDesc::polygon(
            Vec2::new(3.0, 7.0),
            &[Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(0.0, 3.0)],
        )
        .unwrap();
        let list = DrawList::from_world(&world_with(body), &Viewport::default(), &Palette::default(), 16);

        assert_eq!(list.triangle_count(), 1);
        assert_eq!(list.vertices[0].color, Color::BLUE.to_array());
        // Corners (3, 7), (6, 7) and (3, 10) in pixels
        for corner in [[490.0, 90.0], [580.0, 90.0], [490.0, 0.0]] {
            assert!(
                list.vertices.iter().any(|v| v.position == corner),
                "missing corner {:?}",
                corner
            );
        }
    }

    #[test]
    fn test_pentagon_is_yellow() {
        let pentagon: Vec<Vec2> = (0..5)
            .map(|i| {
                let theta = i as f32 * std::f32::consts::TAU / 5.0;
                Vec2::new(theta.cos(), theta.sin())
            })
            .collect();
        let body = BodyDesc::polygon(Vec2::ZERO, &pentagon).unwrap();
        let list = DrawList::from_world(&world_with(body), &Viewport::default(), &Palette::default(), 16);

        assert_eq!(list.triangle_count(), 3);
        assert_eq!(list.vertices[0].color, Color::YELLOW.to_array());
    }

    #[test]
    fn test_boundaries_are_white() {
        let wall = BodyDesc::cuboid(Vec2::ZERO, Vec2::new(10.0, 1.0))
            .unwrap()
            .with_body_type(BodyType::Kinematic);
        let list = DrawList::from_world(&world_with(wall), &Viewport::default(), &Palette::default(), 16);
        assert_eq!(list.vertices[0].color, Color::WHITE.to_array());

        let floor = BodyDesc::cuboid(Vec2::ZERO, Vec2::new(10.0, 1.0))
            .unwrap()
            .with_body_type(BodyType::Static);
        let list = DrawList::from_world(&world_with(floor), &Viewport::default(), &Palette::default(), 16);
        assert_eq!(list.vertices[0].color, Color::WHITE.to_array());
    }

    #[test]
    fn test_circle_is_red_fan_around_center() {
        let body = BodyDesc::circle(Vec2::new(-3.0, 5.0), 2.0).unwrap();
        let list = DrawList::from_world(&world_with(body), &Viewport::default(), &Palette::default(), 24);

        assert_eq!(list.triangle_count(), 24);
        assert_eq!(list.vertices[0].color, Color::RED.to_array());
        assert_eq!(list.vertices[0].position, [310.0, 150.0]);

        // Rim points sit one radius (60 px) from the center
        let rim = Vec2::new(list.vertices[1].position[0], list.vertices[1].position[1]);
        assert!((rim.distance(Vec2::new(310.0, 150.0)) - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_circle_has_at_least_three_segments() {
        let mut list = DrawList::default();
        list.add_circle(Vec2::ZERO, 1.0, Color::RED, 2);
        assert_eq!(list.triangle_count(), 3);
        assert_eq!(list.clear_color, Palette::default().background);
    }
}
