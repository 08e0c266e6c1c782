//! Mapping between physics coordinates and window pixels
//!
//! The physics origin sits at the center of the window. Physics y points up
//! while pixel y points down, so the y axis is flipped.

use dragme_math::Vec2;

/// Default pixels per physics unit
pub const DEFAULT_PIXELS_PER_METER: f32 = 30.0;

/// A window-sized view onto the physics world
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Drawable width in pixels
    pub width: f32,
    /// Drawable height in pixels
    pub height: f32,
    /// Pixels per physics unit
    pub pixels_per_meter: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixels_per_meter: f32) -> Self {
        Self {
            width,
            height,
            pixels_per_meter,
        }
    }

    /// Map a physics point to pixel coordinates
    #[inline]
    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x * self.pixels_per_meter + self.width / 2.0,
            -point.y * self.pixels_per_meter + self.height / 2.0,
        )
    }

    /// Map a pixel coordinate back into physics space
    #[inline]
    pub fn to_world(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            (pixel.x - self.width / 2.0) / self.pixels_per_meter,
            -(pixel.y - self.height / 2.0) / self.pixels_per_meter,
        )
    }

    /// Convert a physics length to pixels
    #[inline]
    pub fn scale_length(&self, length: f32) -> f32 {
        length * self.pixels_per_meter
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0, DEFAULT_PIXELS_PER_METER)
    }
}
