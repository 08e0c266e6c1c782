//! Shape colors

/// A linear-space RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    pub const RED: Self = Self([1.0, 0.0, 0.0, 1.0]);
    pub const GREEN: Self = Self([0.0, 1.0, 0.0, 1.0]);
    pub const BLUE: Self = Self([0.0, 0.0, 1.0, 1.0]);
    pub const YELLOW: Self = Self([1.0, 1.0, 0.0, 1.0]);

    /// Build a color from 8-bit sRGB channels
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Self([srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), 1.0])
    }

    pub fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Convert to a wgpu clear color
    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.0;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Colors for the background and each kind of shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    /// Three-sided polygons
    pub triangle: Color,
    /// Four-sided polygons
    pub quad: Color,
    /// Polygons with any other vertex count
    pub polygon: Color,
    /// Any body that is not dynamic, regardless of shape
    pub boundary: Color,
    pub circle: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_srgb8(192, 192, 192),
            triangle: Color::BLUE,
            quad: Color::GREEN,
            polygon: Color::YELLOW,
            boundary: Color::WHITE,
            circle: Color::RED,
        }
    }
}

impl Palette {
    /// Fill color for a polygon body
    pub fn polygon_color(&self, vertex_count: usize, is_dynamic: bool) -> Color {
        if !is_dynamic {
            return self.boundary;
        }
        match vertex_count {
            3 => self.triangle,
            4 => self.quad,
            _ => self.polygon,
        }
    }
}
