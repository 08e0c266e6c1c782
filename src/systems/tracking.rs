//! Window position tracking
//!
//! Turns the absolute window positions reported by the OS into frame-to-frame
//! deltas in logical pixels.

use dragme_math::Vec2;
use winit::dpi::PhysicalPosition;

/// Change of the window's outer position between two move events
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowDelta {
    /// Logical pixels, positive to the right
    pub dx: f32,
    /// Logical pixels, positive downward
    pub dy: f32,
}

impl WindowDelta {
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }
}

/// Remembers where the window was last seen
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowTracker {
    last: Option<PhysicalPosition<i32>>,
}

impl WindowTracker {
    /// Start tracking from a known position
    pub fn new(initial: PhysicalPosition<i32>) -> Self {
        Self { last: Some(initial) }
    }

    /// Start without a position; the first move event only seeds it
    pub fn unseeded() -> Self {
        Self { last: None }
    }

    pub fn last_position(&self) -> Option<PhysicalPosition<i32>> {
        self.last
    }

    /// Record a new outer position and return the logical delta since the last one
    ///
    /// Returns `None` for the first sample and when the window did not move.
    pub fn on_moved(&mut self, position: PhysicalPosition<i32>, scale_factor: f64) -> Option<WindowDelta> {
        let previous = self.last.replace(position)?;
        let dx = position.x - previous.x;
        let dy = position.y - previous.y;
        if dx == 0 && dy == 0 {
            return None;
        }

        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Some(WindowDelta {
            dx: (dx as f64 / scale) as f32,
            dy: (dy as f64 / scale) as f32,
        })
    }
}
