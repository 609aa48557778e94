//! Keeps the car on the canvas
//!
//! A hard position clamp, not a collision: velocity is left alone.

use glam::Vec2;

use super::vehicle::VehicleState;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, PIXELS_PER_UNIT};

/// Visible canvas, in pixels, plus the world→pixel scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width_px: f32,
    pub height_px: f32,
    pub pixels_per_unit: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT, PIXELS_PER_UNIT)
    }
}

impl PlayArea {
    pub fn new(width_px: f32, height_px: f32, pixels_per_unit: f32) -> Self {
        Self {
            width_px,
            height_px,
            pixels_per_unit,
        }
    }

    /// Canvas size in world units
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.width_px, self.height_px) / self.pixels_per_unit
    }

    /// Convert a world position to canvas pixels
    #[inline]
    pub fn to_pixels(&self, world: Vec2) -> Vec2 {
        world * self.pixels_per_unit
    }

    /// Clamp the car's centre so a `length`-sized sprite stays on screen
    pub fn clamp(&self, car: &mut VehicleState) {
        let half = car.length() / 2.0;
        let max = self.world_size() - Vec2::splat(half);
        car.position.x = car.position.x.min(max.x).max(half);
        car.position.y = car.position.y.min(max.y).max(half);
    }
}
