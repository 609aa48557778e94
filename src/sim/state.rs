//! Driving session state
//!
//! Everything the simulation mutates per tick lives here.

use glam::Vec2;

use super::bounds::PlayArea;
use super::vehicle::{VehicleParams, VehicleState};

/// One driving session, created when Driving starts
#[derive(Debug, Clone)]
pub struct DriveState {
    pub vehicle: VehicleState,
    pub area: PlayArea,
    /// Index into the level catalogue (0-based); `None` for the free-drive lot
    pub level: Option<usize>,
    /// Displayed but never incremented
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl DriveState {
    /// New session with the car parked at the world origin, facing +x.
    ///
    /// The first tick's clamp pulls it into the top-left corner.
    pub fn new(level: Option<usize>, params: VehicleParams, area: PlayArea) -> Self {
        Self {
            vehicle: VehicleState::new(Vec2::ZERO, 0.0, params),
            area,
            level,
            score: 0,
            time_ticks: 0,
        }
    }

    /// Car centre on the canvas, in pixels
    pub fn vehicle_pixels(&self) -> Vec2 {
        self.area.to_pixels(self.vehicle.position)
    }
}
