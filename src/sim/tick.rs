//! Simulation tick
//!
//! map controls → kinematics → bounds clamp, once per step.

use super::controls::map_controls;
use super::state::DriveState;

/// Driving keys held during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    /// Accelerate forward (up)
    pub forward: bool,
    /// Accelerate backward (down)
    pub reverse: bool,
    pub left: bool,
    pub right: bool,
    /// Brake (space)
    pub brake: bool,
}

/// Advance the driving session by one step of `dt` seconds
pub fn tick(state: &mut DriveState, input: &TickInput, dt: f32) {
    let controls = map_controls(input, &state.vehicle, dt);
    state.vehicle.apply_controls(controls);
    state.vehicle.update(dt);
    state.area.clamp(&mut state.vehicle);
    state.time_ticks += 1;
}
