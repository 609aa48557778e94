//! Key state → acceleration / steering

use super::tick::TickInput;
use super::vehicle::{Controls, VehicleState};

/// Map held keys to this tick's controls.
///
/// A non-positive `dt` keeps the car's previous controls, since the brake
/// branch divides by it.
pub fn map_controls(input: &TickInput, car: &VehicleState, dt: f32) -> Controls {
    if dt <= 0.0 {
        return car.controls();
    }

    let params = &car.params;

    let mut acceleration = match (input.forward, input.reverse) {
        (true, false) => params.max_acceleration,
        (false, true) => -params.max_acceleration,
        _ => 0.0,
    };

    if input.brake {
        let speed = car.velocity.x;
        acceleration = if speed.abs() > dt * params.brake_deceleration {
            -params.brake_deceleration.copysign(speed)
        } else {
            // Stop exactly this tick instead of flipping direction
            -speed / dt
        };
    }

    let steering = match (input.left, input.right) {
        (true, false) => params.max_steering,
        (false, true) => -params.max_steering,
        _ => 0.0,
    };

    Controls {
        acceleration,
        steering,
    }
}
