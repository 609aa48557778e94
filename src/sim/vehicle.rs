//! Bicycle-model car kinematics
//!
//! World units, y pointing down the screen. Heading is in degrees and grows
//! counter-clockwise as seen on screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{normalize_degrees, rotate_degrees};

/// Behavior when no acceleration is commanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoastMode {
    /// Longitudinal velocity snaps to zero
    #[default]
    Stop,
    /// Longitudinal velocity decays at `free_deceleration`
    Decay,
}

/// Tunable limits, fixed when the vehicle is built
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleParams {
    /// Wheelbase (world units)
    pub length: f32,
    /// Full steering lock (degrees)
    pub max_steering: f32,
    pub max_acceleration: f32,
    pub max_velocity: f32,
    pub brake_deceleration: f32,
    /// Only used with `CoastMode::Decay`
    pub free_deceleration: f32,
    pub coast: CoastMode,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            length: CAR_LENGTH,
            max_steering: CAR_MAX_STEERING,
            max_acceleration: CAR_MAX_ACCELERATION,
            max_velocity: CAR_MAX_VELOCITY,
            brake_deceleration: CAR_BRAKE_DECELERATION,
            free_deceleration: CAR_FREE_DECELERATION,
            coast: CoastMode::Stop,
        }
    }
}

/// Per-tick control commands
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Controls {
    /// Signed longitudinal acceleration (units/s²)
    pub acceleration: f32,
    /// Signed steering angle (degrees), positive turns left
    pub steering: f32,
}

/// The car
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    pub position: Vec2,
    /// Body-frame velocity; only `x` (forward) is ever driven
    pub velocity: Vec2,
    /// Degrees, normalized to [0, 360)
    pub heading: f32,
    pub params: VehicleParams,
    pub acceleration: f32,
    pub steering: f32,
}

impl VehicleState {
    pub fn new(position: Vec2, heading: f32, params: VehicleParams) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            heading: normalize_degrees(heading),
            params,
            acceleration: 0.0,
            steering: 0.0,
        }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.params.length
    }

    /// Controls currently applied
    pub fn controls(&self) -> Controls {
        Controls {
            acceleration: self.acceleration,
            steering: self.steering,
        }
    }

    pub fn apply_controls(&mut self, controls: Controls) {
        self.acceleration = controls.acceleration;
        self.steering = controls.steering;
    }

    /// Angular velocity (rad/s) for the current speed and steering
    pub fn angular_velocity(&self) -> f32 {
        if self.steering == 0.0 {
            return 0.0;
        }
        let turning_radius = self.params.length / self.steering.to_radians().sin();
        self.velocity.x / turning_radius
    }

    /// Advance the car by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let max_velocity = self.params.max_velocity;

        if self.acceleration != 0.0 {
            let velocity = self.velocity.x + self.acceleration * dt;
            self.velocity.x = velocity.clamp(-max_velocity, max_velocity);
        } else {
            match self.params.coast {
                CoastMode::Stop => self.velocity.x = 0.0,
                CoastMode::Decay => {
                    let step = self.params.free_deceleration * dt;
                    if self.velocity.x.abs() > step {
                        self.velocity.x -= step.copysign(self.velocity.x);
                    } else {
                        self.velocity.x = 0.0;
                    }
                }
            }
        }

        let angular_velocity = self.angular_velocity();

        self.position += rotate_degrees(self.velocity, -self.heading) * dt;
        self.heading = normalize_degrees(self.heading + angular_velocity.to_degrees() * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn car() -> VehicleState {
        VehicleState::new(Vec2::new(10.0, 10.0), 0.0, VehicleParams::default())
    }

    #[test]
    fn test_zero_acceleration_stops_dead() {
        let mut car = car();
        car.velocity.x = 15.0;
        car.update(1.0 / 60.0);
        assert_eq!(car.velocity.x, 0.0);
    }

    #[test]
    fn test_velocity_clamps_exactly_at_max() {
        let mut car = car();
        car.velocity.x = 19.9;
        car.acceleration = 5.0;
        car.update(1.0);
        assert_eq!(car.velocity.x, 20.0);

        car.velocity.x = -19.9;
        car.acceleration = -5.0;
        car.update(1.0);
        assert_eq!(car.velocity.x, -20.0);
    }

    #[test]
    fn test_straight_keeps_heading() {
        let mut car = car();
        car.heading = 45.0;
        car.velocity.x = 10.0;
        car.acceleration = 5.0;
        car.update(0.5);
        assert_eq!(car.heading, 45.0);
    }

    #[test]
    fn test_turning_rate_at_full_lock() {
        let mut car = car();
        car.velocity.x = 5.0;
        // +5 over one second brings velocity.x to 10 before the turn is computed
        car.acceleration = 5.0;
        car.steering = 30.0;
        let radius = car.params.length / 30f32.to_radians().sin();
        assert!((radius - 8.0).abs() < 1e-4);
        car.update(1.0);
        assert!((car.velocity.x - 10.0).abs() < 1e-6);
        assert!((car.angular_velocity() - 1.25).abs() < 1e-4);
        assert!((car.heading - 71.619_72).abs() < 0.01);
    }

    #[test]
    fn test_moves_along_heading_screen_convention() {
        let mut car = car();
        car.heading = 90.0;
        car.velocity.x = 0.0;
        car.acceleration = 5.0;
        car.update(1.0);
        // Facing "up" on screen: y decreases
        assert!((car.position.x - 10.0).abs() < 1e-4);
        assert!((car.position.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_heading_wraps_past_360() {
        let mut car = car();
        car.heading = 350.0;
        // Reaches 10 units/s this step: 1.25 rad/s at full lock
        car.velocity.x = 5.0;
        car.acceleration = 5.0;
        car.steering = 30.0;
        car.update(1.0);
        assert!(car.heading >= 0.0 && car.heading < 360.0);
        assert!((car.heading - (350.0 + 71.62 - 360.0)).abs() < 0.1);
    }

    #[test]
    fn test_decay_coast_without_overshoot() {
        let params = VehicleParams {
            coast: CoastMode::Decay,
            ..Default::default()
        };
        let mut car = VehicleState::new(Vec2::ZERO, 0.0, params);
        car.velocity.x = 3.0;
        car.update(0.5);
        assert!((car.velocity.x - 2.0).abs() < 1e-6);

        car.velocity.x = -0.5;
        car.update(0.5);
        assert_eq!(car.velocity.x, 0.0);
    }

    proptest! {
        #[test]
        fn prop_velocity_never_exceeds_max(
            v in -20.0f32..20.0,
            accel in prop_oneof![-10.0f32..-0.01, 0.01f32..10.0],
            dt in 0.001f32..2.0,
        ) {
            let mut car = car();
            car.velocity.x = v;
            car.acceleration = accel;
            car.update(dt);
            prop_assert!(car.velocity.x.abs() <= car.params.max_velocity);
        }

        #[test]
        fn prop_heading_stays_normalized(
            heading in -720.0f32..720.0,
            v in -20.0f32..20.0,
            steer in -30.0f32..30.0,
            dt in 0.0f32..1.0,
        ) {
            let mut car = VehicleState::new(Vec2::ZERO, heading, VehicleParams::default());
            car.velocity.x = v;
            car.acceleration = 1.0;
            car.steering = steer;
            car.update(dt);
            prop_assert!(car.heading >= 0.0 && car.heading < 360.0);
        }

        #[test]
        fn prop_zero_steering_never_turns(heading in 0.0f32..359.0, v in -20.0f32..20.0) {
            let mut car = VehicleState::new(Vec2::ZERO, heading, VehicleParams::default());
            car.velocity.x = v;
            car.acceleration = 2.0;
            car.update(0.1);
            prop_assert_eq!(car.heading, normalize_degrees(heading));
        }
    }
}
