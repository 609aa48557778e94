//! Car Park - a top-down parking demo
//!
//! Core modules:
//! - `sim`: Vehicle kinematics, control mapping and bounds clamp (pure, no platform deps)
//! - `app`: Menu / level-select / driving state machine and fixed-step clock
//! - `levels`: Level list and free-drive lot, as parking-bay outlines
//! - `renderer`: Drawing capability and per-mode scene composition
//! - `platform`: Input and clock capabilities (macroquad on native)
//! - `settings`: Data-driven demo variant and tuning

pub mod app;
pub mod error;
pub mod levels;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, AppMode};
pub use error::GameError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Canvas size in pixels
    pub const CANVAS_WIDTH: f32 = 1280.0;
    pub const CANVAS_HEIGHT: f32 = 720.0;

    /// World units to pixels
    pub const PIXELS_PER_UNIT: f32 = 32.0;

    /// Default logical simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Measured frame time is capped to this before entering the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Minimum interval between accepted menu inputs (seconds)
    pub const MENU_DEBOUNCE_SECS: f64 = 0.2;

    /// Vehicle defaults
    pub const CAR_LENGTH: f32 = 4.0;
    pub const CAR_MAX_STEERING: f32 = 30.0; // degrees
    pub const CAR_MAX_ACCELERATION: f32 = 5.0;
    pub const CAR_MAX_VELOCITY: f32 = 20.0;
    pub const CAR_BRAKE_DECELERATION: f32 = 10.0;
    pub const CAR_FREE_DECELERATION: f32 = 2.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rotate a vector counter-clockwise (in math coordinates) by `degrees`
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}
