//! Driving simulation
//!
//! Pure and platform-free:
//! - Kinematics take `dt` as an argument, never read a clock
//! - Input arrives as a plain key snapshot (`TickInput`)
//! - No rendering or windowing dependencies

pub mod bounds;
pub mod controls;
pub mod state;
pub mod tick;
pub mod vehicle;

pub use bounds::PlayArea;
pub use controls::map_controls;
pub use state::DriveState;
pub use tick::{TickInput, tick};
pub use vehicle::{CoastMode, Controls, VehicleParams, VehicleState};
