//! Platform abstraction layer
//!
//! The app only sees these capabilities:
//! - `InputSource`: a per-frame snapshot of held keys and the close request
//! - `Clock`: monotonic time and the measured frame time
//!
//! `window` implements both on top of macroquad.

pub mod window;

pub use window::WindowPlatform;

use crate::app::MenuKeys;
use crate::sim::TickInput;

/// Everything the app reads from the keyboard and window in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Space
    pub brake: bool,
    /// Enter
    pub confirm: bool,
    /// Window close button / OS quit
    pub close_requested: bool,
}

impl FrameInput {
    pub fn menu_keys(&self) -> MenuKeys {
        MenuKeys {
            up: self.up,
            down: self.down,
            confirm: self.confirm,
        }
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            forward: self.up,
            reverse: self.down,
            left: self.left,
            right: self.right,
            brake: self.brake,
        }
    }
}

/// Source of keyboard / window state
pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

/// Frame timing
pub trait Clock {
    /// Monotonic seconds since startup
    fn now(&self) -> f64;
    /// Seconds since the previous frame
    fn frame_dt(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_drive_and_navigate() {
        let input = FrameInput {
            up: true,
            left: true,
            brake: true,
            ..Default::default()
        };
        let tick = input.tick_input();
        assert!(tick.forward && tick.left && tick.brake);
        assert!(!tick.reverse && !tick.right);

        let menu = input.menu_keys();
        assert!(menu.up && !menu.down && !menu.confirm);
    }
}
