//! macroquad-backed input and clock

use macroquad::input::{KeyCode, is_key_down, is_quit_requested, prevent_quit};
use macroquad::time::{get_frame_time, get_time};

use super::{Clock, FrameInput, InputSource};

/// Reads the macroquad window's keyboard and timers
pub struct WindowPlatform;

impl WindowPlatform {
    /// Must be created inside the macroquad main loop.
    ///
    /// Takes over the window close button so the app can exit through its own
    /// state machine.
    pub fn new() -> Self {
        prevent_quit();
        Self
    }
}

fn any_down(keys: &[KeyCode]) -> bool {
    keys.iter().any(|&k| is_key_down(k))
}

impl InputSource for WindowPlatform {
    fn poll(&mut self) -> FrameInput {
        FrameInput {
            up: any_down(&[KeyCode::Up, KeyCode::W]),
            down: any_down(&[KeyCode::Down, KeyCode::S]),
            left: any_down(&[KeyCode::Left, KeyCode::A]),
            right: any_down(&[KeyCode::Right, KeyCode::D]),
            brake: is_key_down(KeyCode::Space),
            confirm: any_down(&[KeyCode::Enter, KeyCode::KpEnter]),
            close_requested: is_quit_requested(),
        }
    }
}

impl Clock for WindowPlatform {
    fn now(&self) -> f64 {
        get_time()
    }

    fn frame_dt(&self) -> f32 {
        get_frame_time()
    }
}
