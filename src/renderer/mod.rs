//! Rendering
//!
//! `scene` composes each mode from a handful of primitives on a `Surface`.
//! `canvas` provides the macroquad-backed surface with the car sprite.

pub mod canvas;
pub mod palette;
pub mod scene;

pub use canvas::WindowCanvas;
pub use scene::draw_frame;

use glam::Vec2;

/// Linear RGBA
pub type Rgba = [f32; 4];

/// Minimal 2D drawing capability, pixel coordinates with y down
pub trait Surface {
    fn clear(&mut self, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba);
    fn rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    /// `at` is the text baseline start
    fn text(&mut self, text: &str, at: Vec2, size: f32, color: Rgba);
    /// Car sprite centred on `center`, turned counter-clockwise by `degrees`
    fn sprite(&mut self, center: Vec2, degrees: f32);
}
