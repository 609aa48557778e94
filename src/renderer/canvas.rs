//! macroquad-backed `Surface`

use std::path::Path;

use glam::Vec2;
use macroquad::color::{Color, WHITE};
use macroquad::shapes::{draw_line, draw_rectangle};
use macroquad::text::draw_text;
use macroquad::texture::{DrawTextureParams, FilterMode, Texture2D, draw_texture_ex, load_texture};
use macroquad::window::clear_background;

use super::{Rgba, Surface};
use crate::error::GameError;

/// The window's back buffer plus the car sprite
pub struct WindowCanvas {
    sprite: Texture2D,
}

#[inline]
fn color(c: Rgba) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

impl WindowCanvas {
    /// Load the car sprite. Fails with a message naming the file.
    pub async fn load(sprite_path: &Path) -> Result<Self, GameError> {
        let asset_error = |reason: String| GameError::AssetLoad {
            path: sprite_path.to_path_buf(),
            reason,
        };

        if !sprite_path.is_file() {
            return Err(asset_error("file not found".to_string()));
        }
        let path = sprite_path
            .to_str()
            .ok_or_else(|| asset_error("path is not valid UTF-8".to_string()))?;

        let sprite = load_texture(path)
            .await
            .map_err(|e| asset_error(e.to_string()))?;
        sprite.set_filter(FilterMode::Linear);
        log::info!(
            "Loaded sprite {} ({}x{})",
            sprite_path.display(),
            sprite.width(),
            sprite.height()
        );

        Ok(Self { sprite })
    }
}

impl Surface for WindowCanvas {
    fn clear(&mut self, c: Rgba) {
        clear_background(color(c));
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, c: Rgba) {
        draw_line(from.x, from.y, to.x, to.y, thickness, color(c));
    }

    fn rect(&mut self, origin: Vec2, size: Vec2, c: Rgba) {
        draw_rectangle(origin.x, origin.y, size.x, size.y, color(c));
    }

    fn text(&mut self, text: &str, at: Vec2, size: f32, c: Rgba) {
        draw_text(text, at.x, at.y, size, color(c));
    }

    fn sprite(&mut self, center: Vec2, degrees: f32) {
        let (w, h) = (self.sprite.width(), self.sprite.height());
        // macroquad rotates clockwise on screen, around the destination centre
        draw_texture_ex(
            &self.sprite,
            center.x - w / 2.0,
            center.y - h / 2.0,
            WHITE,
            DrawTextureParams {
                rotation: -degrees.to_radians(),
                ..Default::default()
            },
        );
    }
}
