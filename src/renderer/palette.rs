//! Colors for screen elements

use super::Rgba;

pub const BACKGROUND: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const MENU_BACKGROUND: Rgba = [0.08, 0.08, 0.1, 1.0];
pub const PARKING_LINE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const TITLE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const ITEM: Rgba = [0.7, 0.7, 0.75, 1.0];
pub const ITEM_SELECTED: Rgba = [0.05, 0.05, 0.08, 1.0];
pub const HIGHLIGHT: Rgba = [1.0, 0.8, 0.2, 1.0];
pub const HINT: Rgba = [0.5, 0.5, 0.55, 1.0];
pub const HUD: Rgba = [1.0, 1.0, 1.0, 1.0];
