//! Level catalogue
//!
//! Ten numbered levels picked from the level list, plus the free-drive lot
//! used when the demo starts straight into driving. Levels are nothing more
//! than parking bays drawn as white outlines.

use glam::Vec2;

/// Number of entries in the level list
pub const LEVEL_COUNT: usize = 10;

/// A parking bay outline, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParkingBay {
    /// Hangs from the top edge, open toward it
    Open { x: f32, width: f32, depth: f32 },
    /// Closed rectangle
    Boxed { origin: Vec2, size: Vec2 },
}

impl ParkingBay {
    pub const fn open(x: f32, width: f32, depth: f32) -> Self {
        Self::Open { x, width, depth }
    }

    pub const fn boxed(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::Boxed {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Outline as `(from, to)` pixel segments
    pub fn segments(&self) -> Vec<(Vec2, Vec2)> {
        match *self {
            ParkingBay::Open { x, width, depth } => {
                let right = x + width;
                vec![
                    (Vec2::new(x, 0.0), Vec2::new(x, depth)),
                    (Vec2::new(x, depth), Vec2::new(right, depth)),
                    (Vec2::new(right, depth), Vec2::new(right, 0.0)),
                ]
            }
            ParkingBay::Boxed { origin, size } => {
                let top_right = origin + Vec2::new(size.x, 0.0);
                let bottom_right = origin + size;
                let bottom_left = origin + Vec2::new(0.0, size.y);
                vec![
                    (origin, top_right),
                    (top_right, bottom_right),
                    (bottom_right, bottom_left),
                    (bottom_left, origin),
                ]
            }
        }
    }
}

/// Free-drive lot: three bays of decreasing depth along the top edge
pub const FREE_DRIVE_LOT: [ParkingBay; 3] = [
    ParkingBay::open(100.0, 100.0, 200.0),
    ParkingBay::open(400.0, 100.0, 150.0),
    ParkingBay::open(800.0, 100.0, 100.0),
];

/// Level 1: a row of five 100 px bays across the middle
pub const LEVEL_ONE_BAYS: [ParkingBay; 5] = [
    ParkingBay::boxed(100.0, 300.0, 100.0, 100.0),
    ParkingBay::boxed(300.0, 300.0, 100.0, 100.0),
    ParkingBay::boxed(500.0, 300.0, 100.0, 100.0),
    ParkingBay::boxed(700.0, 300.0, 100.0, 100.0),
    ParkingBay::boxed(900.0, 300.0, 100.0, 100.0),
];

/// Level 2: the same row, shifted up and to the right
pub const LEVEL_TWO_BAYS: [ParkingBay; 5] = [
    ParkingBay::boxed(200.0, 200.0, 100.0, 100.0),
    ParkingBay::boxed(400.0, 200.0, 100.0, 100.0),
    ParkingBay::boxed(600.0, 200.0, 100.0, 100.0),
    ParkingBay::boxed(800.0, 200.0, 100.0, 100.0),
    ParkingBay::boxed(1000.0, 200.0, 100.0, 100.0),
];

#[derive(Debug, Clone)]
pub struct Level {
    pub name: String,
    pub bays: Vec<ParkingBay>,
}

impl Level {
    /// Numbered level `index` (0-based). Only the first two have content.
    pub fn numbered(index: usize) -> Self {
        let bays = match index {
            0 => LEVEL_ONE_BAYS.to_vec(),
            1 => LEVEL_TWO_BAYS.to_vec(),
            _ => Vec::new(),
        };
        Self {
            name: format!("Level {}", index + 1),
            bays,
        }
    }

    pub fn free_drive() -> Self {
        Self {
            name: "Parking Lot".to_string(),
            bays: FREE_DRIVE_LOT.to_vec(),
        }
    }
}

/// The level list plus the free-drive lot
#[derive(Debug, Clone)]
pub struct Levels {
    pub entries: Vec<Level>,
    pub free_drive: Level,
}

impl Levels {
    pub fn standard() -> Self {
        Self {
            entries: (0..LEVEL_COUNT).map(Level::numbered).collect(),
            free_drive: Level::free_drive(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.entries.get(index)
    }

    /// Layout for a session: a numbered level, or the free-drive lot for `None`
    pub fn layout(&self, level: Option<usize>) -> Option<&Level> {
        match level {
            Some(index) => self.get(index),
            None => Some(&self.free_drive),
        }
    }

    /// Clamp an index into the list, so a bad `start_level` still drives
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.len().saturating_sub(1))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|l| l.name.as_str())
    }
}
