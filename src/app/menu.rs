//! Debounced menu cursor shared by the main menu and the level list

use crate::consts::MENU_DEBOUNCE_SECS;

/// Menu keys held this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuKeys {
    pub up: bool,
    pub down: bool,
    pub confirm: bool,
}

impl MenuKeys {
    fn any(&self) -> bool {
        self.up || self.down || self.confirm
    }
}

/// Accepts at most one input per `interval` seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debounce {
    interval: f64,
    last_accepted: Option<f64>,
}

impl Debounce {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    /// Record an input at `now`; false if it falls inside the window
    pub fn accept(&mut self, now: f64) -> bool {
        match self.last_accepted {
            Some(last) if now - last < self.interval => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}

/// Result of one frame of menu input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Cursor moved to this index
    Moved(usize),
    /// Entry at this index chosen
    Confirmed(usize),
}

/// A vertical list with a wrapping cursor.
///
/// Inputs are edge-triggered (a key held across frames counts once) and then
/// debounced, so a bouncy or repeating key can't skip entries.
#[derive(Debug, Clone)]
pub struct Menu {
    len: usize,
    selected: usize,
    debounce: Debounce,
    held: MenuKeys,
}

impl Menu {
    pub fn new(len: usize) -> Self {
        Self::with_debounce(len, MENU_DEBOUNCE_SECS)
    }

    pub fn with_debounce(len: usize, interval: f64) -> Self {
        Self {
            len: len.max(1),
            selected: 0,
            debounce: Debounce::new(interval),
            held: MenuKeys::default(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_up(&mut self) {
        self.selected = (self.selected + self.len - 1) % self.len;
    }

    pub fn select_down(&mut self) {
        self.selected = (self.selected + 1) % self.len;
    }

    /// Feed this frame's held keys
    pub fn handle(&mut self, keys: MenuKeys, now: f64) -> Option<MenuEvent> {
        let pressed = MenuKeys {
            up: keys.up && !self.held.up,
            down: keys.down && !self.held.down,
            confirm: keys.confirm && !self.held.confirm,
        };
        self.held = keys;

        if !pressed.any() || !self.debounce.accept(now) {
            return None;
        }

        if pressed.confirm {
            return Some(MenuEvent::Confirmed(self.selected));
        }
        match (pressed.up, pressed.down) {
            (true, false) => self.select_up(),
            (false, true) => self.select_down(),
            _ => return None,
        }
        Some(MenuEvent::Moved(self.selected))
    }
}

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuItem {
    Start,
    Quit,
}

impl MainMenuItem {
    pub const ALL: [MainMenuItem; 2] = [MainMenuItem::Start, MainMenuItem::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            MainMenuItem::Start => "Start Game",
            MainMenuItem::Quit => "Quit",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
