//! Application state machine
//!
//! MainMenu ──start──▶ Driving ──close──▶ Exiting
//!    └──quit──▶ Exiting
//! LevelSelect ──confirm(level)──▶ Driving(level)
//!
//! There is no way back to the menus once driving starts.

pub mod clock;
pub mod menu;

pub use clock::FixedStep;
pub use menu::{Debounce, MainMenuItem, Menu, MenuEvent, MenuKeys};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::levels::{Level, Levels};
use crate::platform::FrameInput;
use crate::settings::{FrontEnd, Settings, TimeStep};
use crate::sim::{DriveState, PlayArea, tick};

/// Current screen
#[derive(Debug, Clone)]
pub enum AppMode {
    MainMenu(Menu),
    LevelSelect(Menu),
    Driving(DriveState),
    /// Terminal
    Exiting,
}

impl AppMode {
    pub fn name(&self) -> &'static str {
        match self {
            AppMode::MainMenu(_) => "main menu",
            AppMode::LevelSelect(_) => "level select",
            AppMode::Driving(_) => "driving",
            AppMode::Exiting => "exiting",
        }
    }
}

enum Transition {
    Drive(usize),
    Exit,
}

/// Owns the mode, the settings and the simulation clock
pub struct App {
    settings: Settings,
    levels: Levels,
    mode: AppMode,
    step: FixedStep,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self::with_levels(settings, Levels::standard())
    }

    pub fn with_levels(settings: Settings, levels: Levels) -> Self {
        let step = FixedStep::new(settings.sim_dt());
        let mut app = Self {
            settings,
            levels,
            mode: AppMode::Exiting,
            step,
        };

        app.mode = match app.settings.front_end {
            FrontEnd::MainMenu => AppMode::MainMenu(Menu::new(MainMenuItem::ALL.len())),
            FrontEnd::LevelSelect => AppMode::LevelSelect(Menu::new(app.levels.len())),
            FrontEnd::None => AppMode::Driving(app.new_session(None)),
        };
        log::info!("Starting in {}", app.mode.name());
        app
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.mode, AppMode::Exiting)
    }

    /// Layout being driven, if any
    pub fn current_level(&self) -> Option<&Level> {
        match &self.mode {
            AppMode::Driving(drive) => self.levels.layout(drive.level),
            _ => None,
        }
    }

    /// Run one frame of input handling and simulation
    pub fn frame(&mut self, input: &FrameInput, now: f64, frame_dt: f32) {
        if input.close_requested && !self.is_exiting() {
            log::info!("Window close requested in {}", self.mode.name());
            self.mode = AppMode::Exiting;
            return;
        }

        let start_level = self.settings.start_level;
        let transition = match &mut self.mode {
            AppMode::MainMenu(menu) => match menu.handle(input.menu_keys(), now) {
                Some(MenuEvent::Confirmed(index)) => match MainMenuItem::from_index(index) {
                    Some(MainMenuItem::Start) => Some(Transition::Drive(start_level)),
                    Some(MainMenuItem::Quit) => Some(Transition::Exit),
                    None => None,
                },
                Some(MenuEvent::Moved(index)) => {
                    log::debug!("Main menu cursor at {index}");
                    None
                }
                None => None,
            },
            AppMode::LevelSelect(menu) => match menu.handle(input.menu_keys(), now) {
                Some(MenuEvent::Confirmed(index)) => Some(Transition::Drive(index)),
                Some(MenuEvent::Moved(index)) => {
                    log::debug!("Level cursor at {index}");
                    None
                }
                None => None,
            },
            AppMode::Driving(drive) => {
                let keys = input.tick_input();
                match self.settings.time_step {
                    TimeStep::Fixed => {
                        for _ in 0..self.step.advance(frame_dt) {
                            tick(drive, &keys, self.step.dt());
                        }
                    }
                    TimeStep::Variable => tick(drive, &keys, frame_dt),
                }
                None
            }
            AppMode::Exiting => None,
        };

        match transition {
            Some(Transition::Drive(level)) => {
                self.step.reset();
                let level = self.levels.clamp_index(level);
                self.mode = AppMode::Driving(self.new_session(Some(level)));
            }
            Some(Transition::Exit) => {
                log::info!("Quit selected");
                self.mode = AppMode::Exiting;
            }
            None => {}
        }
    }

    fn new_session(&self, level: Option<usize>) -> DriveState {
        if let Some(layout) = self.levels.layout(level) {
            log::info!("Driving {} ({} bays)", layout.name, layout.bays.len());
        }
        let area = PlayArea::new(CANVAS_WIDTH, CANVAS_HEIGHT, self.settings.pixels_per_unit);
        DriveState::new(level, self.settings.vehicle, area)
    }
}
