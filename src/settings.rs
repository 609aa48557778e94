//! Demo settings
//!
//! Selects which variant of the demo runs (menu, level select or straight into
//! driving), plus vehicle tuning. Loaded from a JSON file if one exists.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::VehicleParams;

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV_VAR: &str = "CAR_PARK_SETTINGS";
/// Settings file name looked up beside the executable
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Which screen the demo opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FrontEnd {
    /// Start / Quit menu
    #[default]
    MainMenu,
    /// Ten-entry level list
    LevelSelect,
    /// Straight into driving the free-drive lot
    None,
}

impl FrontEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrontEnd::MainMenu => "main_menu",
            FrontEnd::LevelSelect => "level_select",
            FrontEnd::None => "none",
        }
    }
}

/// How simulation time is derived from the frame clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeStep {
    /// Fixed-step accumulator (deterministic)
    #[default]
    Fixed,
    /// One tick per frame using the measured frame time
    Variable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub front_end: FrontEnd,
    /// Draw the (never incremented) score counter and level name
    pub show_score: bool,
    /// Draw the level's parking bays
    pub show_level_content: bool,
    /// Level the main menu's Start entry drives (0-based)
    pub start_level: usize,

    // === Timing ===
    pub ticks_per_second: u32,
    pub time_step: TimeStep,

    // === Vehicle ===
    pub vehicle: VehicleParams,

    // === Presentation ===
    pub pixels_per_unit: f32,
    /// Car sprite, relative paths resolve beside the executable first
    pub sprite_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            front_end: FrontEnd::MainMenu,
            show_score: true,
            show_level_content: true,
            start_level: 0,

            ticks_per_second: TICKS_PER_SECOND,
            time_step: TimeStep::Fixed,

            vehicle: VehicleParams::default(),

            pixels_per_unit: PIXELS_PER_UNIT,
            sprite_path: PathBuf::from("assets/car.png"),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a file. `Ok(None)` if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, GameError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(GameError::SettingsRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load settings from `$CAR_PARK_SETTINGS` or `settings.json` beside the
    /// executable, falling back to defaults
    pub fn load() -> Self {
        let path = std::env::var_os(SETTINGS_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| exe_relative(Path::new(SETTINGS_FILE_NAME)));

        match Self::load_from(&path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Ok(None) => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Replace values that would break the simulation with defaults
    pub fn sanitized(mut self) -> Self {
        if self.ticks_per_second == 0 {
            log::warn!("ticks_per_second is 0, using {TICKS_PER_SECOND}");
            self.ticks_per_second = TICKS_PER_SECOND;
        }
        self.pixels_per_unit = positive("pixels_per_unit", self.pixels_per_unit, PIXELS_PER_UNIT);
        self.vehicle = sanitized_vehicle(self.vehicle);
        self
    }

    /// Fixed simulation step in seconds
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.ticks_per_second as f32
    }

    /// Sprite location: beside the executable if present there, else as given
    pub fn resolved_sprite_path(&self) -> PathBuf {
        if self.sprite_path.is_absolute() {
            return self.sprite_path.clone();
        }
        let beside_exe = exe_relative(&self.sprite_path);
        if beside_exe.exists() {
            beside_exe
        } else {
            self.sprite_path.clone()
        }
    }
}

/// `value` if it is finite and positive, else `default`
fn positive(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("{name} must be positive, got {value}; using {default}");
        default
    }
}

/// Limits that would panic the velocity clamp or flip the turning radius are
/// replaced with defaults
fn sanitized_vehicle(mut v: VehicleParams) -> VehicleParams {
    let d = VehicleParams::default();
    v.length = positive("length", v.length, d.length);
    v.max_velocity = positive("max_velocity", v.max_velocity, d.max_velocity);
    v.max_acceleration = positive("max_acceleration", v.max_acceleration, d.max_acceleration);
    v.brake_deceleration = positive(
        "brake_deceleration",
        v.brake_deceleration,
        d.brake_deceleration,
    );
    v.free_deceleration = positive(
        "free_deceleration",
        v.free_deceleration,
        d.free_deceleration,
    );

    // Full lock must stay strictly between 0 and 90 degrees
    let steering_ok = v.max_steering > 0.0 && v.max_steering < 90.0;
    if !steering_ok {
        log::warn!("max_steering must be in (0, 90), using {}", d.max_steering);
        v.max_steering = d.max_steering;
    }
    v
}

/// Resolve `path` against the executable's directory
fn exe_relative(path: &Path) -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(path)))
        .unwrap_or_else(|| path.to_path_buf())
}
