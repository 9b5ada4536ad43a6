use serde::Deserialize;

pub const WORLD_W: f32 = 1024.0;
pub const WORLD_H: f32 = 768.0;

pub const LEVEL_ROWS: usize = 24;
pub const LEVEL_COLS: usize = 32;
pub const TILE_SIZE: f32 = 32.0;

/// Asset paths, relative to the host's asset root.
pub mod paths {
    pub const MENU_MUSIC: &str = "Assets/Sound/Music/Menu.mp3";
    pub const LEVEL_MUSIC: &str = "Assets/Sound/Music/Level.mp3";
    pub const PLAY_BUTTON: &str = "Assets/Images/Buttons/play.png";
    pub const TILES: &str = "Assets/Images/Tiles.png";
    pub const PLAYER: &str = "Assets/Images/Player.png";
}

pub const TILE_DATA: &str = include_str!("../assets/data/tiledata.txt");
pub const LEVEL_1: &str = include_str!("../assets/data/level1.txt");
const TUNING_JSON: &str = include_str!("../assets/tuning.json");

/// Player movement constants. Speeds are in world units per second,
/// accelerations in world units per second squared.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub acceleration: f32,
    pub max_speed_x: f32,
    /// Horizontal velocity multiplier applied each step without input.
    pub drag: f32,
    /// Horizontal speed below which the player stops dead.
    pub stop_threshold: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub jump_force: f32,
    /// Seconds per animation frame.
    pub frame_time: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            acceleration: 1800.0,
            max_speed_x: 360.0,
            drag: 0.85,
            stop_threshold: 10.0,
            gravity: 1800.0,
            max_fall_speed: 900.0,
            jump_force: 780.0,
            frame_time: 0.1,
        }
    }
}

impl PlayerTuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Tuning shipped with the game, or the defaults if it fails to parse.
    pub fn load() -> Self {
        Self::from_json(TUNING_JSON).unwrap_or_else(|e| {
            log::warn!("bad tuning.json ({}); using defaults", e);
            Self::default()
        })
    }
}
