//! Data-driven game balance
//!
//! Every gameplay knob lives in [`Tuning`] so tests and hosts can vary the
//! balance without recompiling. Defaults match the shipped game; a partial
//! JSON file overrides individual fields.

use serde::{Deserialize, Serialize};

/// Game balance parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Playfield width in presentation units
    pub screen_width: f32,
    /// Playfield height in presentation units
    pub screen_height: f32,

    /// Player horizontal speed (units per frame)
    pub player_speed: f32,
    /// Player rotation per frame while a rotate intent is held (degrees)
    pub player_rotation_speed: f32,
    /// Player starting health
    pub player_health: i32,
    /// Player spawn distance from the bottom edge
    pub player_spawn_offset: f32,

    /// Enemy speed before time scaling (units per frame)
    pub enemy_base_speed: f32,
    /// Magnitude of the enemy spawn heading (degrees from straight down)
    pub enemy_base_angle: f32,
    /// Uniform variance applied to the spawn heading (degrees)
    pub enemy_angle_variance: f32,
    /// Seconds an enemy must wait between shots
    pub shot_cooldown_secs: f32,

    /// Projectile speed (units per frame)
    pub projectile_speed: f32,
    /// Bounding-box scale for player shots
    pub player_shot_size: f32,
    /// Bounding-box scale for enemy shots
    pub enemy_shot_size: f32,

    /// Spawn interval at game start (seconds)
    pub initial_spawn_interval: f32,
    /// Floor for the shrinking spawn interval (seconds)
    pub min_spawn_interval: f32,
    /// Margin from the screen centerline when picking a spawn x
    pub spawn_margin: f32,

    /// Elasticity multiplier for enemy-enemy bounces (impulse uses 1 + this)
    pub restitution: f32,
    /// Maximum speed an enemy can leave a bounce with
    pub max_bounce_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,

            player_speed: 5.0,
            player_rotation_speed: 4.0,
            player_health: 5,
            player_spawn_offset: 50.0,

            enemy_base_speed: 1.0,
            enemy_base_angle: 60.0,
            enemy_angle_variance: 30.0,
            shot_cooldown_secs: 1.0,

            projectile_speed: 7.0,
            player_shot_size: 5.0,
            enemy_shot_size: 3.5,

            initial_spawn_interval: 2.0,
            min_spawn_interval: 0.1,
            spawn_margin: 50.0,

            restitution: 0.5,
            max_bounce_speed: 3.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a file, falling back to defaults on any failure.
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {path}: {e}; using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {path}: {e}; using defaults");
                Self::default()
            }
        }
    }
}
