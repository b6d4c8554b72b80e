//! Game state and lifecycle
//!
//! [`GameState`] owns every mutable piece of the simulation: the player, the
//! enemy and projectile collections, the timers and the seeded RNG. Nothing
//! else mutates game state; hosts interact through [`super::tick`],
//! [`GameState::reset`] and the read accessors here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::Entity;
use crate::consts::SIM_DT;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Simulation advancing every tick
    Running,
    /// Terminal until the host calls [`GameState::reset`]
    GameOver,
}

/// Side effects a frame surfaces to the presentation/UI collaborators.
///
/// Drained by the host after each tick; the sim does not retain them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Play the explosion clip at this point
    /// (see [`crate::consts::EXPLOSION_DURATION`])
    Explosion { pos: Vec2 },
    /// The player took damage; `health` is the new value
    PlayerHit { health: i32 },
    /// The run ended; show the end screen and offer a restart
    GameOver,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this run was started with
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,

    /// Frames elapsed since the run started
    pub time_ticks: u64,
    /// Tick of the last enemy spawn
    pub last_spawn_tick: u64,
    /// Side of the next spawn; alternates, starting left
    pub spawn_on_left: bool,

    pub player: Entity,
    pub enemies: Vec<Entity>,
    pub projectiles: Vec<Entity>,

    /// Events produced this frame, awaiting [`GameState::drain_events`]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh run with the given seed and balance.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let player = Entity::player(&tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Running,
            time_ticks: 0,
            last_spawn_tick: 0,
            spawn_on_left: true,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Restart: fresh player, empty collections, reset timers, reseeded RNG.
    /// Re-enters [`GamePhase::Running`].
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(seed, self.tuning.clone());
    }

    /// Seconds of game time since the run started.
    pub fn elapsed_secs(&self) -> f32 {
        self.time_ticks as f32 * SIM_DT
    }

    /// Scalar growing with game time; scales enemy speed and spawn rate.
    /// Increases by 1 every 10 seconds.
    pub fn game_time_multiplier(&self) -> f32 {
        self.elapsed_secs() / 10.0
    }

    /// Current player health (for the heart-glyph display).
    pub fn player_health(&self) -> i32 {
        self.player.health().unwrap_or(0)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Every live entity the renderer should draw this frame.
    pub fn live_entities(&self) -> impl Iterator<Item = &Entity> {
        std::iter::once(&self.player)
            .chain(self.enemies.iter())
            .chain(self.projectiles.iter())
            .filter(|e| e.alive)
    }

    /// Take this frame's events, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
