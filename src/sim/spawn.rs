//! Time-driven enemy spawner
//!
//! Spawns alternate sides each call, starting left; the interval between
//! spawns shrinks as game time grows.

use super::entity::Entity;
use super::state::GameState;
use crate::consts::SIM_DT;
use crate::tuning::Tuning;
use rand::Rng;

/// Seconds to wait before the next spawn at the given game-time multiplier.
///
/// The raw formula `initial - (1 + m)^1.2` shrinks past zero at high game
/// time; it is floored at `min_spawn_interval` so spawning becomes "nearly
/// every check" rather than a negative wait.
pub fn spawn_interval(tuning: &Tuning, multiplier: f32) -> f32 {
    (tuning.initial_spawn_interval - (1.0 + multiplier).powf(1.2)).max(tuning.min_spawn_interval)
}

/// Whether enough time has passed since the last spawn.
pub fn spawn_due(state: &GameState) -> bool {
    let elapsed = (state.time_ticks - state.last_spawn_tick) as f32 * SIM_DT;
    elapsed > spawn_interval(&state.tuning, state.game_time_multiplier())
}

/// Spawn one enemy at the top edge, on the current side, and flip the side.
///
/// The x coordinate is uniform within the chosen half-screen, keeping
/// `spawn_margin` clear of the centerline. An enemy spawned on the left
/// travels rightward and vice versa.
pub fn spawn_enemy(state: &mut GameState) {
    let half = state.tuning.screen_width / 2.0;
    let span = half - state.tuning.spawn_margin;
    let x = if state.spawn_on_left {
        state.rng.random_range(0.0..span)
    } else {
        half + state.rng.random_range(0.0..span)
    };

    let multiplier = state.game_time_multiplier();
    let enemy = Entity::enemy(x, multiplier, state.spawn_on_left, &mut state.rng, &state.tuning);
    state.enemies.push(enemy);

    state.last_spawn_tick = state.time_ticks;
    state.spawn_on_left = !state.spawn_on_left;
}
