//! Per-frame simulation step
//!
//! One [`tick`] call runs the whole frame transition synchronously: input
//! application, spawning, integration, enemy fire, collision resolution and
//! cleanup. A tick never fails; it only transitions state.

use glam::Vec2;

use super::collision;
use super::entity::{Entity, EntityKind};
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::TICK_RATE;

/// Control intents for a single frame.
///
/// The movement and rotation flags are level-triggered (true while the
/// control is held); `fire` is edge-triggered and should be set for the
/// press frame only.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub fire: bool,
}

/// Advance the game by one frame. No-op while the run is over.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    apply_input(state, input);

    if spawn::spawn_due(state) {
        spawn::spawn_enemy(state);
    }

    integrate(state);
    enemy_fire(state);
    check_collisions(state);

    if state.phase == GamePhase::Running {
        cleanup(state);
    }
}

/// Apply held intents to the player and fire if requested.
///
/// Horizontal velocity is fully determined by the intents each frame: no
/// inertia, and the right intent wins when both are held.
fn apply_input(state: &mut GameState, input: &TickInput) {
    let EntityKind::Player { speed, .. } = state.player.kind else {
        return;
    };

    if input.rotate_cw {
        state.player.rotation += state.tuning.player_rotation_speed;
    }
    if input.rotate_ccw {
        state.player.rotation -= state.tuning.player_rotation_speed;
    }

    let mut vx = 0.0;
    if input.move_left {
        vx = -speed;
    }
    if input.move_right {
        vx = speed;
    }
    state.player.vel = Vec2::new(vx, 0.0);

    if input.fire {
        let shot = Entity::projectile(
            state.player.pos,
            state.player.rotation,
            state.tuning.player_shot_size,
            true,
            &state.tuning,
        );
        state.projectiles.push(shot);
    }
}

/// Commit one frame of motion: player (clamped), enemies (with wall
/// bounces), then projectiles.
fn integrate(state: &mut GameState) {
    state.player.update(&state.tuning);
    for enemy in &mut state.enemies {
        enemy.update(&state.tuning);
        enemy.bounce_off_walls(state.tuning.screen_width);
    }
    for projectile in &mut state.projectiles {
        projectile.update(&state.tuning);
    }
}

/// Shooting enemies return fire along the inverse of their spawn heading
/// once per cooldown window. Deliberately not aimed at the player.
fn enemy_fire(state: &mut GameState) {
    let cooldown_ticks = (state.tuning.shot_cooldown_secs * TICK_RATE) as u64;
    let now = state.time_ticks;

    let mut shots: Vec<(Vec2, f32)> = Vec::new();
    for enemy in &mut state.enemies {
        let EntityKind::Enemy {
            shooting,
            ref mut last_shot_tick,
            ..
        } = enemy.kind
        else {
            continue;
        };
        if shooting && now.saturating_sub(*last_shot_tick) > cooldown_ticks {
            shots.push((enemy.pos, 180.0 + enemy.rotation));
            *last_shot_tick = now;
        }
    }

    for (pos, angle) in shots {
        state.projectiles.push(Entity::projectile(
            pos,
            angle,
            state.tuning.enemy_shot_size,
            false,
            &state.tuning,
        ));
    }
}

/// Collision phase, in fixed order: enemy-enemy bounces, enemy shots vs the
/// player, player shots vs enemies, then enemy bodies vs the player. Each
/// sub-phase skips entities already marked dead this frame.
fn check_collisions(state: &mut GameState) {
    // (a) unique unordered enemy pairs
    for i in 0..state.enemies.len() {
        let (head, tail) = state.enemies.split_at_mut(i + 1);
        let a = &mut head[i];
        if !a.alive {
            continue;
        }
        for b in tail.iter_mut() {
            if !b.alive {
                continue;
            }
            if collision::intersects(a, b) {
                collision::resolve_bounce(
                    a,
                    b,
                    state.tuning.restitution,
                    state.tuning.max_bounce_speed,
                );
            }
        }
    }

    // (b) descending enemy shots vs the player
    let mut hits = 0;
    for projectile in state.projectiles.iter_mut() {
        if !projectile.alive {
            continue;
        }
        let EntityKind::Projectile { player_owned } = projectile.kind else {
            continue;
        };
        if !player_owned
            && projectile.vel.y > 0.0
            && collision::intersects(projectile, &state.player)
        {
            projectile.alive = false;
            hits += 1;
        }
    }
    if damage_player(state, hits) {
        return;
    }

    // (c) ascending player shots vs enemies
    for projectile in state.projectiles.iter_mut() {
        if !projectile.alive {
            continue;
        }
        let EntityKind::Projectile { player_owned } = projectile.kind else {
            continue;
        };
        if player_owned && projectile.vel.y < 0.0 {
            for enemy in state.enemies.iter_mut() {
                if !enemy.alive {
                    continue;
                }
                if collision::intersects(projectile, enemy) {
                    state.events.push(GameEvent::Explosion { pos: enemy.pos });
                    enemy.alive = false;
                    projectile.alive = false;
                    break;
                }
            }
        }
    }

    // (d) enemy bodies vs the player
    let mut hits = 0;
    for enemy in state.enemies.iter_mut() {
        if !enemy.alive {
            continue;
        }
        if collision::intersects(enemy, &state.player) {
            state.events.push(GameEvent::Explosion { pos: enemy.pos });
            enemy.alive = false;
            hits += 1;
        }
    }
    damage_player(state, hits);
}

/// Apply accumulated damage to the player; returns true when the run ended.
fn damage_player(state: &mut GameState, hits: u32) -> bool {
    if hits == 0 {
        return false;
    }
    let EntityKind::Player { ref mut health, .. } = state.player.kind else {
        return false;
    };
    *health -= hits as i32;
    let health = *health;

    state.events.push(GameEvent::PlayerHit { health });
    if health <= 0 {
        enter_game_over(state);
        return true;
    }
    false
}

/// Terminal transition: stop the player, clear both collections and surface
/// the game-over signal. Stays terminal until the host resets.
fn enter_game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.player.vel = Vec2::ZERO;
    state.enemies.clear();
    state.projectiles.clear();
    state.events.push(GameEvent::GameOver);
}

/// End-of-frame purge of dead and out-of-bounds entities.
///
/// An enemy leaving through the bottom edge counts as a body hit; enemies
/// exiting other edges are never removed this way.
fn cleanup(state: &mut GameState) {
    let screen_h = state.tuning.screen_height;

    state
        .projectiles
        .retain(|p| p.alive && p.pos.y >= 0.0 && p.pos.y <= screen_h);

    let mut leaked = 0;
    state.enemies.retain(|e| {
        if !e.alive {
            return false;
        }
        if e.pos.y > screen_h {
            leaked += 1;
            return false;
        }
        true
    });
    damage_player(state, leaked);
}
