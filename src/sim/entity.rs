//! Game entities
//!
//! One shared [`Entity`] record carries position, velocity, rotation, the
//! axis-aligned bounding box and the alive flag; [`EntityKind`] holds the
//! per-variant data. Entities are marked dead during the collision phase and
//! purged by the tick's cleanup pass, never removed mid-scan.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;
use crate::{descent_dir, heading_to_dir};

/// Opaque visual handle for the presentation layer.
///
/// The sim picks the sprite at construction (enemies get a random color) and
/// derives the bounding box from its native dimensions, exactly as the
/// renderer will draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    EnemyRed,
    EnemyGreen,
    EnemyYellow,
    Projectile,
}

impl SpriteKind {
    /// Native sprite dimensions in presentation units.
    /// Projectiles are scaled per shot; ships use these directly.
    pub fn native_size(self) -> Vec2 {
        match self {
            SpriteKind::Player => Vec2::new(50.0, 50.0),
            SpriteKind::EnemyRed | SpriteKind::EnemyGreen | SpriteKind::EnemyYellow => {
                Vec2::new(40.0, 40.0)
            }
            SpriteKind::Projectile => Vec2::new(2.0, 4.0),
        }
    }
}

/// Kind-specific entity data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Player {
        health: i32,
        speed: f32,
    },
    Enemy {
        /// Fixed at spawn: base speed scaled by the game-time multiplier
        speed: f32,
        /// Whether this ship returns fire (50% of spawns)
        shooting: bool,
        /// Tick of the last shot; 0 lets a shooter fire as soon as a full
        /// cooldown of game time has passed
        last_shot_tick: u64,
    },
    Projectile {
        player_owned: bool,
    },
}

/// A simulated object: player ship, enemy ship or projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Degrees, 0 = up, increasing clockwise
    pub rotation: f32,
    /// Bounding-box extents, fixed at construction
    pub width: f32,
    pub height: f32,
    pub alive: bool,
    pub sprite: SpriteKind,
    pub kind: EntityKind,
}

impl Entity {
    /// The player ship, centered horizontally near the bottom of the screen.
    pub fn player(tuning: &Tuning) -> Self {
        let size = SpriteKind::Player.native_size();
        Self {
            pos: Vec2::new(
                tuning.screen_width / 2.0,
                tuning.screen_height - tuning.player_spawn_offset,
            ),
            vel: Vec2::ZERO,
            rotation: 0.0,
            width: size.x,
            height: size.y,
            alive: true,
            sprite: SpriteKind::Player,
            kind: EntityKind::Player {
                health: tuning.player_health,
                speed: tuning.player_speed,
            },
        }
    }

    /// An enemy ship entering at the top edge.
    ///
    /// Speed scales with game time and is fixed thereafter. The heading is
    /// the base angle (sign chosen by travel direction) plus uniform
    /// variance, converted once to a velocity; it only changes sign on wall
    /// bounces afterward.
    pub fn enemy(
        x: f32,
        time_multiplier: f32,
        moving_right: bool,
        rng: &mut impl Rng,
        tuning: &Tuning,
    ) -> Self {
        let sprite = match rng.random_range(0..3u8) {
            0 => SpriteKind::EnemyRed,
            1 => SpriteKind::EnemyGreen,
            _ => SpriteKind::EnemyYellow,
        };
        let speed = tuning.enemy_base_speed * (1.0 + time_multiplier);
        let shooting = rng.random_bool(0.5);

        let base = if moving_right {
            -tuning.enemy_base_angle
        } else {
            tuning.enemy_base_angle
        };
        let angle = base + rng.random_range(-1.0..1.0) * tuning.enemy_angle_variance;

        let size = sprite.native_size();
        Self {
            pos: Vec2::new(x, 0.0),
            vel: descent_dir(angle) * speed,
            rotation: angle,
            width: size.x,
            height: size.y,
            alive: true,
            sprite,
            kind: EntityKind::Enemy {
                speed,
                shooting,
                last_shot_tick: 0,
            },
        }
    }

    /// A projectile fired from `pos` at `angle` degrees (0 = up, clockwise).
    /// `scale` sizes the bounding box against the sprite's native aspect.
    pub fn projectile(
        pos: Vec2,
        angle: f32,
        scale: f32,
        player_owned: bool,
        tuning: &Tuning,
    ) -> Self {
        let size = SpriteKind::Projectile.native_size() * scale;
        Self {
            pos,
            vel: heading_to_dir(angle) * tuning.projectile_speed,
            rotation: angle,
            width: size.x,
            height: size.y,
            alive: true,
            sprite: SpriteKind::Projectile,
            kind: EntityKind::Projectile { player_owned },
        }
    }

    /// Per-frame integration: velocity is applied to position exactly once.
    /// The player additionally clamps to the screen bounds.
    pub fn update(&mut self, tuning: &Tuning) {
        self.pos += self.vel;
        if matches!(self.kind, EntityKind::Player { .. }) {
            self.pos.x = self
                .pos
                .x
                .clamp(self.width / 2.0, tuning.screen_width - self.width / 2.0);
            self.pos.y = self
                .pos
                .y
                .clamp(self.height / 2.0, tuning.screen_height - self.height / 2.0);
        }
    }

    /// Reflect horizontal velocity on contact with the left or right screen
    /// edge. Only flips while still moving outward, so calling this again
    /// before the ship clears the edge does not undo the bounce.
    pub fn bounce_off_walls(&mut self, screen_width: f32) {
        if (self.pos.x <= 0.0 && self.vel.x < 0.0)
            || (self.pos.x >= screen_width && self.vel.x > 0.0)
        {
            self.vel.x = -self.vel.x;
        }
    }

    /// Player health, if this entity is the player.
    pub fn health(&self) -> Option<i32> {
        match self.kind {
            EntityKind::Player { health, .. } => Some(health),
            _ => None,
        }
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, EntityKind::Enemy { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn update_adds_velocity_once() {
        let tuning = Tuning::default();
        let mut p =
            Entity::projectile(Vec2::new(100.0, 100.0), 90.0, 5.0, true, &tuning);
        let before = p.pos;
        let vel = p.vel;
        p.update(&tuning);
        assert_eq!(p.pos, before + vel);
    }

    #[test]
    fn player_update_clamps_to_screen() {
        let tuning = Tuning::default();
        let mut player = Entity::player(&tuning);
        player.pos = Vec2::new(10.0, 10.0);
        player.vel = Vec2::new(-100.0, -100.0);
        player.update(&tuning);
        assert_eq!(player.pos.x, player.width / 2.0);
        assert_eq!(player.pos.y, player.height / 2.0);

        player.vel = Vec2::new(10_000.0, 10_000.0);
        player.update(&tuning);
        assert_eq!(player.pos.x, tuning.screen_width - player.width / 2.0);
        assert_eq!(player.pos.y, tuning.screen_height - player.height / 2.0);
    }

    #[test]
    fn player_projectile_at_zero_rotation_flies_up() {
        let tuning = Tuning::default();
        let p = Entity::projectile(Vec2::new(400.0, 550.0), 0.0, 5.0, true, &tuning);
        assert!(p.vel.y < 0.0);
        assert!(p.vel.x.abs() < 1e-4);
        assert!((p.vel.length() - tuning.projectile_speed).abs() < 1e-4);
        // Box scaled from the 2x4 native sprite
        assert_eq!(p.width, 10.0);
        assert_eq!(p.height, 20.0);
    }

    #[test]
    fn enemy_return_fire_angle_points_down() {
        let tuning = Tuning::default();
        // An enemy at rotation -60 fires at 180 + (-60) = 120 degrees
        let p = Entity::projectile(Vec2::new(200.0, 100.0), 120.0, 3.5, false, &tuning);
        assert!(p.vel.y > 0.0);
        assert_eq!(p.width, 7.0);
    }

    #[test]
    fn enemy_heading_within_variance_band() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let e = Entity::enemy(100.0, 0.0, true, &mut rng, &tuning);
            assert!(e.rotation >= -90.0 && e.rotation <= -30.0, "got {}", e.rotation);
            assert!((e.vel.length() - 1.0).abs() < 1e-4);
            assert!(e.vel.y > 0.0, "enemies descend");
        }
    }

    #[test]
    fn enemy_speed_scales_with_game_time() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let e = Entity::enemy(100.0, 3.0, false, &mut rng, &tuning);
        assert!((e.vel.length() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn wall_bounce_is_direction_aware() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut e = Entity::enemy(100.0, 0.0, true, &mut rng, &tuning);
        e.pos.x = -2.0;
        e.vel = Vec2::new(-1.0, 0.5);

        e.bounce_off_walls(tuning.screen_width);
        assert_eq!(e.vel, Vec2::new(1.0, 0.5));

        // Still inside the edge next frame: no second flip
        e.bounce_off_walls(tuning.screen_width);
        assert_eq!(e.vel, Vec2::new(1.0, 0.5));

        // Away from both edges: untouched
        e.pos.x = 400.0;
        e.bounce_off_walls(tuning.screen_width);
        assert_eq!(e.vel, Vec2::new(1.0, 0.5));
    }
}
