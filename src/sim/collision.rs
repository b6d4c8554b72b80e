//! Collision detection and response
//!
//! Intersection is an axis-aligned box overlap test; the bounce resolver is a
//! simplified equal-mass elastic collision used only between enemy ships.
//! Player and projectile hits just flag entities dead.

use glam::Vec2;

use super::entity::Entity;

/// Strict AABB overlap test between two entities' bounding boxes.
///
/// Boxes are centered on the entity position. Touching edges do NOT count as
/// a collision; only strictly overlapping areas do. Symmetric.
pub fn intersects(a: &Entity, b: &Entity) -> bool {
    let delta = b.pos - a.pos;
    delta.x.abs() * 2.0 < a.width + b.width && delta.y.abs() * 2.0 < a.height + b.height
}

/// Elastic bounce between two colliding entities.
///
/// Applies an impulse of `-(1 + restitution) * v_along_normal` along the
/// collision normal to both participants, then clamps each resulting
/// velocity to `max_speed` (scaled down, direction preserved). Call exactly
/// once per colliding pair per frame.
///
/// Degenerate cases resolve locally: coincident centers leave no usable
/// normal, so the pair is skipped this frame; a separating pair
/// (`v_along_normal > 0`) is a no-op.
pub fn resolve_bounce(a: &mut Entity, b: &mut Entity, restitution: f32, max_speed: f32) {
    let Some(normal) = (b.pos - a.pos).try_normalize() else {
        return;
    };

    let relative = b.vel - a.vel;
    let along_normal = relative.dot(normal);
    if along_normal > 0.0 {
        return;
    }

    let j = -(1.0 + restitution) * along_normal;
    let impulse = normal * j;

    a.vel = limit_speed(a.vel - impulse, max_speed);
    b.vel = limit_speed(b.vel + impulse, max_speed);
}

/// Scale a velocity down to `max_speed` if it exceeds it, preserving direction.
#[inline]
fn limit_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    vel.clamp_length_max(max_speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::entity::EntityKind;
    use proptest::prelude::*;

    fn enemy_at(pos: Vec2, vel: Vec2) -> Entity {
        Entity {
            pos,
            vel,
            rotation: 0.0,
            width: 40.0,
            height: 40.0,
            alive: true,
            sprite: crate::sim::SpriteKind::EnemyRed,
            kind: EntityKind::Enemy {
                speed: 1.0,
                shooting: false,
                last_shot_tick: 0,
            },
        }
    }

    #[test]
    fn overlapping_boxes_intersect() {
        let tuning = Tuning::default();
        let player = Entity::player(&tuning);
        let mut other = enemy_at(player.pos, Vec2::ZERO);
        assert!(intersects(&player, &other));
        assert!(intersects(&other, &player));

        other.pos = player.pos + Vec2::new(44.0, 0.0);
        assert!(intersects(&player, &other)); // half-widths sum to 45
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        // Two 40x40 boxes exactly 40 apart share an edge, not an area
        let a = enemy_at(Vec2::new(100.0, 100.0), Vec2::ZERO);
        let b = enemy_at(Vec2::new(140.0, 100.0), Vec2::ZERO);
        assert!(!intersects(&a, &b));

        let c = enemy_at(Vec2::new(100.0, 140.0), Vec2::ZERO);
        assert!(!intersects(&a, &c));
    }

    #[test]
    fn head_on_bounce_exchanges_momentum() {
        let mut a = enemy_at(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let mut b = enemy_at(Vec2::new(10.0, 0.0), Vec2::new(-1.0, 0.0));
        resolve_bounce(&mut a, &mut b, 0.5, 3.0);
        // Approaching at 2 along the normal; impulse is 1.5 * 2 = 3, clamped
        assert!(a.vel.x < 0.0);
        assert!(b.vel.x > 0.0);
        assert!(a.vel.length() <= 3.0 + 1e-4);
        assert!(b.vel.length() <= 3.0 + 1e-4);
    }

    #[test]
    fn separating_pair_is_untouched() {
        let mut a = enemy_at(Vec2::new(0.0, 0.0), Vec2::new(-1.0, 0.0));
        let mut b = enemy_at(Vec2::new(10.0, 0.0), Vec2::new(2.0, 0.0));
        resolve_bounce(&mut a, &mut b, 0.5, 3.0);
        assert_eq!(a.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(b.vel, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn coincident_centers_skip_resolution() {
        let mut a = enemy_at(Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0));
        let mut b = enemy_at(Vec2::new(50.0, 50.0), Vec2::new(-2.0, 0.5));
        resolve_bounce(&mut a, &mut b, 0.5, 3.0);
        assert_eq!(a.vel, Vec2::new(1.0, 1.0));
        assert_eq!(b.vel, Vec2::new(-2.0, 0.5));
        assert!(a.vel.is_finite() && b.vel.is_finite());
    }

    proptest! {
        #[test]
        fn resolved_speeds_never_exceed_cap(
            ax in -500f32..500.0, ay in -500f32..500.0,
            bx in -500f32..500.0, by in -500f32..500.0,
            avx in -50f32..50.0, avy in -50f32..50.0,
            bvx in -50f32..50.0, bvy in -50f32..50.0,
        ) {
            let mut a = enemy_at(Vec2::new(ax, ay), Vec2::new(avx, avy));
            let mut b = enemy_at(Vec2::new(bx, by), Vec2::new(bvx, bvy));
            let pre_a = a.vel;
            let pre_b = b.vel;
            resolve_bounce(&mut a, &mut b, 0.5, 3.0);

            prop_assert!(a.vel.is_finite());
            prop_assert!(b.vel.is_finite());
            if a.vel != pre_a || b.vel != pre_b {
                // Resolution happened: both participants are capped
                prop_assert!(a.vel.length() <= 3.0 + 1e-3);
                prop_assert!(b.vel.length() <= 3.0 + 1e-3);
            }
        }

        #[test]
        fn separating_pairs_are_noops(
            ax in -500f32..500.0, ay in -500f32..500.0,
            dx in -500f32..500.0, dy in -500f32..500.0,
            speed in 0.1f32..40.0,
        ) {
            // Place b away from a and send it directly outward, so the
            // relative velocity along the normal is positive
            prop_assume!(dx.abs() > 1.0 || dy.abs() > 1.0);
            let a_pos = Vec2::new(ax, ay);
            let offset = Vec2::new(dx, dy);
            let mut a = enemy_at(a_pos, Vec2::ZERO);
            let mut b = enemy_at(a_pos + offset, offset.normalize() * speed);

            let pre_a = a.vel;
            let pre_b = b.vel;
            resolve_bounce(&mut a, &mut b, 0.5, 3.0);
            prop_assert_eq!(a.vel, pre_a);
            prop_assert_eq!(b.vel, pre_b);
        }
    }
}
