//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed timestep
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! A frame never fails; degenerate inputs (coincident collision centers,
//! non-positive spawn intervals) are resolved locally within the tick.

pub mod collision;
pub mod entity;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{intersects, resolve_bounce};
pub use entity::{Entity, EntityKind, SpriteKind};
pub use spawn::{spawn_due, spawn_enemy, spawn_interval};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
