//! Nova Strike - a wave-survival space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input-device binding and UI chrome are host concerns: the host
//! feeds [`sim::TickInput`] intent flags into [`sim::tick`] once per frame and
//! reads back entity positions, player health and [`sim::GameEvent`]s.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate; one tick is one frame
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// How long the presentation layer's explosion clip runs (seconds).
    /// The sim only emits the spawn event; the clip removes itself.
    pub const EXPLOSION_DURATION: f32 = 1.25;
}

/// Convert a heading in degrees (0 = straight up, increasing clockwise) into
/// a unit direction in screen space, where y grows downward.
#[inline]
pub fn heading_to_dir(degrees: f32) -> Vec2 {
    let r = degrees.to_radians();
    Vec2::new(r.sin(), -r.cos())
}

/// Direction for a descending heading (0 = straight down). Enemy spawn
/// headings use this frame, so a 0-degree enemy drifts toward the bottom.
#[inline]
pub fn descent_dir(degrees: f32) -> Vec2 {
    let r = degrees.to_radians();
    Vec2::new(r.sin(), r.cos())
}
