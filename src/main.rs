//! Nova Strike headless driver
//!
//! Runs a scripted pilot against the simulation core and logs the events a
//! real host would hand to its renderer and UI. Seed comes from the first
//! argument (falls back to wall clock); `NOVA_TUNING` names an optional
//! JSON balance file.

use nova_strike::Tuning;
use nova_strike::sim::{GameEvent, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let tuning = match std::env::var("NOVA_TUNING") {
        Ok(path) => Tuning::load(&path),
        Err(_) => Tuning::default(),
    };

    let mut state = GameState::new(seed, tuning);
    log::info!("Starting run with seed {seed}");

    // Scripted pilot: strafe side to side, fire twice a second.
    let max_frames = 60 * 120;
    for frame in 0..max_frames {
        let sweep_left = (frame / 90) % 2 == 0;
        let input = TickInput {
            move_left: sweep_left,
            move_right: !sweep_left,
            fire: frame % 30 == 0,
            ..Default::default()
        };
        tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::Explosion { pos } => {
                    log::debug!("Explosion at ({:.0}, {:.0})", pos.x, pos.y)
                }
                GameEvent::PlayerHit { health } => log::info!("Player hit, health {health}"),
                GameEvent::GameOver => log::info!("Game over"),
            }
        }

        if state.is_game_over() {
            break;
        }
    }

    log::info!(
        "Run ended after {:.1}s: health {}, {} enemies on screen",
        state.elapsed_secs(),
        state.player_health(),
        state.enemies.len()
    );
}
