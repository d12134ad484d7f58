use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::{DifficultyMode, HexColor};
use crate::config::GameConfig;
use crate::round::Phase;
use crate::session::Session;

/// Config for `mode` with `rounds` rounds and the mode's default countdown.
pub fn config(mode: DifficultyMode, rounds: usize) -> GameConfig {
    GameConfig {
        total_rounds: rounds,
        ..GameConfig::for_mode(mode)
    }
}

/// Create a session with a fixed seed so targets are reproducible.
pub fn seeded_session(mode: DifficultyMode, rounds: usize) -> Session {
    Session::with_rng(config(mode, rounds), StdRng::seed_from_u64(42))
}

/// Tick the current round until the target is hidden.
pub fn reveal(session: &mut Session) {
    while session.phase() == Phase::Memorizing {
        let ticket = session.ticket();
        session.tick(ticket);
    }
}

/// Three-digit form of a color whose channels are doubled digits (e.g. `#FF8800` → `#F80`).
pub fn short_form(color: HexColor) -> String {
    let hex = color.as_hex();
    format!("#{}{}{}", &hex[1..2], &hex[3..4], &hex[5..6])
}
