use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::GameConfig;
use crate::round::{Phase, TickOutcome};
use crate::session::{Advance, Session, Ticket};

/// UI ticks a rejected keystroke keeps the input shaking.
pub const SHAKE_TICKS: u8 = 3;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
    Results,
}

pub struct App {
    pub config: GameConfig,
    pub screen: Screen,
    pub session: Option<Session>,
    pub should_quit: bool,

    // Remaining UI ticks of the invalid-input cue.
    pub shake: u8,

    // Countdown bookkeeping: the round the clock is running for, and time
    // accumulated toward its next unit.
    countdown: Option<Ticket>,
    elapsed: Duration,

    seed: Option<u64>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            screen: Screen::Start,
            session: None,
            should_quit: false,
            shake: 0,
            countdown: None,
            elapsed: Duration::ZERO,
            seed: None,
        }
    }

    /// Like [`App::new`] but targets come from a seeded RNG.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(config)
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Start => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.start_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Playing => self.handle_playing_key(key),
            Screen::Results => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => self.start_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.phase() {
            Phase::Memorizing => {}
            Phase::Guessing => match key.code {
                KeyCode::Char(c) => {
                    if session.push_char(c).is_err() {
                        self.shake = SHAKE_TICKS;
                    }
                }
                KeyCode::Backspace => {
                    session.backspace();
                }
                KeyCode::Enter => {
                    if session.submit().is_err() {
                        self.shake = SHAKE_TICKS;
                    }
                }
                _ => {}
            },
            Phase::Scored => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right => self.advance(),
                _ => {}
            },
        }
    }

    fn advance(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.advance_round() {
            Ok(Advance::NextRound(view)) => {
                debug!(round = view.round_number, "advanced");
                self.arm_countdown();
            }
            Ok(Advance::Finished(_)) => {
                self.countdown = None;
                self.screen = Screen::Results;
            }
            Err(e) => debug!(error = %e, "advance ignored"),
        }
    }

    /// Start a new session, or restart the existing one for a replay.
    fn start_game(&mut self) {
        match self.session.as_mut() {
            Some(session) => session.restart(),
            None => {
                let rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                self.session = Some(Session::with_rng(self.config, rng));
            }
        }
        self.screen = Screen::Playing;
        self.shake = 0;
        self.arm_countdown();
    }

    fn arm_countdown(&mut self) {
        self.countdown = self.session.as_ref().map(Session::ticket);
        self.elapsed = Duration::ZERO;
    }

    /// Advance UI timers by `dt`: the shake cue and the memorize countdown.
    pub fn on_tick(&mut self, dt: Duration) {
        if self.shake > 0 {
            self.shake -= 1;
            if self.shake == 0 {
                if let Some(session) = self.session.as_mut() {
                    session.clear_signal();
                }
            }
        }

        let (Some(ticket), Some(session)) = (self.countdown, self.session.as_mut()) else {
            return;
        };

        let interval = self.config.tick_interval();
        self.elapsed += dt;
        while self.elapsed >= interval {
            self.elapsed -= interval;
            match session.tick(ticket) {
                TickOutcome::Counting(_) => {}
                TickOutcome::Revealed | TickOutcome::Ignored | TickOutcome::Stale => {
                    self.countdown = None;
                    self.elapsed = Duration::ZERO;
                    break;
                }
            }
        }
    }

    /// Seconds-style countdown for display, if the target is showing.
    pub fn time_remaining(&self) -> Option<u32> {
        let session = self.session.as_ref()?;
        (session.phase() == Phase::Memorizing).then(|| session.time_remaining())
    }
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;
