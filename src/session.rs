//! Session orchestration: a fixed number of rounds played back to back.
//!
//! The session owns the current [`Round`] and the append-only history of
//! finished rounds. Countdown ticks are routed through a [`Ticket`] so that a
//! tick scheduled for a round that has since been advanced past or restarted
//! is dropped instead of touching the new round.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::color::{generate_random_color, DifficultyMode, HexColor};
use crate::config::GameConfig;
use crate::error::{GuessError, InputRejection, SessionError};
use crate::round::{EditOutcome, Phase, Round, RoundRecord, TickOutcome};
use crate::scoring::{round_half_away, Verdict, MAX_ROUND_SCORE};

/// Identifies the round a countdown tick was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
    round_number: usize,
}

/// A scored round, as returned to the caller that submitted it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    pub record: RoundRecord,
    pub verdict: Verdict,
    pub round_number: usize,
    pub total_rounds: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextRoundView {
    pub round_number: usize,
    pub total_rounds: usize,
    pub countdown_ticks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub final_score: f64,
    pub max_score: f64,
    pub history: Vec<RoundRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    NextRound(NextRoundView),
    Finished(SessionSummary),
}

pub struct Session {
    config: GameConfig,
    rng: StdRng,
    epoch: u64,
    round_number: usize,
    history: Vec<RoundRecord>,
    round: Round,
    finished: bool,
}

impl Session {
    /// Start a session with an entropy-seeded RNG.
    pub fn start(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Start a session drawing targets from `rng`.
    ///
    /// A session always has at least one round; `total_rounds: 0` is raised to 1.
    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        if config.total_rounds == 0 {
            warn!("total_rounds is 0, playing a single round");
        }
        let config = GameConfig {
            total_rounds: config.total_rounds.max(1),
            ..config
        };
        let round = Round::new(
            generate_random_color(config.mode, &mut rng),
            config.mode,
            config.countdown_ticks,
        );
        info!(mode = %config.mode, rounds = config.total_rounds, "session started");
        Self {
            config,
            rng,
            epoch: 0,
            round_number: 1,
            history: Vec::new(),
            round,
            finished: false,
        }
    }

    /// Throw away all progress and begin again from round 1.
    pub fn restart(&mut self) {
        self.epoch += 1;
        self.round_number = 1;
        self.history.clear();
        self.finished = false;
        self.round = self.fresh_round();
        info!(epoch = self.epoch, "session restarted");
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> DifficultyMode {
        self.round.mode()
    }

    /// 1-based index of the round being played (or last played, once finished).
    pub fn round_number(&self) -> usize {
        self.round_number
    }

    pub fn total_rounds(&self) -> usize {
        self.config.total_rounds
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn time_remaining(&self) -> u32 {
        self.round.time_remaining()
    }

    pub fn target(&self) -> HexColor {
        self.round.target()
    }

    pub fn partial_input(&self) -> Option<&str> {
        self.round.partial()
    }

    pub fn preview(&self) -> Option<HexColor> {
        self.round.preview()
    }

    pub fn current_record(&self) -> Option<&RoundRecord> {
        self.round.record()
    }

    pub fn signal(&self) -> Option<InputRejection> {
        self.round.signal()
    }

    pub fn clear_signal(&mut self) {
        self.round.clear_signal();
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Sum of all recorded round scores.
    pub fn final_score(&self) -> f64 {
        round_half_away(self.history.iter().map(RoundRecord::score).sum(), 2)
    }

    pub fn max_score(&self) -> f64 {
        self.config.total_rounds as f64 * MAX_ROUND_SCORE
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            final_score: self.final_score(),
            max_score: self.max_score(),
            history: self.history.clone(),
        }
    }

    /// Ticket for the round currently being played.
    pub fn ticket(&self) -> Ticket {
        Ticket {
            epoch: self.epoch,
            round_number: self.round_number,
        }
    }

    /// Deliver one countdown tick scheduled under `ticket`.
    pub fn tick(&mut self, ticket: Ticket) -> TickOutcome {
        if ticket != self.ticket() {
            debug!(?ticket, current = ?self.ticket(), "dropping stale tick");
            return TickOutcome::Stale;
        }
        self.round.tick()
    }

    pub fn push_char(&mut self, c: char) -> Result<EditOutcome, InputRejection> {
        self.round.push_char(c)
    }

    pub fn backspace(&mut self) -> EditOutcome {
        self.round.backspace()
    }

    pub fn set_input(&mut self, text: &str) -> Result<EditOutcome, InputRejection> {
        self.round.set_input(text)
    }

    /// Submit whatever has been typed so far.
    pub fn submit(&mut self) -> Result<RoundOutcome, GuessError> {
        let record = self.round.submit()?;
        Ok(RoundOutcome {
            record,
            verdict: Verdict::from_score(record.score()),
            round_number: self.round_number,
            total_rounds: self.config.total_rounds,
        })
    }

    /// Replace the input with `text` and submit it in one step.
    pub fn submit_guess(&mut self, text: &str) -> Result<RoundOutcome, GuessError> {
        if self.round.phase() != Phase::Guessing {
            return Err(InputRejection::NotAccepting.into());
        }
        self.round.set_input(text)?;
        self.submit()
    }

    /// Move past a scored round: record it, then start the next round or finish.
    pub fn advance_round(&mut self) -> Result<Advance, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        let record = *self.round.record().ok_or(SessionError::RoundInProgress)?;
        Ok(self.finish_round(record))
    }

    /// Record `guess` against the current target without going through input
    /// collection, then start the next round or finish.
    ///
    /// A round that was already scored through [`Session::submit`] must be
    /// moved past with [`Session::advance_round`] instead.
    pub fn complete_round(&mut self, guess: HexColor) -> Result<Advance, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if self.round.phase() == Phase::Scored {
            return Err(SessionError::AlreadyScored);
        }
        let record = RoundRecord::new(self.round.target(), guess);
        Ok(self.finish_round(record))
    }

    fn finish_round(&mut self, record: RoundRecord) -> Advance {
        self.history.push(record);

        if self.round_number < self.config.total_rounds {
            self.round_number += 1;
            self.round = self.fresh_round();
            debug!(round = self.round_number, "next round");
            return Advance::NextRound(NextRoundView {
                round_number: self.round_number,
                total_rounds: self.config.total_rounds,
                countdown_ticks: self.config.countdown_ticks,
            });
        }

        self.finished = true;
        let summary = self.summary();
        info!(
            final_score = summary.final_score,
            max_score = summary.max_score,
            "session finished"
        );
        Advance::Finished(summary)
    }

    fn fresh_round(&mut self) -> Round {
        Round::new(
            generate_random_color(self.config.mode, &mut self.rng),
            self.config.mode,
            self.config.countdown_ticks,
        )
    }
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;
