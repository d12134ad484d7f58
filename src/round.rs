//! One memorize → guess → score cycle against a single target color.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::color::{expand_short_form, DifficultyMode, HexColor};
use crate::error::{ColorFormatError, GuessError, InputRejection};
use crate::scoring::score;

/// Result of a finished round. Never mutated once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundRecord {
    target: HexColor,
    guess: HexColor,
    score: f64,
}

impl RoundRecord {
    pub(crate) fn new(target: HexColor, guess: HexColor) -> Self {
        Self {
            target,
            guess,
            score: score(&target, &guess),
        }
    }

    pub fn target(&self) -> HexColor {
        self.target
    }

    pub fn guess(&self) -> HexColor {
        self.guess
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Where a round is in its lifecycle. Transitions only move forward.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundState {
    Memorizing { remaining: u32 },
    Guessing { partial: String },
    Scored(RoundRecord),
}

/// Tag-only view of [`RoundState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Memorizing,
    Guessing,
    Scored,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Memorizing => write!(f, "memorizing"),
            Phase::Guessing => write!(f, "guessing"),
            Phase::Scored => write!(f, "scored"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still memorizing; this many ticks remain.
    Counting(u32),
    /// The countdown hit zero and the round moved to guessing.
    Revealed,
    /// The round was not counting down.
    Ignored,
    /// The tick belonged to a round that has since been replaced.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Accepted,
    /// Input arrived outside the guessing phase and was dropped.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Round {
    target: HexColor,
    mode: DifficultyMode,
    state: RoundState,
    signal: Option<InputRejection>,
}

impl Round {
    pub fn new(target: HexColor, mode: DifficultyMode, countdown_ticks: u32) -> Self {
        let state = if countdown_ticks == 0 {
            RoundState::Guessing {
                partial: "#".to_string(),
            }
        } else {
            RoundState::Memorizing {
                remaining: countdown_ticks,
            }
        };
        Self {
            target,
            mode,
            state,
            signal: None,
        }
    }

    pub fn target(&self) -> HexColor {
        self.target
    }

    pub fn mode(&self) -> DifficultyMode {
        self.mode
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            RoundState::Memorizing { .. } => Phase::Memorizing,
            RoundState::Guessing { .. } => Phase::Guessing,
            RoundState::Scored(_) => Phase::Scored,
        }
    }

    /// Ticks left before the target is hidden; 0 once guessing has started.
    pub fn time_remaining(&self) -> u32 {
        match self.state {
            RoundState::Memorizing { remaining } => remaining,
            _ => 0,
        }
    }

    /// The text typed so far, `#` included. `None` outside the guessing phase.
    pub fn partial(&self) -> Option<&str> {
        match &self.state {
            RoundState::Guessing { partial } => Some(partial),
            _ => None,
        }
    }

    pub fn record(&self) -> Option<&RoundRecord> {
        match &self.state {
            RoundState::Scored(record) => Some(record),
            _ => None,
        }
    }

    /// The most recent rejected edit, until an edit is accepted or it is cleared.
    pub fn signal(&self) -> Option<InputRejection> {
        self.signal
    }

    pub fn clear_signal(&mut self) {
        self.signal = None;
    }

    /// Advance the countdown by one unit.
    pub fn tick(&mut self) -> TickOutcome {
        let RoundState::Memorizing { remaining } = &mut self.state else {
            return TickOutcome::Ignored;
        };
        *remaining = remaining.saturating_sub(1);
        if *remaining > 0 {
            return TickOutcome::Counting(*remaining);
        }
        debug!(answer = %self.target, "countdown finished, hiding target");
        self.state = RoundState::Guessing {
            partial: "#".to_string(),
        };
        TickOutcome::Revealed
    }

    /// Append one typed character.
    pub fn push_char(&mut self, c: char) -> Result<EditOutcome, InputRejection> {
        let mode = self.mode;
        let RoundState::Guessing { partial } = &self.state else {
            return Ok(EditOutcome::Ignored);
        };
        let mut next = partial.clone();
        let checked = check_digit(mode, c).and_then(|d| {
            next.push(d);
            check_length(mode, &next)
        });
        self.apply(checked.map(|()| next))
    }

    /// Delete the last typed digit. The leading `#` is never removed.
    pub fn backspace(&mut self) -> EditOutcome {
        let RoundState::Guessing { partial } = &mut self.state else {
            return EditOutcome::Ignored;
        };
        if partial.len() > 1 {
            partial.pop();
        }
        self.signal = None;
        EditOutcome::Accepted
    }

    /// Replace the whole input, as a text field's change event would.
    ///
    /// A missing leading `#` is supplied and any `#` characters are dropped;
    /// when the text already starts with `#`, later ones count as invalid.
    pub fn set_input(&mut self, text: &str) -> Result<EditOutcome, InputRejection> {
        if self.phase() != Phase::Guessing {
            return Ok(EditOutcome::Ignored);
        }
        let body: String = match text.strip_prefix('#') {
            Some(rest) => rest.to_string(),
            None => text.chars().filter(|&c| c != '#').collect(),
        };
        let normalized = normalize(self.mode, &body);
        self.apply(normalized)
    }

    /// The color the current input would submit as.
    pub fn preview(&self) -> Option<HexColor> {
        self.partial()
            .and_then(|partial| effective_guess(self.mode, partial).ok())
    }

    /// Score the current input and finish the round.
    pub fn submit(&mut self) -> Result<RoundRecord, GuessError> {
        let Some(partial) = self.partial() else {
            return Err(InputRejection::NotAccepting.into());
        };
        let guess = effective_guess(self.mode, partial)?;
        let record = RoundRecord::new(self.target, guess);
        info!(
            answer = %record.target(),
            guess = %record.guess(),
            score = record.score(),
            "round scored"
        );
        self.state = RoundState::Scored(record);
        self.signal = None;
        Ok(record)
    }

    fn apply(&mut self, next: Result<String, InputRejection>) -> Result<EditOutcome, InputRejection> {
        match next {
            Ok(partial) => {
                self.state = RoundState::Guessing { partial };
                self.signal = None;
                Ok(EditOutcome::Accepted)
            }
            Err(rejection) => {
                debug!(%rejection, "input edit rejected");
                self.signal = Some(rejection);
                Err(rejection)
            }
        }
    }
}

fn check_digit(mode: DifficultyMode, c: char) -> Result<char, InputRejection> {
    let upper = c.to_ascii_uppercase();
    if !upper.is_ascii_hexdigit() {
        return Err(InputRejection::InvalidCharacter(c));
    }
    if !mode.allows_digit(upper) {
        return Err(InputRejection::OutsidePalette(upper));
    }
    Ok(upper)
}

fn check_length(mode: DifficultyMode, partial: &str) -> Result<(), InputRejection> {
    let max = mode.max_input_length();
    if partial.chars().count() > max {
        return Err(InputRejection::TooLong { max });
    }
    Ok(())
}

/// Validate the characters after `#` and rebuild the canonical partial.
fn normalize(mode: DifficultyMode, body: &str) -> Result<String, InputRejection> {
    let mut partial = String::with_capacity(mode.max_input_length());
    partial.push('#');
    for c in body.chars() {
        partial.push(check_digit(mode, c)?);
    }
    check_length(mode, &partial)?;
    Ok(partial)
}

/// Turn a partial input into a full color, zero-padding missing digits.
///
/// Standard input of exactly three digits is read as short form; constrained
/// input is always short form.
pub fn effective_guess(mode: DifficultyMode, partial: &str) -> Result<HexColor, ColorFormatError> {
    let digits = partial.strip_prefix('#').unwrap_or(partial);
    let text = match mode {
        DifficultyMode::Standard if digits.len() == 3 => format!("#{digits}"),
        DifficultyMode::Standard => format!("#{digits:0<6}"),
        DifficultyMode::Constrained => format!("#{digits:0<3}"),
    };
    expand_short_form(&text)
}
