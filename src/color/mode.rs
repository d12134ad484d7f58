use std::fmt;

use serde::Deserialize;

/// Channel bytes a constrained color may use.
pub const PALETTE_BYTES: [u8; 3] = [0x00, 0x88, 0xFF];

/// Digits a player may type in constrained mode; each doubles into a palette byte.
pub const PALETTE_DIGITS: [char; 3] = ['0', '8', 'F'];

/// Difficulty setting: which colors can be drawn and what the player may type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyMode {
    /// Full 24-bit color space, six free hex digits.
    #[default]
    Standard,
    /// Channels limited to 00/88/FF, three digits from {0, 8, F}.
    Constrained,
}

impl DifficultyMode {
    /// Hex digits the player types, not counting the leading `#`.
    pub fn digits(self) -> usize {
        match self {
            DifficultyMode::Standard => 6,
            DifficultyMode::Constrained => 3,
        }
    }

    /// Longest accepted input, `#` included.
    pub fn max_input_length(self) -> usize {
        self.digits() + 1
    }

    /// Whether `c` (already uppercased) is a digit this mode accepts.
    pub fn allows_digit(self, c: char) -> bool {
        match self {
            DifficultyMode::Standard => c.is_ascii_hexdigit(),
            DifficultyMode::Constrained => PALETTE_DIGITS.contains(&c),
        }
    }
}

impl fmt::Display for DifficultyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyMode::Standard => write!(f, "standard"),
            DifficultyMode::Constrained => write!(f, "constrained"),
        }
    }
}
