//! Error types shared across the game core.

/// A string reached a path that requires a valid `#RGB` / `#RRGGBB` color.
///
/// Callers are expected to validate input before scoring or converting it, so
/// seeing this means a validation step upstream was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed color {input:?}: expected '#' followed by 3 or 6 hex digits")]
pub struct ColorFormatError {
    pub input: String,
}

impl ColorFormatError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Why an input edit was refused. The partial guess is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputRejection {
    #[error("round is not accepting input")]
    NotAccepting,
    #[error("'{0}' is not a hex digit")]
    InvalidCharacter(char),
    #[error("'{0}' is outside the 0/8/F palette")]
    OutsidePalette(char),
    #[error("input is limited to {max} characters")]
    TooLong { max: usize },
}

/// Why a guess could not be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error(transparent)]
    Rejected(#[from] InputRejection),
    #[error(transparent)]
    Malformed(#[from] ColorFormatError),
}

/// Session-level misuse, e.g. advancing while a round is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("current round has not been scored yet")]
    RoundInProgress,
    #[error("session is already finished")]
    Finished,
    #[error("current round was already scored; advance past it instead")]
    AlreadyScored,
}

/// Errors when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
