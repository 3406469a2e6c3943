/// Reason a puzzle was rejected by [`crate::Checker`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("puzzle doesn't demonstrate the required amount of work")]
    InsufficientWork,
    #[error("malformed puzzle")]
    MalformedPuzzle,
    #[error("invalid puzzle timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
    #[error("puzzle timestamp is too old")]
    PuzzleExpired,
    #[error("puzzle timestamp is too far in the future")]
    PuzzleNotYetValid,
}

/// Payload-free discriminant of [`CheckError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckErrorKind {
    InsufficientWork,
    MalformedPuzzle,
    InvalidTimestamp,
    PuzzleExpired,
    PuzzleNotYetValid,
}

impl CheckError {
    pub fn kind(&self) -> CheckErrorKind {
        match self {
            CheckError::InsufficientWork => CheckErrorKind::InsufficientWork,
            CheckError::MalformedPuzzle => CheckErrorKind::MalformedPuzzle,
            CheckError::InvalidTimestamp(_) => CheckErrorKind::InvalidTimestamp,
            CheckError::PuzzleExpired => CheckErrorKind::PuzzleExpired,
            CheckError::PuzzleNotYetValid => CheckErrorKind::PuzzleNotYetValid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
