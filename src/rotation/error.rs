use thiserror::Error;

/// Coarse classification of a [`RotationError`]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// Caller passed a position below 1 or no participants
    InvalidArgument,
    /// Batch arithmetic left the range of `u64`
    Overflow,
}

/// Errors surfaced while resolving the owner of a position
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum RotationError {
    #[error("position must be at least 1, got {0}")]
    InvalidPosition(i64),
    #[error("at least one participant is required")]
    NoParticipants,
    #[error("batch sizes overflow u64 resolving position {position} among {participants} participants")]
    Overflow { position: u64, participants: usize },
}

impl RotationError {
    /// Error kind
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidPosition(_) | Self::NoParticipants => ErrorKind::InvalidArgument,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}
