use crate::helper::usize_to_u64;

mod error;
pub mod options;
pub mod rounds;
pub mod turns;

pub use error::{ErrorKind, RotationError};

/// Algorithm used to resolve a position to its owner
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strategy {
    /// Synchronized rounds; every participant shares one batch size per round
    Rounds,
    /// One batch size per participant, doubled after each of its turns
    Turns,
}

impl Strategy {
    /// Strategy used by [`who_is_next`]
    pub const CANONICAL: Self = Self::Turns;
    /// All strategies
    pub const ALL: [Self; 2] = [Self::Rounds, Self::Turns];

    /// Index of the participant owning the 1-based `position`
    pub fn owner_index(
        self,
        position: u64,
        num_participants: usize,
    ) -> Result<usize, RotationError> {
        match self {
            Self::Rounds => rounds::owner_index(position, num_participants),
            Self::Turns => turns::owner_index(position, num_participants),
        }
    }

    /// Short name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rounds => "rounds",
            Self::Turns => "turns",
        }
    }
}

/// Validate a position and participant count; returns the count as `u64`
pub(crate) fn check_arguments(
    position: u64,
    num_participants: usize,
) -> Result<u64, RotationError> {
    if position == 0 {
        return Err(RotationError::InvalidPosition(0));
    }
    if num_participants == 0 {
        return Err(RotationError::NoParticipants);
    }
    usize_to_u64(num_participants).ok_or(RotationError::Overflow {
        position,
        participants: num_participants,
    })
}

/// Participant receiving the `n`-th item
///
/// Round `r` hands every participant `2^r` consecutive items, in order.
/// Fails with an invalid argument error for `n < 1` or no participants.
pub fn who_is_next<T>(n: i64, participants: &[T]) -> Result<&T, RotationError> {
    who_is_next_with(Strategy::CANONICAL, n, participants)
}

/// [`who_is_next`] with an explicit strategy
pub fn who_is_next_with<T>(
    strategy: Strategy,
    n: i64,
    participants: &[T],
) -> Result<&T, RotationError> {
    let position = u64::try_from(n)
        .ok()
        .filter(|&p| p >= 1)
        .ok_or(RotationError::InvalidPosition(n))?;
    let idx = strategy.owner_index(position, participants.len())?;
    Ok(&participants[idx])
}

/// Last position of round `round` (0-based), i.e. `L * (2^(round + 1) - 1)`
///
/// `None` for zero participants or when the boundary does not fit in `u64`.
#[must_use]
pub fn round_boundary(round: u32, num_participants: usize) -> Option<u64> {
    if num_participants == 0 {
        return None;
    }
    let per_participant = match round {
        0..=62 => (1u64 << (round + 1)) - 1,
        63 => u64::MAX,
        _ => return None,
    };
    per_participant.checked_mul(usize_to_u64(num_participants)?)
}
