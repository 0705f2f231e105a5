//! Round-synchronous strategy
//!
//! All participants share one batch size per round, so whole rounds can be
//! skipped at once and the owner falls out of a single division.
//! `O(log(position / participants))` iterations.

use log::debug;

use crate::{
    helper::{grow_batch, u64_to_usize},
    rotation::{RotationError, check_arguments, options::INITIAL_BATCH_SIZE},
};

/// Index of the participant owning `position`
pub fn owner_index(position: u64, num_participants: usize) -> Result<usize, RotationError> {
    let length = check_arguments(position, num_participants)?;
    let overflow = || RotationError::Overflow {
        position,
        participants: num_participants,
    };

    let mut remaining = position;
    let mut batch = INITIAL_BATCH_SIZE;
    let mut round = 0u32;
    loop {
        match batch.checked_mul(length) {
            Some(round_len) if remaining > round_len => remaining -= round_len,
            // A round longer than `u64::MAX` always contains `remaining`
            _ => break,
        }
        batch = grow_batch(batch).ok_or_else(overflow)?;
        round += 1;
    }
    debug_assert!(remaining >= 1);

    debug!("position {position} lies in round {round} (batch size {batch})");
    u64_to_usize((remaining - 1) / batch).ok_or_else(overflow)
}
