//! Per-participant strategy
//!
//! Walks the rotation one turn at a time. Each participant keeps its own
//! batch size, which doubles only when that participant's turn completes.

use log::{debug, trace};

use crate::{
    helper::grow_batch,
    rotation::{RotationError, check_arguments, options::INITIAL_BATCH_SIZE},
};

/// Index of the participant owning `position`
///
/// Memory grows with the number of participants actually visited, at most
/// `min(num_participants, turns + 1)` entries.
pub fn owner_index(position: u64, num_participants: usize) -> Result<usize, RotationError> {
    check_arguments(position, num_participants)?;

    // Batch size per participant, scoped to this call; an entry is added the
    // first time the head reaches that participant
    let mut batches: Vec<u64> = Vec::new();
    let mut head = 0;
    let mut remaining = position;
    let mut turns = 0u64;

    loop {
        if head == batches.len() {
            batches.push(INITIAL_BATCH_SIZE);
        }
        let batch = batches[head];
        if remaining <= batch {
            debug!("position {position} resolved to participant {head} after {turns} turns");
            return Ok(head);
        }
        remaining -= batch;
        batches[head] = grow_batch(batch).ok_or(RotationError::Overflow {
            position,
            participants: num_participants,
        })?;
        trace!("participant {head} consumed {batch}, {remaining} left");

        head = (head + 1) % num_participants;
        turns += 1;
    }
}
