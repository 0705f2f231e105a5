//! Literal layout of the allocation sequence, one slot at a time

use std::iter::FusedIterator;

use crate::{helper::grow_batch, rotation::options::INITIAL_BATCH_SIZE};

/// One position of the sequence and its owner
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Slot {
    /// 1-based position
    pub position: u64,
    /// 0-based round the position belongs to
    pub round: u32,
    /// Index of the owning participant
    pub participant: usize,
}

/// Iterator over the allocation sequence for a fixed number of participants
///
/// Stops once the next position or batch size would leave `u64`.
/// Yields nothing for zero participants.
#[derive(Clone, Debug)]
pub struct Allocation {
    num_participants: usize,
    round: u32,
    participant: usize,
    /// Batch size of the current round
    batch: u64,
    /// Slots already handed out from the current batch
    offset: u64,
    next_position: Option<u64>,
}

impl Allocation {
    /// Start the sequence at position 1
    #[must_use]
    pub const fn new(num_participants: usize) -> Self {
        Self {
            num_participants,
            round: 0,
            participant: 0,
            batch: INITIAL_BATCH_SIZE,
            offset: 0,
            next_position: if num_participants == 0 { None } else { Some(1) },
        }
    }

    /// Batch size of the round the next slot belongs to
    #[must_use]
    pub const fn batch_size(&self) -> u64 {
        self.batch
    }
}

impl Iterator for Allocation {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let position = self.next_position?;
        let slot = Slot {
            position,
            round: self.round,
            participant: self.participant,
        };

        let mut exhausted = false;
        self.offset += 1;
        if self.offset == self.batch {
            self.offset = 0;
            self.participant += 1;
            if self.participant == self.num_participants {
                self.participant = 0;
                self.round += 1;
                match grow_batch(self.batch) {
                    Some(batch) => self.batch = batch,
                    None => exhausted = true,
                }
            }
        }
        self.next_position = if exhausted {
            None
        } else {
            position.checked_add(1)
        };

        Some(slot)
    }
}

impl FusedIterator for Allocation {}
