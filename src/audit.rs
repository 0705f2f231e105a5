//! Cross-checks the two strategies against each other and against the
//! literal sequence layout

use log::{debug, warn};
use rand::{Rng, SeedableRng};

use crate::{
    rotation::{RotationError, Strategy, options},
    sequence::Allocation,
};

/// Audit parameters
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AuditOptions {
    /// Participant counts `1..=max_participants` are swept exhaustively
    pub max_participants: usize,
    /// Positions `1..=exhaustive_positions` are swept per participant count
    pub exhaustive_positions: u64,
    /// Number of random samples
    pub random_samples: usize,
    /// Upper bound for random positions
    pub max_random_position: u64,
    /// Upper bound for random participant counts
    pub max_random_participants: usize,
    /// Seed of the random generator
    pub seed: u64,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            max_participants: options::AUDIT_MAX_PARTICIPANTS,
            exhaustive_positions: options::AUDIT_EXHAUSTIVE_POSITIONS,
            random_samples: options::AUDIT_RANDOM_SAMPLES,
            max_random_position: options::AUDIT_MAX_RANDOM_POSITION,
            max_random_participants: options::AUDIT_MAX_RANDOM_PARTICIPANTS,
            seed: options::AUDIT_SEED,
        }
    }
}

/// Input on which the strategies (or the sequence layout) disagree
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Divergence {
    /// Position that was resolved
    pub position: u64,
    /// Number of participants
    pub participants: usize,
    /// Owner according to the sequence layout, if it was consulted
    pub expected: Option<usize>,
    /// Result of the round-synchronous strategy
    pub rounds: Result<usize, RotationError>,
    /// Result of the per-participant strategy
    pub turns: Result<usize, RotationError>,
}

/// Audit result
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AuditReport {
    /// Number of `(position, participants)` pairs compared
    pub checked: usize,
    pub divergences: Vec<Divergence>,
}

impl AuditReport {
    /// Whether no divergence was found
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.divergences.is_empty()
    }

    fn compare(&mut self, position: u64, participants: usize, expected: Option<usize>) {
        self.checked += 1;
        let rounds = Strategy::Rounds.owner_index(position, participants);
        let turns = Strategy::Turns.owner_index(position, participants);
        let agrees = rounds == turns && expected.is_none_or(|idx| rounds == Ok(idx));
        if !agrees {
            warn!(
                "strategies diverge at position {position} with {participants} participants: \
                 rounds {rounds:?}, turns {turns:?}, expected {expected:?}"
            );
            self.divergences.push(Divergence {
                position,
                participants,
                expected,
                rounds,
                turns,
            });
        }
    }
}

/// Run the exhaustive sweep followed by the random sweep
#[must_use]
pub fn cross_check(opts: &AuditOptions) -> AuditReport {
    let mut report = AuditReport::default();

    debug!(
        "exhaustive sweep: {} participants x {} positions",
        opts.max_participants, opts.exhaustive_positions
    );
    for participants in 1..=opts.max_participants {
        let limit = opts.exhaustive_positions;
        for slot in Allocation::new(participants).take_while(|s| s.position <= limit) {
            report.compare(slot.position, participants, Some(slot.participant));
        }
    }

    if opts.max_random_position >= 1 && opts.max_random_participants >= 1 {
        debug!("random sweep: {} samples, seed {}", opts.random_samples, opts.seed);
        let mut random_gen = rand::rngs::SmallRng::seed_from_u64(opts.seed);
        for _ in 0..opts.random_samples {
            let position = random_gen.random_range(1..=opts.max_random_position);
            let participants = random_gen.random_range(1..=opts.max_random_participants);
            report.compare(position, participants, None);
        }
    }

    report
}
