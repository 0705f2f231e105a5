/// Batch size every participant starts with
pub const INITIAL_BATCH_SIZE: u64 = 1;
/// Factor a batch grows by once its turn completes
pub const BATCH_GROWTH_FACTOR: u64 = 2;
/// Largest participant count swept exhaustively by the audit
pub const AUDIT_MAX_PARTICIPANTS: usize = 12;
/// Positions `1..=n` swept exhaustively per participant count
pub const AUDIT_EXHAUSTIVE_POSITIONS: u64 = 4096;
/// Number of random `(position, participants)` pairs drawn by the audit
pub const AUDIT_RANDOM_SAMPLES: usize = 2_000;
/// Upper bound for randomly drawn positions; keeps the
/// per-participant simulation clear of `u64` overflow
pub const AUDIT_MAX_RANDOM_POSITION: u64 = 1 << 48;
/// Largest participant count for randomly drawn samples
pub const AUDIT_MAX_RANDOM_PARTICIPANTS: usize = 256;
/// Seed for the audit's random generator
pub const AUDIT_SEED: u64 = 42;
