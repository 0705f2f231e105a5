/// Grow a batch size by [`BATCH_GROWTH_FACTOR`]; `None` on overflow
///
/// [`BATCH_GROWTH_FACTOR`]: crate::rotation::options::BATCH_GROWTH_FACTOR
pub fn grow_batch(batch: u64) -> Option<u64> {
    batch.checked_mul(crate::rotation::options::BATCH_GROWTH_FACTOR)
}

/// Widen `usize` to `u64`; `None` only on exotic targets
pub fn usize_to_u64(x: usize) -> Option<u64> {
    u64::try_from(x).ok()
}

/// Narrow `u64` to `usize`; `None` if it does not fit
pub fn u64_to_usize(x: u64) -> Option<usize> {
    usize::try_from(x).ok()
}
