//! Per-entity id sequences.
//!
//! Every registry gets its own [`IdSequence`] injected at construction, so two
//! registries never share a counter and tests can start from a known state.
//! Ids are never reused after deletion.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing counter handed out as decimal strings.
///
/// The increment is atomic so a multi-threaded host can call `next` without
/// extra locking, even though the registries themselves expect a coarse
/// per-registry lock in that setting.
#[derive(Debug, Default)]
pub struct IdSequence(AtomicU64);

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id in sequence. The first call returns `"1"`.
    pub fn next(&self) -> String {
        (self.0.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }

    /// Advance the counter so future ids are strictly greater than `n`.
    /// Used when seeding entities that carry ids assigned outside the
    /// sequence, so generated ids never collide with seeded ones.
    pub fn bump_past(&self, n: u64) {
        self.0.fetch_max(n, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_decimal_strings() {
        let seq = IdSequence::new();
        assert_eq!(seq.next(), "1");
        assert_eq!(seq.next(), "2");
        assert_eq!(seq.next(), "3");
    }

    #[test]
    fn bump_past_skips_seeded_range() {
        let seq = IdSequence::new();
        seq.bump_past(41);
        assert_eq!(seq.next(), "42");
    }

    #[test]
    fn bump_past_never_moves_backwards() {
        let seq = IdSequence::new();
        seq.bump_past(10);
        seq.bump_past(3);
        assert_eq!(seq.next(), "11");
    }
}
