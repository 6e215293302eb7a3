//! Record id generation.
//!
//! Ids are epoch milliseconds. When the clock has not advanced past the last
//! issued id (two submissions in the same millisecond, or a clock step back)
//! the previous id plus one is issued instead.

use crate::model::book::BookId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of ids for newly created records.
pub trait IdGenerator {
    fn next_id(&mut self) -> BookId;
}

/// Wall-clock id source with a monotonic guard.
#[derive(Debug, Clone, Default)]
pub struct TimestampIdGenerator {
    last: Option<BookId>,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the id for a given clock reading.
    pub fn next_from(&mut self, now_ms: BookId) -> BookId {
        let id = match self.last {
            Some(last) if now_ms <= last => last.saturating_add(1),
            _ => now_ms,
        };
        self.last = Some(id);
        id
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> BookId {
        self.next_from(now_epoch_ms())
    }
}

fn now_epoch_ms() -> BookId {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| BookId::try_from(elapsed.as_millis()).unwrap_or(BookId::MAX))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, TimestampIdGenerator};

    #[test]
    fn same_millisecond_bumps_id() {
        let mut ids = TimestampIdGenerator::new();
        assert_eq!(ids.next_from(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(ids.next_from(1_700_000_000_000), 1_700_000_000_001);
        assert_eq!(ids.next_from(1_699_999_999_999), 1_700_000_000_002);
        assert_eq!(ids.next_from(1_700_000_000_500), 1_700_000_000_500);
    }

    #[test]
    fn clock_ids_are_strictly_increasing() {
        let mut ids = TimestampIdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert!(first > 0);
        assert!(second > first);
    }
}
