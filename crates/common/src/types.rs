use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier of an identifier-bearing entity.
///
/// All entity kinds draw from the same [`IdSequence`], so an id is unique
/// across customers, products, orders and everything else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates an entity ID from a raw value.
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

static GLOBAL_SEQUENCE: IdSequence = IdSequence::new();

/// Monotonic source of [`EntityId`]s.
///
/// Ids start at 1 and are never handed out twice. Constructors take the
/// sequence by reference so tests can run against their own instance while
/// application code shares [`IdSequence::global`].
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Creates a sequence whose first id is 1.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the process-wide sequence.
    pub fn global() -> &'static IdSequence {
        &GLOBAL_SEQUENCE
    }

    /// Allocates the next id.
    pub fn next_id(&self) -> EntityId {
        EntityId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the id the next call to [`next_id`](Self::next_id) will allocate.
    pub fn peek(&self) -> EntityId {
        EntityId(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn sequence_starts_at_one() {
        let ids = IdSequence::new();
        assert_eq!(ids.peek(), EntityId::from_u64(1));
        assert_eq!(ids.next_id(), EntityId::from_u64(1));
        assert_eq!(ids.next_id(), EntityId::from_u64(2));
        assert_eq!(ids.peek(), EntityId::from_u64(3));
    }

    #[test]
    fn sequences_are_independent() {
        let a = IdSequence::new();
        let b = IdSequence::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id().as_u64(), 1);
    }

    #[test]
    fn global_sequence_is_strictly_increasing() {
        let first = IdSequence::global().next_id();
        let second = IdSequence::global().next_id();
        assert!(second > first);
    }

    #[test]
    fn concurrent_allocation_never_repeats() {
        let ids = Arc::new(IdSequence::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<EntityId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();

        assert_eq!(all.len(), 1000);
        assert_eq!(ids.peek().as_u64(), 1001);
    }

    #[test]
    fn entity_id_display_is_bare_number() {
        assert_eq!(EntityId::from_u64(42).to_string(), "42");
    }

    #[test]
    fn entity_id_serialization_roundtrip() {
        let id = EntityId::from_u64(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
