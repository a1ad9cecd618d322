//! In-process record id allocator backed by an atomic counter.

use std::sync::atomic::{AtomicU64, Ordering};

use invoicer_domain::error::BillingError;
use invoicer_domain::id::RecordId;

use crate::ports::RecordIdAllocator;

/// Sequential allocator: `0, 1, 2, …` unless started elsewhere.
///
/// Safe to share between threads; every call observes a distinct value.
/// `u64::MAX` is never handed out: once the counter reaches it, every further
/// call fails with [`BillingError::IdsExhausted`].
#[derive(Debug, Default)]
pub struct SequentialIdAllocator {
    next: AtomicU64,
}

impl SequentialIdAllocator {
    /// Allocator whose first id is [`RecordId::FIRST`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator whose first id is `first`.
    #[must_use]
    pub fn starting_at(first: RecordId) -> Self {
        Self {
            next: AtomicU64::new(first.value()),
        }
    }

    /// The id the next call to [`next_id`](RecordIdAllocator::next_id) returns,
    /// without reserving it.
    #[must_use]
    pub fn peek(&self) -> RecordId {
        RecordId::new(self.next.load(Ordering::Relaxed))
    }
}

impl RecordIdAllocator for SequentialIdAllocator {
    fn next_id(&self) -> Result<RecordId, BillingError> {
        let current = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map_err(|_| {
                tracing::warn!("record id space exhausted");
                BillingError::IdsExhausted
            })?;
        let id = RecordId::new(current);
        tracing::trace!(record_id = %id, "allocated record id");
        Ok(id)
    }
}
