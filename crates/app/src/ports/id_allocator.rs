//! Id allocator port — source of record identifiers.

use std::sync::Arc;

use invoicer_domain::error::BillingError;
use invoicer_domain::id::RecordId;

/// Hands out record identifiers.
///
/// Implementations must return ids that are unique and strictly increasing
/// in call order, even when called from several threads. An allocator that
/// runs out of ids must fail rather than wrap around.
pub trait RecordIdAllocator {
    /// Reserve and return the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::IdsExhausted`] once no further id can be handed out.
    fn next_id(&self) -> Result<RecordId, BillingError>;
}

impl<T: RecordIdAllocator + ?Sized> RecordIdAllocator for Arc<T> {
    fn next_id(&self) -> Result<RecordId, BillingError> {
        (**self).next_id()
    }
}

impl<T: RecordIdAllocator + ?Sized> RecordIdAllocator for &T {
    fn next_id(&self) -> Result<RecordId, BillingError> {
        (**self).next_id()
    }
}
