//! Invoice — an immutable fee snapshot derived from a service record.

use serde::{Deserialize, Serialize};

use crate::fee::FeeRule;
use crate::id::RecordId;
use crate::service_record::ServiceRecord;

/// Fees owed for one [`ServiceRecord`], captured at build time.
///
/// Only the record id is kept; the invoice holds no reference back to the
/// record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub record_id: RecordId,
    pub callout_fee: u64,
    pub service_fee: u64,
    pub hours: u32,
}

impl Invoice {
    /// Price `record` according to `rule`.
    #[must_use]
    pub fn for_record(record: &ServiceRecord, rule: &FeeRule) -> Self {
        Self {
            record_id: record.id(),
            callout_fee: rule.callout_fee,
            service_fee: rule.service_fee(record.hours()),
            hours: record.hours(),
        }
    }

    /// Callout fee plus service fee.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.callout_fee.saturating_add(self.service_fee)
    }
}
