//! Service record — one billable service event.

use std::cmp::Ordering;

use serde::Serialize;

use crate::fee::FeeRule;
use crate::id::RecordId;
use crate::invoice::Invoice;
use crate::service_type::ServiceType;

/// One billable service event: how long it took and how it is billed.
///
/// A record starts uninvoiced. Building an invoice attaches a snapshot;
/// rebuilding replaces it, and there is no way back to the uninvoiced state.
///
/// Records deliberately implement neither `PartialEq` nor `Ord`. Two records
/// are never considered equal, yet they sort by id through
/// [`cmp_by_id`](Self::cmp_by_id), so that ordering is not consistent with
/// any equality notion.
///
/// Records are neither `Clone` nor `Deserialize`, so every live record comes
/// from [`new`](Self::new) with an id handed out by an allocator.
#[derive(Debug, Serialize)]
pub struct ServiceRecord {
    id: RecordId,
    service_type: ServiceType,
    hours: u32,
    invoice: Option<Invoice>,
}

impl ServiceRecord {
    /// Create an uninvoiced record. Ids are expected to come from an allocator.
    #[must_use]
    pub fn new(id: RecordId, service_type: ServiceType, hours: u32) -> Self {
        Self {
            id,
            service_type,
            hours,
            invoice: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    #[must_use]
    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    #[must_use]
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// The most recently built invoice, if any.
    #[must_use]
    pub fn invoice(&self) -> Option<&Invoice> {
        self.invoice.as_ref()
    }

    #[must_use]
    pub fn is_invoiced(&self) -> bool {
        self.invoice.is_some()
    }

    /// Price this record with `rule`, attach the invoice, and return a copy.
    ///
    /// Any earlier invoice is replaced.
    pub fn build_invoice(&mut self, rule: &FeeRule) -> Invoice {
        let invoice = Invoice::for_record(self, rule);
        self.invoice = Some(invoice);
        invoice
    }

    /// Compare two records by ascending id.
    #[must_use]
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// Sort `records` in ascending id order.
pub fn sort_by_id(records: &mut [ServiceRecord]) {
    records.sort_by(ServiceRecord::cmp_by_id);
}
