//! Service record catalog — use-cases for creating, pricing, and invoicing
//! service records.

use invoicer_domain::error::BillingError;
use invoicer_domain::fee::{FeeRule, FeeSchedule};
use invoicer_domain::invoice::Invoice;
use invoicer_domain::service_record::ServiceRecord;
use invoicer_domain::service_type::ServiceType;

use crate::id_allocator::SequentialIdAllocator;
use crate::ports::RecordIdAllocator;

/// Application service owning record creation, fee rules, and invoice assembly.
pub struct ServiceRecordCatalog<A> {
    allocator: A,
    schedule: FeeSchedule,
}

impl ServiceRecordCatalog<SequentialIdAllocator> {
    /// Catalog with a fresh sequential allocator and the standard fee schedule.
    #[must_use]
    pub fn with_default_schedule() -> Self {
        Self::new(SequentialIdAllocator::new(), FeeSchedule::default())
    }
}

impl<A: RecordIdAllocator> ServiceRecordCatalog<A> {
    /// Create a new catalog backed by the given allocator and fee schedule.
    pub fn new(allocator: A, schedule: FeeSchedule) -> Self {
        Self {
            allocator,
            schedule,
        }
    }

    #[must_use]
    pub fn fee_schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Create an uninvoiced record with the next identifier.
    ///
    /// No identifier is consumed when the call fails.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnsupportedVariant`] if the fee schedule has no
    /// rule for `service_type`, or [`BillingError::IdsExhausted`] if the
    /// allocator has run out of ids.
    #[tracing::instrument(skip(self))]
    pub fn create(
        &self,
        service_type: ServiceType,
        hours: u32,
    ) -> Result<ServiceRecord, BillingError> {
        self.rule_for(service_type)?;
        let record = ServiceRecord::new(self.allocator.next_id()?, service_type, hours);
        tracing::debug!(record_id = %record.id(), "created service record");
        Ok(record)
    }

    /// Parse `tag` as a [`ServiceType`] and [`create`](Self::create) a record.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnsupportedVariant`] if `tag` names no known
    /// service type, or the fee schedule has no rule for it.
    pub fn create_from_tag(&self, tag: &str, hours: u32) -> Result<ServiceRecord, BillingError> {
        let service_type = tag.parse::<ServiceType>().inspect_err(|err| {
            tracing::warn!(error = %err, "rejected service record");
        })?;
        self.create(service_type, hours)
    }

    /// Loyalty points earned by `record`.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnsupportedVariant`] if the fee schedule has no
    /// rule for the record's type.
    pub fn service_points(&self, record: &ServiceRecord) -> Result<u64, BillingError> {
        let rule = self.rule_for(record.service_type())?;
        Ok(rule.service_points(record.hours()))
    }

    /// Flat callout fee for `record`.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnsupportedVariant`] if the fee schedule has no
    /// rule for the record's type.
    pub fn callout_fee(&self, record: &ServiceRecord) -> Result<u64, BillingError> {
        let rule = self.rule_for(record.service_type())?;
        Ok(rule.callout_fee)
    }

    /// Hourly service fee for `record`.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnsupportedVariant`] if the fee schedule has no
    /// rule for the record's type.
    pub fn service_fee(&self, record: &ServiceRecord) -> Result<u64, BillingError> {
        let rule = self.rule_for(record.service_type())?;
        Ok(rule.service_fee(record.hours()))
    }

    /// Price `record`, attach the resulting invoice to it, and return a copy.
    ///
    /// Any previously attached invoice is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnsupportedVariant`] if the fee schedule has no
    /// rule for the record's type.
    #[tracing::instrument(skip(self, record), fields(record_id = %record.id()))]
    pub fn build_invoice(&self, record: &mut ServiceRecord) -> Result<Invoice, BillingError> {
        let rule = self.rule_for(record.service_type())?;
        if record.is_invoiced() {
            tracing::debug!("replacing existing invoice");
        }
        let invoice = record.build_invoice(rule);
        tracing::debug!(total = invoice.total(), "built invoice");
        Ok(invoice)
    }

    /// Build invoices for every record in `records`.
    ///
    /// Invoices come back in ascending record-id order; `records` itself is
    /// left in the order given. Nothing is attached unless every record can
    /// be priced.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnsupportedVariant`] for the first record whose
    /// type the fee schedule has no rule for.
    #[tracing::instrument(skip_all, fields(count = records.len()))]
    pub fn invoice_all(
        &self,
        records: &mut [ServiceRecord],
    ) -> Result<Vec<Invoice>, BillingError> {
        for record in records.iter() {
            self.rule_for(record.service_type())?;
        }
        let mut invoices = records
            .iter_mut()
            .map(|record| self.build_invoice(record))
            .collect::<Result<Vec<_>, _>>()?;
        invoices.sort_by_key(|invoice| invoice.record_id);
        Ok(invoices)
    }

    fn rule_for(&self, service_type: ServiceType) -> Result<&FeeRule, BillingError> {
        self.schedule.rule(service_type).map_err(|err| {
            tracing::warn!(error = %err, "no fee rule for service type");
            err.into()
        })
    }
}
