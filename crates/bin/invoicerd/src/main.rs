//! # invoicerd — invoicer daemon
//!
//! Composition root that wires the billing core together and invoices a batch.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialise structured logging
//! - Construct the id allocator and fee schedule
//! - Construct the record catalog, injecting both
//! - Create one record per service type and log the resulting invoices
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no billing logic belongs here.

mod config;

use invoicer_app::id_allocator::SequentialIdAllocator;
use invoicer_app::services::record_catalog::ServiceRecordCatalog;
use invoicer_domain::service_type::ServiceType;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new("invoicerd=info,invoicer_app=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    init_tracing(&config.logging.filter);

    let allocator = SequentialIdAllocator::starting_at(config.first_id());
    let catalog = ServiceRecordCatalog::new(allocator, config.fee_schedule());

    let mut records = ServiceType::ALL
        .into_iter()
        .map(|kind| catalog.create(kind, config.batch.hours))
        .collect::<Result<Vec<_>, _>>()?;
    let invoices = catalog.invoice_all(&mut records)?;

    for record in &records {
        let Some(invoice) = record.invoice() else {
            continue;
        };
        let points = catalog.service_points(record)?;
        tracing::info!(
            record_id = %invoice.record_id,
            service_type = %record.service_type(),
            hours = invoice.hours,
            callout_fee = invoice.callout_fee,
            service_fee = invoice.service_fee,
            total = invoice.total(),
            points,
            "invoice"
        );
    }

    let grand_total: u64 = invoices.iter().map(|invoice| invoice.total()).sum();
    tracing::info!(count = invoices.len(), grand_total, "batch invoiced");

    Ok(())
}
