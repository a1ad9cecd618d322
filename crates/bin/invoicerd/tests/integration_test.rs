//! End-to-end tests for the full billing stack.
//!
//! Each test wires the real allocator, real fee schedules, and the real
//! catalog the same way `invoicerd` does, then exercises the public API.

use std::sync::Arc;

use invoicer_app::id_allocator::SequentialIdAllocator;
use invoicer_app::ports::RecordIdAllocator;
use invoicer_app::services::record_catalog::ServiceRecordCatalog;
use invoicer_domain::error::BillingError;
use invoicer_domain::fee::{FeeRule, FeeSchedule};
use invoicer_domain::id::RecordId;
use invoicer_domain::invoice::Invoice;
use invoicer_domain::service_record::{ServiceRecord, sort_by_id};
use invoicer_domain::service_type::ServiceType;

fn catalog() -> ServiceRecordCatalog<SequentialIdAllocator> {
    ServiceRecordCatalog::with_default_schedule()
}

// ---------------------------------------------------------------------------
// Invoicing
// ---------------------------------------------------------------------------

#[test]
fn should_invoice_a_mixed_day_of_work() {
    let catalog = catalog();
    let jobs = [
        ("regular", 8),
        ("emergency", 5),
        ("after_hours", 2),
        ("discount", 0),
        ("regular", 1),
    ];
    let mut records = jobs
        .into_iter()
        .map(|(tag, hours)| catalog.create_from_tag(tag, hours))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let invoices = catalog.invoice_all(&mut records).unwrap();

    let totals: Vec<u64> = invoices.iter().map(Invoice::total).collect();
    assert_eq!(totals, vec![740, 950, 390, 50, 180]);
    let points: u64 = records
        .iter()
        .map(|r| catalog.service_points(r).unwrap())
        .sum();
    assert_eq!(points, 8 + 15 + 4 + 0 + 1);
}

#[test]
fn should_not_depend_on_other_records_state() {
    let catalog = catalog();
    let mut noisy = catalog.create(ServiceType::AfterHours, 100).unwrap();
    catalog.build_invoice(&mut noisy).unwrap();

    let mut record = catalog.create(ServiceType::Emergency, 5).unwrap();
    let invoice = catalog.build_invoice(&mut record).unwrap();

    assert_eq!(
        invoice,
        Invoice {
            record_id: record.id(),
            callout_fee: 200,
            service_fee: 750,
            hours: 5,
        }
    );
}

#[test]
fn should_hand_invoice_to_collaborator_as_json() {
    let catalog = catalog();
    let mut record = catalog.create(ServiceType::Discount, 4).unwrap();
    let invoice = catalog.build_invoice(&mut record).unwrap();

    let json = serde_json::to_value(invoice).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "record_id": 0,
            "callout_fee": 50,
            "service_fee": 240,
            "hours": 4,
        })
    );

    let record_json = serde_json::to_value(&record).unwrap();
    assert_eq!(record_json["service_type"], "discount");
    assert_eq!(record_json["invoice"]["service_fee"], 240);
}

// ---------------------------------------------------------------------------
// Identifier allocation
// ---------------------------------------------------------------------------

#[test]
fn should_share_one_sequence_between_catalogs_with_different_pricing() {
    let allocator = Arc::new(SequentialIdAllocator::new());
    let standard = ServiceRecordCatalog::new(Arc::clone(&allocator), FeeSchedule::default());
    let promo = ServiceRecordCatalog::new(
        Arc::clone(&allocator),
        FeeSchedule::default().with_rule(ServiceType::Regular, FeeRule::new(0, 40, 2)),
    );

    let mut a = standard.create(ServiceType::Regular, 2).unwrap();
    let mut b = promo.create(ServiceType::Regular, 2).unwrap();

    assert_eq!(a.id(), RecordId::new(0));
    assert_eq!(b.id(), RecordId::new(1));
    assert_eq!(allocator.next_id().unwrap(), RecordId::new(2));

    assert_eq!(standard.build_invoice(&mut a).unwrap().total(), 260);
    assert_eq!(promo.build_invoice(&mut b).unwrap().total(), 80);
}

#[test]
fn should_keep_ids_unique_under_concurrent_creation() {
    let catalog = Arc::new(catalog());
    let handles: Vec<_> = ServiceType::ALL
        .into_iter()
        .map(|kind| {
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || {
                (0..100)
                    .map(|hours| catalog.create(kind, hours).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut records: Vec<ServiceRecord> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    sort_by_id(&mut records);

    let ids: Vec<u64> = records.iter().map(|r| r.id().value()).collect();
    assert_eq!(ids, (0..400).collect::<Vec<_>>());
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn should_fail_loudly_on_unknown_tag() {
    let catalog = catalog();
    let result = catalog.create_from_tag("holiday", 1);
    let Err(BillingError::UnsupportedVariant(err)) = result else {
        panic!("expected unsupported variant");
    };
    assert_eq!(err.tag, "holiday");

    let next = catalog.create(ServiceType::Regular, 1).unwrap();
    assert_eq!(next.id(), RecordId::FIRST);
}

#[test]
fn should_stop_handing_out_ids_at_upper_bound() {
    let catalog = ServiceRecordCatalog::new(
        SequentialIdAllocator::starting_at(RecordId::new(u64::MAX - 1)),
        FeeSchedule::default(),
    );
    let mut last = catalog.create(ServiceType::Discount, 1).unwrap();
    assert_eq!(catalog.build_invoice(&mut last).unwrap().record_id.value(), u64::MAX - 1);

    for kind in ServiceType::ALL {
        assert!(matches!(
            catalog.create(kind, 1),
            Err(BillingError::IdsExhausted)
        ));
    }
}
