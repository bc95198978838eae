mod common;

use common::{date, instant, FixedClock};
use lodging_core::core::engine::LedgerEngine;
use lodging_core::domain::{
    CorporateAccount, Obligation, ObligationKind, Payment, PaymentMethod, Reservation, Room,
};
use lodging_core::storage::InMemoryStore;

const ESTABLISHMENT: &str = "hostal-norte";

fn engine_with(store: InMemoryStore, today: chrono::NaiveDate) -> LedgerEngine {
    LedgerEngine::new(Box::new(store), Box::new(FixedClock(today)))
}

#[test]
fn pending_companies_get_business_day_terms() {
    let store = InMemoryStore::new();
    let room = Room::new("101");
    // Check-out Friday 2025-01-10 with a 5-business-day term: due the
    // following Friday, crossing one weekend.
    let reservation = Reservation::new(
        room.id,
        "Carlos Pena",
        80_000,
        instant(2025, 1, 8, 14),
        instant(2025, 1, 10, 11),
    )
    .unwrap()
    .with_corporate(CorporateAccount::new("Acme SA", 5))
    .with_payments(vec![Payment::new(
        30_000,
        instant(2025, 1, 8, 15),
        PaymentMethod::Transfer,
    )]);
    store.add_room(ESTABLISHMENT, room);
    store.add_reservation(ESTABLISHMENT, reservation);

    let engine = engine_with(store, date(2025, 1, 10));
    let rows = engine.pending_companies(ESTABLISHMENT).unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.counterparty, "Acme SA");
    assert_eq!(row.room_number.as_deref(), Some("101"));
    assert_eq!(row.nominal, 80_000);
    assert_eq!(row.paid, 30_000);
    assert_eq!(row.pending, 50_000);
    assert_eq!(row.due_date, date(2025, 1, 17));
    assert_eq!(row.business_days_left, 5);

    // The same reservation is company-owed, never person-owed.
    assert!(engine.pending_persons(ESTABLISHMENT).unwrap().is_empty());
}

#[test]
fn pending_persons_are_due_at_checkout_and_paid_ones_disappear() {
    let store = InMemoryStore::new();
    let room = Room::new("102");
    let open = Reservation::new(
        room.id,
        "Ana Soto",
        20_000,
        instant(2025, 1, 6, 14),
        instant(2025, 1, 10, 11),
    )
    .unwrap();
    let settled = Reservation::new(
        room.id,
        "Luis Rey",
        10_000,
        instant(2025, 1, 2, 14),
        instant(2025, 1, 4, 11),
    )
    .unwrap()
    .with_payments(vec![Payment::new(
        10_000,
        instant(2025, 1, 4, 10),
        PaymentMethod::Cash,
    )]);
    store.add_room(ESTABLISHMENT, room);
    store.add_reservation(ESTABLISHMENT, open);
    store.add_reservation(ESTABLISHMENT, settled);

    let engine = engine_with(store, date(2025, 1, 6));
    let rows = engine.pending_persons(ESTABLISHMENT).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].counterparty, "Ana Soto");
    assert_eq!(rows[0].due_date, date(2025, 1, 10));
    assert_eq!(rows[0].business_days_left, 4);
}

#[test]
fn payables_and_receivables_come_back_reconciled() {
    let store = InMemoryStore::new();
    let payable = Obligation::new(ObligationKind::Payable, "Proveedor Sur", 100_000)
        .with_entry_date(date(2025, 1, 2))
        .with_due_date(date(2025, 2, 1))
        .with_payments(vec![Payment::new(
            40_000,
            instant(2025, 1, 5, 9),
            PaymentMethod::Transfer,
        )]);
    let settled_receivable = Obligation::new(ObligationKind::Receivable, "Acme SA", 5_000)
        .with_payments(vec![Payment::new(
            5_000,
            instant(2025, 1, 3, 9),
            PaymentMethod::Cash,
        )]);
    let open_receivable = Obligation::new(ObligationKind::Receivable, "Beta SRL", 7_500);
    store.add_payable(ESTABLISHMENT, payable);
    store.add_receivable(ESTABLISHMENT, settled_receivable);
    store.add_receivable(ESTABLISHMENT, open_receivable);

    let engine = engine_with(store, date(2025, 1, 10));
    let payables = engine.payables(ESTABLISHMENT).unwrap();
    assert_eq!(payables.len(), 1);
    assert_eq!(payables[0].paid, 40_000);
    assert_eq!(payables[0].pending, 60_000);
    assert_eq!(payables[0].due_date, Some(date(2025, 2, 1)));

    let receivables = engine.receivables(ESTABLISHMENT).unwrap();
    assert_eq!(receivables.len(), 1);
    assert_eq!(receivables[0].counterparty, "Beta SRL");
    assert_eq!(receivables[0].pending, 7_500);
}
