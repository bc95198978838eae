//! Assembles the monthly report: daily revenue and occupancy series,
//! payment-method breakdown, top rooms, and previous-month comparison.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::core::allocation::method_shares;
use crate::core::occupancy::occupancy_for_window;
use crate::domain::{DateWindow, Payment, PaymentMethod, ReportPeriod, Reservation, Room};

/// Full period report for one establishment and month. Date keys serialize
/// as ISO calendar dates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthlyReport {
    pub daily_income: BTreeMap<NaiveDate, i64>,
    pub daily_occupancy: BTreeMap<NaiveDate, u32>,
    pub payment_breakdown: Vec<MethodSlice>,
    pub top_rooms: Vec<RoomUsage>,
    pub monthly_total: i64,
    pub prev_monthly_total: i64,
    pub nights_sold: u32,
    pub prev_nights_sold: u32,
    pub prev_average_occupancy: u32,
    pub reservation_count: usize,
}

/// Aggregated revenue attributed to one settlement method.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MethodSlice {
    pub method: PaymentMethod,
    pub total: i64,
}

/// Reservation count for one room inside the reporting window.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoomUsage {
    pub room_number: String,
    pub reservations: u32,
}

/// Snapshot inputs for one report request. Everything is fetched up front so
/// the report stays internally consistent even if the store mutates while it
/// is being computed.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    /// Reservations whose stay intersects the current month.
    pub reservations: &'a [Reservation],
    /// Reservations whose stay intersects the previous month.
    pub prev_reservations: &'a [Reservation],
    /// Payments recorded inside the current month.
    pub payments: &'a [Payment],
    /// Payments recorded inside the previous month.
    pub prev_payments: &'a [Payment],
    pub rooms: &'a [Room],
}

/// Composes reconciliation, allocation, and occupancy into period reports.
pub struct ReportingService;

impl ReportingService {
    pub fn assemble(
        inputs: ReportInputs<'_>,
        period: ReportPeriod,
        top_rooms_limit: usize,
    ) -> MonthlyReport {
        let window = period.window();
        let prev_window = period.prev().window();
        let total_rooms = inputs.rooms.len();

        let occupancy = occupancy_for_window(inputs.reservations, total_rooms, &window);
        let prev_occupancy =
            occupancy_for_window(inputs.prev_reservations, total_rooms, &prev_window);

        let daily_income = Self::daily_income(inputs.payments, &window);
        let monthly_total = Self::completed_total(inputs.payments);
        let prev_monthly_total = Self::completed_total(inputs.prev_payments);

        let active: Vec<_> = inputs
            .reservations
            .iter()
            .filter(|r| !r.is_cancelled())
            .collect();

        MonthlyReport {
            daily_income,
            daily_occupancy: occupancy.daily_percent,
            payment_breakdown: Self::payment_breakdown(inputs.payments),
            top_rooms: Self::top_rooms(&active, inputs.rooms, top_rooms_limit),
            monthly_total,
            prev_monthly_total,
            nights_sold: occupancy.nights_sold,
            prev_nights_sold: prev_occupancy.nights_sold,
            prev_average_occupancy: prev_occupancy.average_percent(),
            reservation_count: active.len(),
        }
    }

    /// Completed payments bucketed by calendar day; every day of the window
    /// is present, zero-filled when nothing was collected.
    fn daily_income(payments: &[Payment], window: &DateWindow) -> BTreeMap<NaiveDate, i64> {
        let mut income: BTreeMap<NaiveDate, i64> =
            window.iter_days().map(|day| (day, 0)).collect();
        for payment in payments.iter().filter(|p| p.is_completed()) {
            let day = payment.paid_at.date();
            if let Some(total) = income.get_mut(&day) {
                *total += payment.amount;
            }
        }
        income
    }

    fn completed_total(payments: &[Payment]) -> i64 {
        payments
            .iter()
            .filter(|p| p.is_completed())
            .map(|p| p.amount)
            .sum()
    }

    /// Method shares aggregated across every payment in the window; methods
    /// with a zero total are dropped.
    fn payment_breakdown(payments: &[Payment]) -> Vec<MethodSlice> {
        let mut totals: BTreeMap<PaymentMethod, i64> = BTreeMap::new();
        for payment in payments {
            for (method, share) in method_shares(payment) {
                *totals.entry(method).or_insert(0) += share;
            }
        }
        totals
            .into_iter()
            .filter(|(_, total)| *total != 0)
            .map(|(method, total)| MethodSlice { method, total })
            .collect()
    }

    /// Rooms ranked by reservation count, descending, ties broken by room
    /// number so the order is stable across runs.
    fn top_rooms(reservations: &[&Reservation], rooms: &[Room], limit: usize) -> Vec<RoomUsage> {
        let labels: HashMap<Uuid, &str> = rooms
            .iter()
            .map(|room| (room.id, room.number.as_str()))
            .collect();
        let mut counts: HashMap<Uuid, u32> = HashMap::new();
        for reservation in reservations {
            *counts.entry(reservation.room_id).or_insert(0) += 1;
        }
        let mut usage: Vec<RoomUsage> = counts
            .into_iter()
            .filter_map(|(room_id, count)| {
                labels.get(&room_id).map(|number| RoomUsage {
                    room_number: (*number).to_string(),
                    reservations: count,
                })
            })
            .collect();
        usage.sort_by(|a, b| {
            b.reservations
                .cmp(&a.reservations)
                .then_with(|| a.room_number.cmp(&b.room_number))
        });
        usage.truncate(limit);
        usage
    }
}
