//! Interval-overlap occupancy aggregation: per-day distinct occupied rooms,
//! occupancy percentages, and the period's nights-sold counter.

use std::collections::{BTreeMap, HashSet};

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::domain::{DateWindow, Reservation};

/// Daily occupancy series for one reporting window.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OccupancySeries {
    /// Distinct occupied rooms per day.
    pub daily_rooms: BTreeMap<NaiveDate, u32>,
    /// Occupancy percentage per day, rounded half-up. Zero when the
    /// establishment has no rooms.
    pub daily_percent: BTreeMap<NaiveDate, u32>,
    /// Sum of daily distinct-room counts across the window.
    pub nights_sold: u32,
}

impl OccupancySeries {
    /// Integer-rounded mean of the daily percentages; zero for an empty
    /// window.
    pub fn average_percent(&self) -> u32 {
        if self.daily_percent.is_empty() {
            return 0;
        }
        let total: u64 = self.daily_percent.values().map(|&p| u64::from(p)).sum();
        (total as f64 / self.daily_percent.len() as f64).round() as u32
    }
}

/// Computes the occupancy series for a window. Cancelled reservations are
/// ignored; a room referenced by overlapping bookings counts once per day.
///
/// Day overlap is half-open: a reservation checking out exactly at a day's
/// start does not occupy that day, while one checking in at the day's start
/// does.
pub fn occupancy_for_window(
    reservations: &[Reservation],
    total_rooms: usize,
    window: &DateWindow,
) -> OccupancySeries {
    let mut daily_rooms = BTreeMap::new();
    let mut daily_percent = BTreeMap::new();
    let mut nights_sold = 0u32;

    for day in window.iter_days() {
        let day_start = day.and_time(NaiveTime::MIN);
        let day_end = day_start + Duration::days(1);
        let occupied: HashSet<_> = reservations
            .iter()
            .filter(|r| !r.is_cancelled())
            .filter(|r| r.check_in < day_end && r.check_out > day_start)
            .map(|r| r.room_id)
            .collect();
        let rooms = occupied.len() as u32;
        let percent = if total_rooms == 0 {
            0
        } else {
            (f64::from(rooms) / total_rooms as f64 * 100.0).round() as u32
        };
        nights_sold += rooms;
        daily_rooms.insert(day, rooms);
        daily_percent.insert(day, percent);
    }

    OccupancySeries {
        daily_rooms,
        daily_percent,
        nights_sold,
    }
}
