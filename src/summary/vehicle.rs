use chrono::Datelike;
use serde::Serialize;

use crate::format::format_date_range;
use crate::records::Vehicle;

/// Derived view of one vehicle's mileage and service history.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleSummary {
    pub acquired_miles: i64,
    /// Odometer reading on the most recent event.
    pub latest_miles: i64,
    pub miles_driven: i64,
    /// Miles per whole calendar month of ownership, rounded to the nearest mile.
    pub avg_miles_per_month: i64,
    /// Sum of known service costs; purchase markers and unknown costs excluded.
    pub total_service_cost: f64,
    /// Number of non-purchase events, whether or not a cost is known.
    pub service_event_count: usize,
    /// Span from acquisition to the latest event, e.g. "Jan 2023 – Jul 2024".
    pub date_range: String,
}

/// Aggregates a vehicle's event history into a [`VehicleSummary`].
///
/// Events must be chronological with the last entry holding the latest odometer
/// reading; an empty event list is a caller bug and panics. A negative
/// `miles_driven` from inconsistent data is propagated as-is.
pub fn summarize_vehicle(vehicle: &Vehicle) -> VehicleSummary {
    let latest = vehicle.events.last().expect("vehicle has at least one event");
    let miles_driven = latest.miles - vehicle.acquired_miles;

    let total_service_cost: f64 = vehicle
        .events
        .iter()
        .filter(|event| !event.is_purchase)
        .filter_map(|event| event.cost)
        .sum();
    let service_event_count = vehicle
        .events
        .iter()
        .filter(|event| !event.is_purchase)
        .count();

    // Whole calendar months between acquisition and the latest event, ignoring
    // day-of-month. Non-positive spans fall back to the raw mileage figure
    // instead of dividing.
    let months = (latest.date.year() - vehicle.acquired_date.year()) * 12
        + (latest.date.month() as i32 - vehicle.acquired_date.month() as i32);
    let avg_miles_per_month = if months > 0 {
        (miles_driven as f64 / months as f64).round() as i64
    } else {
        miles_driven
    };

    VehicleSummary {
        acquired_miles: vehicle.acquired_miles,
        latest_miles: latest.miles,
        miles_driven,
        avg_miles_per_month,
        total_service_cost,
        service_event_count,
        date_range: format_date_range(vehicle.acquired_date, latest.date),
    }
}
