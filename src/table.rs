//! Pure logic behind the searchable service-history table: row projection,
//! fuzzy search over provider/service text, and the filtered cost total.

use chrono::NaiveDate;
use serde::Serialize;

use crate::format::format_currency;
use crate::records::{ServiceCategory, Vehicle};

/// One row of the service-history table. Purchase markers are not rows.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRow {
    pub date: NaiveDate,
    pub miles: i64,
    pub provider: String,
    pub service: String,
    pub cost: Option<f64>,
    pub categories: Vec<ServiceCategory>,
}

/// Projects a vehicle's non-purchase events into table rows, in event order.
pub fn service_rows(vehicle: &Vehicle) -> Vec<ServiceRow> {
    vehicle
        .events
        .iter()
        .filter(|event| !event.is_purchase)
        .map(|event| ServiceRow {
            date: event.date,
            miles: event.miles,
            provider: event.provider.clone().unwrap_or_default(),
            service: event.service.clone().unwrap_or_default(),
            cost: event.cost,
            categories: event.categories.clone(),
        })
        .collect()
}

/// Keeps rows whose provider or service matches the query. An empty query
/// keeps everything.
pub fn filter_rows<'a>(rows: &'a [ServiceRow], query: &str) -> Vec<&'a ServiceRow> {
    if query.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| fuzzy_match(&row.provider, query) || fuzzy_match(&row.service, query))
        .collect()
}

/// Sum of known costs over a filtered row set; unknown costs contribute nothing.
pub fn rows_cost_total(rows: &[&ServiceRow]) -> f64 {
    rows.iter().filter_map(|row| row.cost).sum()
}

/// Cost cell text: em-dash for unknown, otherwise a two-decimal dollar amount.
pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(amount) => format_currency(amount, 2),
        None => "—".to_string(),
    }
}

/// Case-insensitive subsequence match: every query character must appear in
/// `text` in order, not necessarily adjacent. "brk pd" matches "Brake pads".
pub fn fuzzy_match(text: &str, query: &str) -> bool {
    let mut chars = text.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|needle| chars.any(|c| c == needle))
}
