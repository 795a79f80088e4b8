use serde::Serialize;

use crate::format::{format_date_range, month_year_label};
use crate::records::{BillingRecord, UtilityKind};

/// Derived view of one utility's billing history. Every series holds exactly
/// `period_count` entries, positionally aligned with the input records.
#[derive(Debug, Clone, Serialize)]
pub struct BillingSummary {
    pub kind: UtilityKind,
    /// Month labels for each period, e.g. "Jan 2024".
    pub labels: Vec<String>,
    /// Usage quantity per period (kWh, therms, or cubic feet).
    pub usage: Vec<f64>,
    /// First cost component per period (supply, or water).
    pub cost_a: Vec<f64>,
    /// Second cost component per period (delivery, or sewer).
    pub cost_b: Vec<f64>,
    /// First cost component per usage unit, rounded to 4 decimals.
    pub rate_a: Vec<f64>,
    /// Second cost component per usage unit, rounded to 4 decimals.
    pub rate_b: Vec<f64>,
    pub total_usage: f64,
    /// Both cost components combined across all periods.
    pub total_cost: f64,
    /// Mean usage per period, rounded to the nearest whole unit.
    pub avg_usage: f64,
    pub peak_usage: f64,
    pub period_count: usize,
    /// "Jan 2024 – Feb 2025" style span over the input's first and last periods.
    pub date_range: String,
}

/// Aggregates an ordered, non-empty billing history into a [`BillingSummary`].
///
/// The three utility domains share this algorithm; a record's [`BillingRecord`]
/// impl decides which fields play the usage and cost-component roles. Records
/// must arrive chronologically; an empty slice is a caller bug and panics.
pub fn summarize_billing<R: BillingRecord>(records: &[R]) -> BillingSummary {
    let labels = records
        .iter()
        .map(|r| month_year_label(r.period_date()))
        .collect();
    let usage: Vec<f64> = records.iter().map(|r| r.usage()).collect();
    let cost_a: Vec<f64> = records.iter().map(|r| r.costs().0).collect();
    let cost_b: Vec<f64> = records.iter().map(|r| r.costs().1).collect();
    let rate_a = records.iter().map(|r| unit_rate(r.costs().0, r.usage())).collect();
    let rate_b = records.iter().map(|r| unit_rate(r.costs().1, r.usage())).collect();

    let total_usage: f64 = usage.iter().sum();
    let total_cost = cost_a.iter().sum::<f64>() + cost_b.iter().sum::<f64>();
    let avg_usage = (total_usage / records.len() as f64).round();
    let peak_usage = usage.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let date_range = format_date_range(
        records[0].period_date(),
        records[records.len() - 1].period_date(),
    );

    BillingSummary {
        kind: records[0].kind(),
        labels,
        usage,
        cost_a,
        cost_b,
        rate_a,
        rate_b,
        total_usage,
        total_cost,
        avg_usage,
        peak_usage,
        period_count: records.len(),
        date_range,
    }
}

/// Cost per usage unit, rounded half away from zero at the 4th decimal.
/// Zero usage yields a rate of exactly 0 rather than a division by zero.
fn unit_rate(cost: f64, usage: f64) -> f64 {
    if usage > 0.0 {
        (cost / usage * 1e4).round() / 1e4
    } else {
        0.0
    }
}
