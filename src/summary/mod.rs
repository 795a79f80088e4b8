//! Pure aggregation from raw records to chart series and stat roll-ups.

pub mod billing;
pub mod vehicle;

pub use billing::{summarize_billing, BillingSummary};
pub use vehicle::{summarize_vehicle, VehicleSummary};
