//! Record shapes for the four input domains, as deserialized from the data files.

pub mod billing;
pub mod vehicle;

pub use billing::{BillingRecord, ElectricRecord, GasRecord, UtilityKind, WaterRecord};
pub use vehicle::{ServiceCategory, Vehicle, VehicleEvent};
