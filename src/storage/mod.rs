pub mod json_store;

use crate::errors::DashboardError;
use crate::records::{ElectricRecord, GasRecord, Vehicle, WaterRecord};

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Abstraction over the read-only record source. A logical source id names one
/// domain+property (or one vehicle); the store returns its records already
/// deserialized, in the chronological order the files carry.
pub trait DataStore: Send + Sync {
    fn electric_records(&self, source: &str) -> Result<Vec<ElectricRecord>>;
    fn gas_records(&self, source: &str) -> Result<Vec<GasRecord>>;
    fn water_records(&self, source: &str) -> Result<Vec<WaterRecord>>;
    fn vehicle(&self, source: &str) -> Result<Vehicle>;
}

pub use json_store::JsonStore;
