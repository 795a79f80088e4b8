use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which utility a billing record belongs to. Carried on summaries so
/// presentation code can pick unit and cost-component labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UtilityKind {
    Electric,
    Gas,
    Water,
}

impl UtilityKind {
    /// Unit of the usage quantity, as shown on chart axes.
    pub fn usage_unit(&self) -> &'static str {
        match self {
            UtilityKind::Electric => "kWh",
            UtilityKind::Gas => "Therms",
            UtilityKind::Water => "CF",
        }
    }

    /// Display names for the two cost components, in series order.
    pub fn component_labels(&self) -> (&'static str, &'static str) {
        match self {
            UtilityKind::Electric | UtilityKind::Gas => ("Supply", "Delivery"),
            UtilityKind::Water => ("Water", "Sewer"),
        }
    }
}

/// One billing statement period. Records are supplied in chronological order;
/// the summary layer never sorts them.
pub trait BillingRecord {
    fn kind(&self) -> UtilityKind;
    /// Primary physical quantity for the period (kWh, therms, cubic feet).
    fn usage(&self) -> f64;
    /// The two cost components, in (supply, delivery) or (water, sewer) order.
    fn costs(&self) -> (f64, f64);
    fn period_end(&self) -> Option<NaiveDate>;
    fn statement_date(&self) -> NaiveDate;

    /// Date that stands for the period: `period_end` when present, otherwise
    /// the statement date.
    fn period_date(&self) -> NaiveDate {
        self.period_end().unwrap_or_else(|| self.statement_date())
    }
}

/// One electric bill, extracted from a statement PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectricRecord {
    pub filename: String,
    pub kwh: f64,
    pub supply: f64,
    pub delivery: f64,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub statement_date: NaiveDate,
}

impl BillingRecord for ElectricRecord {
    fn kind(&self) -> UtilityKind {
        UtilityKind::Electric
    }

    fn usage(&self) -> f64 {
        self.kwh
    }

    fn costs(&self) -> (f64, f64) {
        (self.supply, self.delivery)
    }

    fn period_end(&self) -> Option<NaiveDate> {
        self.period_end
    }

    fn statement_date(&self) -> NaiveDate {
        self.statement_date
    }
}

/// One gas bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasRecord {
    pub filename: String,
    pub therms: f64,
    pub supply: f64,
    pub delivery: f64,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub statement_date: NaiveDate,
}

impl BillingRecord for GasRecord {
    fn kind(&self) -> UtilityKind {
        UtilityKind::Gas
    }

    fn usage(&self) -> f64 {
        self.therms
    }

    fn costs(&self) -> (f64, f64) {
        (self.supply, self.delivery)
    }

    fn period_end(&self) -> Option<NaiveDate> {
        self.period_end
    }

    fn statement_date(&self) -> NaiveDate {
        self.statement_date
    }
}

/// One water/sewer bill. Usage is recorded in cubic feet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterRecord {
    pub filename: String,
    pub cf: f64,
    pub water: f64,
    pub sewer: f64,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub statement_date: NaiveDate,
}

impl BillingRecord for WaterRecord {
    fn kind(&self) -> UtilityKind {
        UtilityKind::Water
    }

    fn usage(&self) -> f64 {
        self.cf
    }

    fn costs(&self) -> (f64, f64) {
        (self.water, self.sewer)
    }

    fn period_end(&self) -> Option<NaiveDate> {
        self.period_end
    }

    fn statement_date(&self) -> NaiveDate {
        self.statement_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn period_date_prefers_period_end() {
        let record = ElectricRecord {
            filename: "electric_2024_01.pdf".into(),
            kwh: 100.0,
            supply: 10.0,
            delivery: 5.0,
            period_start: Some(date(2023, 12, 16)),
            period_end: Some(date(2024, 1, 15)),
            statement_date: date(2024, 1, 20),
        };
        assert_eq!(record.period_date(), date(2024, 1, 15));
    }

    #[test]
    fn period_date_falls_back_to_statement_date() {
        let record = GasRecord {
            filename: "gas_2024_02.pdf".into(),
            therms: 40.0,
            supply: 30.0,
            delivery: 20.0,
            period_start: None,
            period_end: None,
            statement_date: date(2024, 2, 20),
        };
        assert_eq!(record.period_date(), date(2024, 2, 20));
    }

    #[test]
    fn water_record_deserializes_with_null_period_dates() {
        let json = r#"{
            "filename": "water_2024_q1.pdf",
            "cf": 1200,
            "water": 85.5,
            "sewer": 110.25,
            "period_start": null,
            "period_end": "2024-03-31",
            "statement_date": "2024-04-05"
        }"#;
        let record: WaterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.cf, 1200.0);
        assert_eq!(record.period_start, None);
        assert_eq!(record.period_date(), date(2024, 3, 31));
    }
}
