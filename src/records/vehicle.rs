use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter tags attached to service events. The union across a vehicle's events
/// drives which filter options the service table offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Maintenance,
    Repair,
    Tires,
    Inspection,
    Recall,
    Upgrade,
}

impl ServiceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Maintenance => "Maintenance",
            ServiceCategory::Repair => "Repair",
            ServiceCategory::Tires => "Tires",
            ServiceCategory::Inspection => "Inspection",
            ServiceCategory::Recall => "Recall",
            ServiceCategory::Upgrade => "Upgrade",
        }
    }
}

/// One entry in a vehicle's history: either the purchase marker or a
/// service/maintenance visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleEvent {
    pub date: NaiveDate,
    /// Odometer reading on the event date.
    pub miles: i64,
    pub label: String,
    pub detail: String,
    pub is_purchase: bool,
    pub provider: Option<String>,
    pub service: Option<String>,
    /// `None` means cost unknown or not billed, which is distinct from zero.
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<ServiceCategory>,
}

/// One vehicle's identity and full event history. Events are chronological and
/// the last one holds the latest known odometer reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub color: String,
    pub acquired_date: NaiveDate,
    pub acquired_miles: i64,
    pub events: Vec<VehicleEvent>,
}

impl Vehicle {
    /// Display name, e.g. "2021 Tesla Model 3".
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    /// Distinct categories seen across all events, in sorted order.
    pub fn category_options(&self) -> BTreeSet<ServiceCategory> {
        self.events
            .iter()
            .flat_map(|event| event.categories.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service_event(categories: Vec<ServiceCategory>) -> VehicleEvent {
        VehicleEvent {
            date: date(2024, 3, 1),
            miles: 15000,
            label: "Service".into(),
            detail: "Annual service".into(),
            is_purchase: false,
            provider: Some("Dealer".into()),
            service: Some("Annual service".into()),
            cost: Some(150.0),
            categories,
        }
    }

    #[test]
    fn category_options_unions_and_sorts() {
        let mut vehicle = Vehicle {
            make: "Tesla".into(),
            model: "Model 3".into(),
            year: 2021,
            vin: "5YJ3000000000000".into(),
            color: "#cc0000".into(),
            acquired_date: date(2023, 1, 1),
            acquired_miles: 10000,
            events: vec![
                service_event(vec![ServiceCategory::Tires, ServiceCategory::Maintenance]),
                service_event(vec![ServiceCategory::Maintenance, ServiceCategory::Repair]),
            ],
        };
        vehicle.events[1].date = date(2024, 6, 1);

        let options: Vec<_> = vehicle.category_options().into_iter().collect();
        assert_eq!(
            options,
            vec![
                ServiceCategory::Maintenance,
                ServiceCategory::Repair,
                ServiceCategory::Tires,
            ]
        );
    }

    #[test]
    fn event_deserializes_without_categories() {
        let json = r#"{
            "date": "2023-01-01",
            "miles": 10000,
            "label": "Purchased",
            "detail": "Bought used from dealer",
            "is_purchase": true,
            "provider": null,
            "service": null,
            "cost": null
        }"#;
        let event: VehicleEvent = serde_json::from_str(json).unwrap();
        assert!(event.is_purchase);
        assert_eq!(event.cost, None);
        assert!(event.categories.is_empty());
    }
}
