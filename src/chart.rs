//! Chart-ready dataset shapes handed to the presentation layer as-is.

use serde::Serialize;

use crate::summary::BillingSummary;

/// How a bar chart's tooltip describes its values.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TooltipMode {
    Usage,
    Cost,
    Rate,
}

/// One series for a bar or line chart, in the shape the chart library expects.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}

impl ChartDataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>, fill: &str, border: &str) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: fill.into(),
            border_color: border.into(),
            border_width: None,
        }
    }
}

/// The usage series as a single dataset, labeled with the domain's unit.
pub fn usage_dataset(summary: &BillingSummary, fill: &str, border: &str) -> ChartDataset {
    ChartDataset::new(
        format!("{} Usage", summary.kind.usage_unit()),
        summary.usage.clone(),
        fill,
        border,
    )
}

/// Both cost-component series, labeled per domain (Supply/Delivery or
/// Water/Sewer), for a stacked cost chart.
pub fn cost_datasets(
    summary: &BillingSummary,
    fill_a: &str,
    border_a: &str,
    fill_b: &str,
    border_b: &str,
) -> Vec<ChartDataset> {
    let (label_a, label_b) = summary.kind.component_labels();
    vec![
        ChartDataset::new(label_a, summary.cost_a.clone(), fill_a, border_a),
        ChartDataset::new(label_b, summary.cost_b.clone(), fill_b, border_b),
    ]
}

/// Both per-unit rate series for a stacked price chart.
pub fn rate_datasets(
    summary: &BillingSummary,
    fill_a: &str,
    border_a: &str,
    fill_b: &str,
    border_b: &str,
) -> Vec<ChartDataset> {
    let (label_a, label_b) = summary.kind.component_labels();
    let unit = summary.kind.usage_unit();
    vec![
        ChartDataset::new(
            format!("{} Rate ($/{})", label_a, unit),
            summary.rate_a.clone(),
            fill_a,
            border_a,
        ),
        ChartDataset::new(
            format!("{} Rate ($/{})", label_b, unit),
            summary.rate_b.clone(),
            fill_b,
            border_b,
        ),
    ]
}
