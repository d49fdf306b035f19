//! Per-car fuel ledger.
//!
//! This is the producer of the chart inputs: fill-ups are loaded from disk,
//! enriched with consumption and price figures, summarized, and rendered into
//! the label/value texts a host page places in its `#labels` and `#data`
//! inputs.

mod rounding;
mod store;

pub use rounding::{format_thousands, round_half_even, round_to_integer};
pub use store::FuelStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::BootstrapConfig;
use crate::error::{ChartError, ChartResult};
use crate::host::{StaticDocument, id_from_selector};

/// Date format used by the ledger files and chart labels.
pub const LEDGER_DATE_FORMAT: &str = "%d.%m.%Y";

/// Added to the per-litre pump price before computing the total.
pub const PUMP_PRICE_FRACTION: f64 = 0.009;

/// One fill-up as stored in `fuel_consumptions.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEntry {
    #[serde(with = "ledger_date")]
    pub date: NaiveDate,
    /// Litres.
    pub amount: f64,
    /// Kilometres driven since the previous fill-up.
    pub distance: f64,
    /// Price per litre without the trailing 9/10 cent.
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarProperties {
    pub name: String,
    /// Odometer reading before the first ledger entry.
    pub base_distance: f64,
}

/// Fill-up with derived figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelRecord {
    #[serde(flatten)]
    pub entry: FuelEntry,
    /// Litres per 100 km, two decimals.
    pub average: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelSummary {
    pub total_amount: f64,
    pub total_distance: f64,
    pub total_average_consumption: f64,
    /// Rounded odometer reading with `.` thousands separators.
    pub overall_distance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelReport {
    pub car_id: String,
    pub properties: CarProperties,
    /// Newest first.
    pub records: Vec<FuelRecord>,
    pub summary: FuelSummary,
}

/// Label and value texts as they appear in the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInputs {
    pub labels_text: String,
    pub values_text: String,
}

impl ChartInputs {
    #[must_use]
    pub fn into_document(self) -> StaticDocument {
        StaticDocument::for_chart(self.labels_text, self.values_text)
    }

    /// Builds a document laid out the way `layout` expects. Both selectors
    /// must be `#id` selectors.
    pub fn into_document_for(self, layout: &BootstrapConfig) -> ChartResult<StaticDocument> {
        let labels_id = selector_id(&layout.labels_selector)?;
        let data_id = selector_id(&layout.data_selector)?;
        Ok(StaticDocument::new()
            .with_container(layout.mount_id.as_str())
            .with_input(labels_id, self.labels_text)
            .with_input(data_id, self.values_text))
    }
}

fn selector_id(selector: &str) -> ChartResult<&str> {
    id_from_selector(selector).ok_or_else(|| {
        ChartError::InvalidData(format!("selector `{selector}` is not an `#id` selector"))
    })
}

impl FuelRecord {
    pub fn from_entry(entry: FuelEntry) -> ChartResult<Self> {
        if entry.distance == 0.0 {
            return Err(ChartError::InvalidData(format!(
                "fill-up on {} has zero distance",
                entry.date.format(LEDGER_DATE_FORMAT)
            )));
        }
        let average = round_half_even(100.0 * entry.amount / entry.distance, 2, "average")?;
        let total_price = round_half_even(
            entry.amount * (entry.price + PUMP_PRICE_FRACTION),
            2,
            "total_price",
        )?;
        Ok(Self {
            entry,
            average,
            total_price,
        })
    }
}

/// Sorts fill-ups newest first. Entries on the same date keep their order.
pub fn sort_newest_first(entries: &mut [FuelEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

impl FuelSummary {
    pub fn from_records(records: &[FuelRecord], properties: &CarProperties) -> ChartResult<Self> {
        let total_amount: f64 = records.iter().map(|r| r.entry.amount).sum();
        let total_distance: f64 = records.iter().map(|r| r.entry.distance).sum();
        if total_distance == 0.0 {
            return Err(ChartError::InvalidData(
                "fuel ledger has no driven distance".to_owned(),
            ));
        }
        let total_average_consumption = round_half_even(
            100.0 * total_amount / total_distance,
            2,
            "total_average_consumption",
        )?;
        let odometer = round_to_integer(
            total_distance + properties.base_distance,
            "overall_distance",
        )?;
        Ok(Self {
            total_amount,
            total_distance,
            total_average_consumption,
            overall_distance: format_thousands(odometer),
        })
    }
}

impl FuelReport {
    /// Sorts, enriches and summarizes raw ledger entries.
    pub fn from_entries(
        car_id: impl Into<String>,
        properties: CarProperties,
        mut entries: Vec<FuelEntry>,
    ) -> ChartResult<Self> {
        let car_id = car_id.into();
        sort_newest_first(&mut entries);
        let records = entries
            .into_iter()
            .map(FuelRecord::from_entry)
            .collect::<ChartResult<Vec<_>>>()?;
        let summary = FuelSummary::from_records(&records, &properties)?;
        debug!(
            car_id = %car_id,
            records = records.len(),
            total_average_consumption = summary.total_average_consumption,
            "built fuel report"
        );
        Ok(Self {
            car_id,
            properties,
            records,
            summary,
        })
    }

    /// Fill-up dates (oldest first) as a single-quoted list, and the matching
    /// total prices as a JSON array.
    pub fn chart_inputs(&self) -> ChartResult<ChartInputs> {
        let chronological = self.records.iter().rev();
        let labels = chronological
            .clone()
            .map(|r| format!("'{}'", r.entry.date.format(LEDGER_DATE_FORMAT)))
            .collect::<Vec<_>>();
        let prices = chronological.map(|r| r.total_price).collect::<Vec<_>>();
        let values_text = serde_json::to_string(&prices)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize prices: {e}")))?;
        Ok(ChartInputs {
            labels_text: format!("[{}]", labels.join(", ")),
            values_text,
        })
    }
}

mod ledger_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::LEDGER_DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(LEDGER_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, LEDGER_DATE_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid ledger date `{raw}`: {e}")))
    }
}
