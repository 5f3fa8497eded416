//! Table details rendered by the host under an audit

use crate::models::EcoIndexResult;
use serde::Serialize;

/// Formatting hint for a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Text,
    /// Raw byte count, formatted by the host
    Bytes,
}

/// Column heading
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableHeading {
    pub key: &'static str,
    pub item_type: ItemType,
    pub text: &'static str,
}

impl TableHeading {
    const fn new(key: &'static str, item_type: ItemType, text: &'static str) -> Self {
        Self {
            key,
            item_type,
            text,
        }
    }
}

/// One table row, keyed like the headings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableItem {
    pub grade: String,
    pub greenhouse_gases_emission: f64,
    pub water_consumption: f64,
    pub dom_size: u64,
    pub number_of_requests: u64,
    pub size_of_requests: u64,
}

impl From<&EcoIndexResult> for TableItem {
    fn from(result: &EcoIndexResult) -> Self {
        Self {
            grade: result.grade.to_string(),
            greenhouse_gases_emission: result.greenhouse_gas_emission,
            water_consumption: result.water_consumption,
            dom_size: result.dom_size,
            number_of_requests: result.request_count,
            size_of_requests: result.transferred_size_bytes,
        }
    }
}

/// Column headings in display order
pub const ECOINDEX_HEADINGS: [TableHeading; 6] = [
    TableHeading::new("grade", ItemType::Text, "Grade"),
    TableHeading::new("greenhouseGasesEmission", ItemType::Text, "GHG (gCO2e)"),
    TableHeading::new("waterConsumption", ItemType::Text, "Water (cl)"),
    TableHeading::new("domSize", ItemType::Text, "DOM size"),
    TableHeading::new("numberOfRequests", ItemType::Text, "Requests number"),
    TableHeading::new("sizeOfRequests", ItemType::Bytes, "Requests size"),
];

/// Table attached to an audit product
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "table")]
pub struct TableDetails {
    pub headings: Vec<TableHeading>,
    pub items: Vec<TableItem>,
}

impl TableDetails {
    pub fn new(headings: &[TableHeading], items: Vec<TableItem>) -> Self {
        Self {
            headings: headings.to_vec(),
            items,
        }
    }

    /// Single-row EcoIndex table
    pub fn for_result(result: &EcoIndexResult) -> Self {
        Self::new(&ECOINDEX_HEADINGS, vec![TableItem::from(result)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Measurement;
    use crate::scoring::evaluate;

    #[test]
    fn test_heading_order() {
        let texts: Vec<_> = ECOINDEX_HEADINGS.iter().map(|h| h.text).collect();
        assert_eq!(
            texts,
            [
                "Grade",
                "GHG (gCO2e)",
                "Water (cl)",
                "DOM size",
                "Requests number",
                "Requests size"
            ]
        );
        assert!(ECOINDEX_HEADINGS[..5]
            .iter()
            .all(|h| h.item_type == ItemType::Text));
        assert_eq!(ECOINDEX_HEADINGS[5].item_type, ItemType::Bytes);
    }

    #[test]
    fn test_table_serialization() {
        let result = evaluate(&Measurement::new(0, 0, 0));
        let table = TableDetails::for_result(&result);
        let value = serde_json::to_value(&table).expect("serialize table");

        assert_eq!(value["type"], "table");
        assert_eq!(value["headings"][5]["key"], "sizeOfRequests");
        assert_eq!(value["headings"][5]["itemType"], "bytes");
        assert_eq!(value["items"][0]["grade"], "A");
        assert_eq!(value["items"][0]["waterConsumption"], 1.5);
    }

    #[test]
    fn test_every_heading_key_has_a_value() {
        let result = evaluate(&Measurement::new(300, 20, 1_500_000));
        let value = serde_json::to_value(TableItem::from(&result)).expect("serialize item");
        for heading in &ECOINDEX_HEADINGS {
            assert!(!value[heading.key].is_null(), "missing {}", heading.key);
        }
    }
}
