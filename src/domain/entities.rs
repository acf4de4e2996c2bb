use serde::{Deserialize, Serialize};

/// Opaque identifier shared by indirect costs and saved calculations.
pub type EntryId = String;

/// A fixed overhead amount spread evenly across `distribution_units` sold units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndirectCost {
    pub id: EntryId,
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    /// Raw value as entered; the costing math clamps it to at least 1.
    #[serde(default = "default_units")]
    pub distribution_units: f64,
}

impl IndirectCost {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, amount: f64, units: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            distribution_units: units,
        }
    }

    pub fn blank(id: impl Into<EntryId>) -> Self {
        Self::new(id, String::new(), 0.0, 1.0)
    }
}

fn default_units() -> f64 {
    1.0
}

/// Frozen record of a finished calculation.
///
/// The indirect costs are copied by value when the record is created, so later
/// edits to the global presets never reach into history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCalculation {
    pub id: EntryId,
    pub name: String,
    pub purchase_price: f64,
    #[serde(default = "default_units")]
    pub units_per_package: f64,
    #[serde(default)]
    pub indirect_costs: Vec<IndirectCost>,
    pub profit_margin: f64,
    pub unit_cost: f64,
    pub total_unit_cost: f64,
    pub suggested_price: f64,
    pub profit_per_unit: f64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indirect_cost_uses_camel_case_and_defaults_units() {
        let cost: IndirectCost =
            serde_json::from_str(r#"{"id":"a","name":"Rent","amount":120.5}"#).unwrap();
        assert_eq!(cost.distribution_units, 1.0);
        assert_eq!(cost.amount, 120.5);

        let json = serde_json::to_string(&IndirectCost::new("b", "Power", 30.0, 6.0)).unwrap();
        assert!(json.contains("\"distributionUnits\":6.0"));
    }

    #[test]
    fn calculation_reads_browser_shaped_record() {
        let raw = r#"{
            "id": "7f1c",
            "name": "Galletas",
            "purchasePrice": 100,
            "unitsPerPackage": 10,
            "indirectCosts": [{"id": "c1", "name": "Envío", "amount": 20, "distributionUnits": 2}],
            "profitMargin": 30,
            "unitCost": 10,
            "totalUnitCost": 20,
            "suggestedPrice": 26,
            "profitPerUnit": 6,
            "timestamp": 1718000000000
        }"#;
        let calc: ProductCalculation = serde_json::from_str(raw).unwrap();
        assert_eq!(calc.units_per_package, 10.0);
        assert_eq!(calc.indirect_costs.len(), 1);
        assert_eq!(calc.indirect_costs[0].name, "Envío");
        assert_eq!(calc.timestamp, 1_718_000_000_000);
    }

    #[test]
    fn fractional_units_from_browser_records_load_intact() {
        let raw = r#"[
            {"id": "a", "name": "Tea", "purchasePrice": 100, "unitsPerPackage": 2.5,
             "indirectCosts": [{"id": "c1", "name": "Labels", "amount": 3, "distributionUnits": 1.5}],
             "profitMargin": 30, "unitCost": 40, "totalUnitCost": 42, "suggestedPrice": 54.6,
             "profitPerUnit": 12.6, "timestamp": 1718000000000},
            {"id": "b", "name": "Jam", "purchasePrice": 12, "unitsPerPackage": 3,
             "profitMargin": 10, "unitCost": 4, "totalUnitCost": 4, "suggestedPrice": 4.4,
             "profitPerUnit": 0.4, "timestamp": 1718000000001}
        ]"#;
        let history: Vec<ProductCalculation> = serde_json::from_str(raw).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].units_per_package, 2.5);
        assert_eq!(history[0].indirect_costs[0].distribution_units, 1.5);

        let json = serde_json::to_string(&history[0].indirect_costs[0]).unwrap();
        let back: IndirectCost = serde_json::from_str(&json).unwrap();
        assert_eq!(back.distribution_units, 1.5);
    }
}
