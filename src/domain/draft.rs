use thiserror::Error;

use super::costing::{
    clamp_margin, clamp_units, compute_costing, coverage, merge_presets, CostingResult,
    CoverageSummary, DEFAULT_MARGIN_PCT,
};
use super::entities::{EntryId, IndirectCost, ProductCalculation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("enter a product name before saving")]
    EmptyName,
    #[error("purchase price must be greater than zero")]
    NonPositivePrice,
}

/// Single-field edit applied to one row of the working cost list.
#[derive(Clone, Debug, PartialEq)]
pub enum CostField {
    Name(String),
    Amount(f64),
    DistributionUnits(f64),
}

/// Form state of the calculator view.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorDraft {
    pub name: String,
    pub purchase_price: f64,
    pub units_per_package: f64,
    pub profit_margin: f64,
    pub indirect_costs: Vec<IndirectCost>,
}

impl Default for CalculatorDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            purchase_price: 0.0,
            units_per_package: 1.0,
            profit_margin: DEFAULT_MARGIN_PCT,
            indirect_costs: Vec::new(),
        }
    }
}

impl CalculatorDraft {
    pub fn result(&self) -> CostingResult {
        compute_costing(
            self.purchase_price,
            self.units_per_package,
            &self.indirect_costs,
            self.profit_margin,
        )
    }

    pub fn coverage(&self) -> CoverageSummary {
        coverage(&self.indirect_costs)
    }

    pub fn set_margin(&mut self, value: f64) {
        self.profit_margin = clamp_margin(value);
    }

    pub fn add_blank_cost(&mut self, id: impl Into<EntryId>) {
        self.indirect_costs.push(IndirectCost::blank(id));
    }

    pub fn remove_cost(&mut self, id: &str) -> bool {
        let before = self.indirect_costs.len();
        self.indirect_costs.retain(|cost| cost.id != id);
        self.indirect_costs.len() != before
    }

    pub fn update_cost(&mut self, id: &str, field: CostField) -> bool {
        let Some(cost) = self.indirect_costs.iter_mut().find(|cost| cost.id == id) else {
            return false;
        };
        match field {
            CostField::Name(name) => cost.name = name,
            CostField::Amount(amount) => cost.amount = amount,
            CostField::DistributionUnits(units) => cost.distribution_units = clamp_units(units),
        }
        true
    }

    /// Appends copies of the presets not yet present by name; returns how many were added.
    pub fn import_presets(
        &mut self,
        presets: &[IndirectCost],
        next_id: impl FnMut() -> String,
    ) -> usize {
        let added = merge_presets(&self.indirect_costs, presets, next_id);
        let count = added.len();
        self.indirect_costs.extend(added);
        count
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.purchase_price.is_nan() || self.purchase_price <= 0.0 {
            return Err(ValidationError::NonPositivePrice);
        }
        Ok(())
    }

    pub fn can_save(&self) -> bool {
        self.validate().is_ok()
    }

    /// Freezes the draft into a history record.
    pub fn snapshot(
        &self,
        id: impl Into<EntryId>,
        timestamp: i64,
    ) -> Result<ProductCalculation, ValidationError> {
        self.validate()?;
        let result = self.result();
        Ok(ProductCalculation {
            id: id.into(),
            name: self.name.trim().to_string(),
            purchase_price: self.purchase_price,
            units_per_package: self.units_per_package,
            indirect_costs: self.indirect_costs.clone(),
            profit_margin: self.profit_margin,
            unit_cost: result.unit_cost,
            total_unit_cost: result.total_unit_cost,
            suggested_price: result.suggested_price,
            profit_per_unit: result.profit_per_unit,
            timestamp,
        })
    }

    /// Clears the product fields after a save; the chosen margin stays.
    pub fn reset(&mut self) {
        *self = Self {
            profit_margin: self.profit_margin,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> impl FnMut() -> String {
        let mut n = 0;
        move || {
            n += 1;
            format!("row-{n}")
        }
    }

    fn filled() -> CalculatorDraft {
        CalculatorDraft {
            name: "Galletas".into(),
            purchase_price: 100.0,
            units_per_package: 10.0,
            profit_margin: 30.0,
            indirect_costs: vec![IndirectCost::new("c1", "Shipping", 20.0, 2.0)],
        }
    }

    #[test]
    fn default_draft_starts_at_thirty_percent() {
        let draft = CalculatorDraft::default();
        assert_eq!(draft.profit_margin, 30.0);
        assert_eq!(draft.units_per_package, 1.0);
        assert!(draft.indirect_costs.is_empty());
        assert!(!draft.can_save());
    }

    #[test]
    fn validation_rejects_blank_name_and_free_products() {
        let mut draft = filled();
        draft.name = "   ".into();
        assert_eq!(draft.validate(), Err(ValidationError::EmptyName));

        let mut draft = filled();
        draft.purchase_price = 0.0;
        assert_eq!(draft.validate(), Err(ValidationError::NonPositivePrice));

        draft.purchase_price = -3.0;
        assert_eq!(
            draft.snapshot("x", 0).unwrap_err(),
            ValidationError::NonPositivePrice
        );
    }

    #[test]
    fn snapshot_copies_costs_and_derived_fields() {
        let draft = filled();
        let calc = draft.snapshot("calc-1", 1_700_000_000_000).unwrap();

        assert_eq!(calc.id, "calc-1");
        assert_eq!(calc.indirect_costs, draft.indirect_costs);
        assert!((calc.unit_cost - 10.0).abs() < 1e-9);
        assert!((calc.total_unit_cost - 20.0).abs() < 1e-9);
        assert!((calc.suggested_price - 26.0).abs() < 1e-9);
        assert!((calc.profit_per_unit - 6.0).abs() < 1e-9);
    }

    #[test]
    fn row_edits_target_one_entry() {
        let mut draft = CalculatorDraft::default();
        draft.add_blank_cost("a");
        draft.add_blank_cost("b");

        assert!(draft.update_cost("b", CostField::Name("Rent".into())));
        assert!(draft.update_cost("b", CostField::Amount(90.0)));
        assert!(draft.update_cost("b", CostField::DistributionUnits(0.0)));
        assert!(!draft.update_cost("missing", CostField::Amount(1.0)));

        assert_eq!(draft.indirect_costs[0], IndirectCost::blank("a"));
        assert_eq!(draft.indirect_costs[1], IndirectCost::new("b", "Rent", 90.0, 1.0));

        assert!(draft.remove_cost("a"));
        assert!(!draft.remove_cost("a"));
        assert_eq!(draft.indirect_costs.len(), 1);
    }

    #[test]
    fn import_reports_added_rows_and_skips_existing_names() {
        let mut draft = filled();
        let presets = vec![
            IndirectCost::new("p1", "shipping", 99.0, 1.0),
            IndirectCost::new("p2", "Rent", 10.0, 1.0),
        ];

        assert_eq!(draft.import_presets(&presets, ids()), 1);
        assert_eq!(draft.indirect_costs.len(), 2);
        assert_eq!(draft.indirect_costs[1].id, "row-1");

        assert_eq!(draft.import_presets(&presets, ids()), 0);
        assert_eq!(draft.indirect_costs.len(), 2);
    }

    #[test]
    fn reset_keeps_margin() {
        let mut draft = filled();
        draft.set_margin(85.0);
        draft.reset();

        assert_eq!(draft.profit_margin, 85.0);
        assert!(draft.name.is_empty());
        assert_eq!(draft.purchase_price, 0.0);
        assert_eq!(draft.units_per_package, 1.0);
        assert!(draft.indirect_costs.is_empty());
    }
}
