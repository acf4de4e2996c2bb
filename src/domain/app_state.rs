use tracing::debug;

use super::draft::CalculatorDraft;
use super::entities::{IndirectCost, ProductCalculation};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Saved calculations, most recent first.
    pub inventory: Vec<ProductCalculation>,
    /// Global indirect-cost presets, in insertion order.
    pub presets: Vec<IndirectCost>,
    /// Calculator form; never persisted.
    pub draft: CalculatorDraft,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InventorySummary {
    pub total_products: usize,
    pub average_margin: f64,
    pub total_suggested_value: f64,
}

impl AppState {
    pub fn from_persisted(persisted: PersistedState) -> Self {
        let mut state = Self::default();
        state.apply_persisted(persisted);
        state
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.inventory = persisted.inventory;
        self.presets = persisted.presets;
    }

    pub fn save_calculation(&mut self, calculation: ProductCalculation) {
        self.inventory.retain(|item| item.id != calculation.id);
        debug!(id = %calculation.id, name = %calculation.name, "saved calculation");
        self.inventory.insert(0, calculation);
    }

    pub fn delete_calculation(&mut self, id: &str) -> bool {
        let before = self.inventory.len();
        self.inventory.retain(|item| item.id != id);
        let removed = self.inventory.len() != before;
        debug!(%id, removed, "delete calculation");
        removed
    }

    pub fn add_preset(&mut self, preset: IndirectCost) {
        if let Some(existing) = self.presets.iter_mut().find(|p| p.id == preset.id) {
            *existing = preset;
        } else {
            debug!(id = %preset.id, "added preset");
            self.presets.push(preset);
        }
    }

    pub fn update_preset(&mut self, id: &str, name: String, amount: f64, units: f64) -> bool {
        let Some(preset) = self.presets.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        preset.name = name;
        preset.amount = amount;
        preset.distribution_units = units;
        debug!(%id, "updated preset");
        true
    }

    /// Applies an edit from the presets editor. Unknown ids are appended as new
    /// presets; returns `true` when the preset was new.
    pub fn commit_preset(&mut self, id: &str, name: String, amount: f64, units: f64) -> bool {
        if self.update_preset(id, name.clone(), amount, units) {
            return false;
        }
        self.add_preset(IndirectCost::new(id, name, amount, units));
        true
    }

    pub fn delete_preset(&mut self, id: &str) -> bool {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != id);
        self.presets.len() != before
    }

    pub fn inventory_summary(&self) -> InventorySummary {
        let total_products = self.inventory.len();
        let average_margin = if total_products == 0 {
            0.0
        } else {
            self.inventory.iter().map(|item| item.profit_margin).sum::<f64>()
                / total_products as f64
        };

        InventorySummary {
            total_products,
            average_margin,
            total_suggested_value: self.inventory.iter().map(|item| item.suggested_price).sum(),
        }
    }
}

/// The two collections written to disk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersistedState {
    pub inventory: Vec<ProductCalculation>,
    pub presets: Vec<IndirectCost>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculation(id: &str, margin: f64, price: f64, costs: Vec<IndirectCost>) -> ProductCalculation {
        ProductCalculation {
            id: id.to_string(),
            name: format!("Product {id}"),
            purchase_price: 10.0,
            units_per_package: 1.0,
            indirect_costs: costs,
            profit_margin: margin,
            unit_cost: 10.0,
            total_unit_cost: 10.0,
            suggested_price: price,
            profit_per_unit: price - 10.0,
            timestamp: 0,
        }
    }

    #[test]
    fn history_is_most_recent_first() {
        let mut state = AppState::default();
        state.save_calculation(calculation("a", 10.0, 11.0, vec![]));
        state.save_calculation(calculation("b", 20.0, 12.0, vec![]));

        let ids: Vec<_> = state.inventory.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn saving_an_existing_id_replaces_it() {
        let mut state = AppState::default();
        state.save_calculation(calculation("a", 10.0, 11.0, vec![]));
        state.save_calculation(calculation("b", 10.0, 11.0, vec![]));
        state.save_calculation(calculation("a", 50.0, 15.0, vec![]));

        assert_eq!(state.inventory.len(), 2);
        assert_eq!(state.inventory[0].id, "a");
        assert_eq!(state.inventory[0].profit_margin, 50.0);
    }

    #[test]
    fn delete_removes_only_that_id_and_snapshots_stay_frozen() {
        let rent = IndirectCost::new("p1", "Rent", 100.0, 10.0);
        let mut state = AppState::default();
        state.add_preset(rent.clone());
        state.save_calculation(calculation("a", 10.0, 22.0, vec![rent.clone()]));
        state.save_calculation(calculation("b", 10.0, 22.0, vec![rent.clone()]));
        state.save_calculation(calculation("c", 10.0, 22.0, vec![rent.clone()]));

        assert!(state.update_preset("p1", "Rent 2025".into(), 500.0, 5.0));
        assert!(state.delete_calculation("b"));
        assert!(!state.delete_calculation("b"));

        let ids: Vec<_> = state.inventory.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);
        for item in &state.inventory {
            assert_eq!(item.indirect_costs, vec![rent.clone()]);
            assert_eq!(item.suggested_price, 22.0);
        }
        assert_eq!(state.presets[0].amount, 500.0);
    }

    #[test]
    fn presets_update_in_place_and_delete_by_id() {
        let mut state = AppState::default();
        state.add_preset(IndirectCost::new("p1", "Rent", 100.0, 10.0));
        state.add_preset(IndirectCost::new("p2", "Power", 40.0, 4.0));
        state.add_preset(IndirectCost::new("p1", "Rent", 120.0, 10.0));

        assert_eq!(state.presets.len(), 2);
        assert_eq!(state.presets[0].amount, 120.0);

        assert!(state.update_preset("p2", "Electricity".into(), 45.0, 3.0));
        assert!(!state.update_preset("nope", String::new(), 0.0, 1.0));
        assert_eq!(state.presets[1], IndirectCost::new("p2", "Electricity", 45.0, 3.0));

        assert!(state.delete_preset("p1"));
        assert_eq!(state.presets.len(), 1);
    }

    #[test]
    fn committing_an_unsaved_preset_appends_it_once() {
        let mut state = AppState::default();
        state.add_preset(IndirectCost::new("p1", "Rent", 100.0, 10.0));

        assert!(state.commit_preset("p2", "Packaging".into(), 12.0, 2.5));
        assert!(!state.commit_preset("p2", "Packaging".into(), 15.0, 2.5));
        assert!(!state.commit_preset("p1", "Rent".into(), 90.0, 10.0));

        assert_eq!(
            state.presets,
            vec![
                IndirectCost::new("p1", "Rent", 90.0, 10.0),
                IndirectCost::new("p2", "Packaging", 15.0, 2.5),
            ]
        );
    }

    #[test]
    fn summary_averages_margin_and_totals_prices() {
        let mut state = AppState::default();
        assert_eq!(state.inventory_summary(), InventorySummary::default());

        state.save_calculation(calculation("a", 20.0, 12.0, vec![]));
        state.save_calculation(calculation("b", 40.0, 14.5, vec![]));

        let summary = state.inventory_summary();
        assert_eq!(summary.total_products, 2);
        assert_eq!(summary.average_margin, 30.0);
        assert_eq!(summary.total_suggested_value, 26.5);
    }

    #[test]
    fn persisted_collections_replace_state_but_not_draft() {
        let mut state = AppState::default();
        state.draft.name = "in progress".into();
        state.apply_persisted(PersistedState {
            inventory: vec![calculation("a", 10.0, 11.0, vec![])],
            presets: vec![IndirectCost::new("p1", "Rent", 1.0, 1.0)],
        });

        assert_eq!(state.inventory.len(), 1);
        assert_eq!(state.presets.len(), 1);
        assert_eq!(state.draft.name, "in progress");
    }
}
