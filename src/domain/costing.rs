//! Cost allocation: direct unit cost, per-unit share of indirect costs, and
//! the suggested price for a target margin.

use std::collections::HashSet;

use super::entities::IndirectCost;

pub const DEFAULT_MARGIN_PCT: f64 = 30.0;
pub const MARGIN_MIN_PCT: f64 = 0.0;
pub const MARGIN_MAX_PCT: f64 = 200.0;
pub const MARGIN_STEP_PCT: f64 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CostingResult {
    pub unit_cost: f64,
    pub total_indirect_per_unit: f64,
    pub total_unit_cost: f64,
    pub suggested_price: f64,
    pub profit_per_unit: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoverageSummary {
    /// Sum of the raw amounts of every listed indirect cost.
    pub total_listed: f64,
    /// Share of `total_listed` recovered by a single sale, in percent.
    pub coverage_pct: f64,
}

/// Denominator used for package sizes and distribution units. Fractions are
/// kept; anything below 1 or non-finite becomes 1.
pub fn clamp_units(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.max(1.0)
    } else {
        1.0
    }
}

pub fn clamp_margin(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MARGIN_MIN_PCT, MARGIN_MAX_PCT)
    } else {
        DEFAULT_MARGIN_PCT
    }
}

/// Reads a money amount from user input; anything unusable counts as zero.
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Reads a unit count from user input; the result never drops below 1.
pub fn parse_units(input: &str) -> f64 {
    input.trim().parse::<f64>().map(clamp_units).unwrap_or(1.0)
}

pub fn per_unit_indirect(cost: &IndirectCost) -> f64 {
    cost.amount / clamp_units(cost.distribution_units)
}

pub fn compute_costing(
    purchase_price: f64,
    units_per_package: f64,
    indirect_costs: &[IndirectCost],
    profit_margin: f64,
) -> CostingResult {
    let unit_cost = purchase_price / clamp_units(units_per_package);
    let total_indirect_per_unit = indirect_costs.iter().map(per_unit_indirect).sum::<f64>();
    let total_unit_cost = unit_cost + total_indirect_per_unit;
    let suggested_price = total_unit_cost * (1.0 + profit_margin / 100.0);

    CostingResult {
        unit_cost,
        total_indirect_per_unit,
        total_unit_cost,
        suggested_price,
        profit_per_unit: suggested_price - total_unit_cost,
    }
}

pub fn coverage(indirect_costs: &[IndirectCost]) -> CoverageSummary {
    let total_listed = indirect_costs.iter().map(|cost| cost.amount).sum::<f64>();
    let per_unit = indirect_costs.iter().map(per_unit_indirect).sum::<f64>();
    let denominator = if total_listed == 0.0 { 1.0 } else { total_listed };

    CoverageSummary {
        total_listed,
        coverage_pct: per_unit / denominator * 100.0,
    }
}

/// Builds the entries to append when loading presets into a working list.
///
/// Names compare case-insensitively against the working list and against
/// presets already taken in this pass. Each copy gets a fresh id from
/// `next_id`.
pub fn merge_presets(
    working: &[IndirectCost],
    presets: &[IndirectCost],
    mut next_id: impl FnMut() -> String,
) -> Vec<IndirectCost> {
    let mut taken: HashSet<String> = working.iter().map(|cost| cost.name.to_lowercase()).collect();

    presets
        .iter()
        .filter(|preset| taken.insert(preset.name.to_lowercase()))
        .map(|preset| IndirectCost {
            id: next_id(),
            name: preset.name.clone(),
            amount: preset.amount,
            distribution_units: clamp_units(preset.distribution_units),
        })
        .collect()
}
