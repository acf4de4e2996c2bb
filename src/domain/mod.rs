//! Costing logic and application state live here.

pub mod app_state;
pub mod costing;
pub mod draft;
pub mod entities;

pub use app_state::{AppState, PersistedState};
pub use costing::{
    clamp_units, parse_amount, parse_units, per_unit_indirect, MARGIN_MAX_PCT, MARGIN_MIN_PCT,
    MARGIN_STEP_PCT,
};
pub use draft::CostField;
pub use entities::{IndirectCost, ProductCalculation};
