pub mod calculation_card;
pub mod cost_row;
pub mod kpi_card;
pub mod preset_row;
pub mod toast;
