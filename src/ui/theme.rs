//! Class-name helpers shared by pages; the rules live in `assets/main.css`.

// ============================================
// NAVIGATION
// ============================================

pub fn tab(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}

// ============================================
// INPUTS
// ============================================

pub const INPUT: &str = "input";
pub const INPUT_NAME: &str = "input input-sm grow";
pub const INPUT_AMOUNT: &str = "input input-sm input-num";
pub const INPUT_UNITS: &str = "input input-sm input-units";

// ============================================
// BUTTONS
// ============================================

pub const BTN_ICON: &str = "btn-icon";
pub const BTN_ICON_DANGER: &str = "btn-icon btn-icon-danger";

pub fn link_button(info: bool) -> &'static str {
    if info {
        "btn-link btn-link-info"
    } else {
        "btn-link"
    }
}

// ============================================
// METRICS
// ============================================

pub fn metric_value(strong: bool) -> &'static str {
    if strong {
        "metric-value metric-value-strong"
    } else {
        "metric-value"
    }
}
