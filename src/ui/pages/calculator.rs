use dioxus::prelude::*;

use crate::{
    app::{persist_inventory, Route},
    domain::{
        parse_amount, parse_units, AppState, CostField, MARGIN_MAX_PCT, MARGIN_MIN_PCT,
        MARGIN_STEP_PCT,
    },
    ui::{
        components::{
            cost_row::{amount_text, CostRow},
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::{
        format::{money, percent},
        generate_id, now_millis,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let draft = state.with(|st| st.draft.clone());
    let has_presets = state.with(|st| !st.presets.is_empty());

    // Raw text of the product inputs; the draft holds the parsed values.
    let mut name_input = use_signal(|| draft.name.clone());
    let mut price_input = use_signal(|| amount_text(draft.purchase_price));
    let mut units_input = use_signal(|| draft.units_per_package.to_string());

    let result = draft.result();
    let coverage = draft.coverage();
    let can_save = draft.can_save();
    let margin_label = percent(draft.profit_margin, 1);
    let coverage_label = format!("{:.2}%", coverage.coverage_pct);
    let costs = draft.indirect_costs.clone();

    let on_add_cost = move |_| {
        state.with_mut(|st| st.draft.add_blank_cost(generate_id()));
    };

    let on_import = move |_| {
        let added = state.with_mut(|st| {
            let presets = st.presets.clone();
            st.draft.import_presets(&presets, generate_id)
        });
        if added == 0 {
            push_toast(
                toasts,
                ToastKind::Warning,
                "All configured costs are already applied, or none are configured.",
            );
        } else {
            push_toast(
                toasts,
                ToastKind::Success,
                format!("Loaded {added} configured cost(s)."),
            );
        }
    };

    let on_row_change = move |(id, field): (String, CostField)| {
        state.with_mut(|st| {
            st.draft.update_cost(&id, field);
        });
    };

    let on_row_remove = move |id: String| {
        state.with_mut(|st| {
            st.draft.remove_cost(&id);
        });
    };

    let on_save = move |_| {
        let snapshot = state.with(|st| st.draft.snapshot(generate_id(), now_millis()));
        match snapshot {
            Ok(calculation) => {
                let name = calculation.name.clone();
                state.with_mut(|st| {
                    st.save_calculation(calculation);
                    st.draft.reset();
                });
                name_input.set(String::new());
                price_input.set(String::new());
                units_input.set("1".to_string());
                persist_inventory(&state, toasts);
                push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Saved \"{name}\" to history."),
                );
                nav.push(Route::History {});
            }
            Err(err) => {
                push_toast(toasts, ToastKind::Warning, format!("Cannot save: {err}."));
            }
        }
    };

    rsx! {
        div { class: "grid-2",
            section {
                class: "panel",
                h2 { class: "panel-title", "Product details" }

                div { class: "field",
                    label { class: "field-label", "Product name" }
                    input {
                        class: theme::INPUT,
                        r#type: "text",
                        placeholder: "e.g. Butter cookies",
                        value: name_input(),
                        oninput: move |evt| {
                            let value = evt.value();
                            name_input.set(value.clone());
                            state.with_mut(|st| st.draft.name = value);
                        },
                    }
                }

                div { class: "row",
                    div { class: "field grow",
                        label { class: "field-label", "Purchase price ($)" }
                        input {
                            class: theme::INPUT,
                            r#type: "number",
                            value: price_input(),
                            oninput: move |evt| {
                                let value = evt.value();
                                let parsed = parse_amount(&value);
                                price_input.set(value);
                                state.with_mut(|st| st.draft.purchase_price = parsed);
                            },
                        }
                    }
                    div { class: "field grow",
                        label { class: "field-label", "Units per package" }
                        input {
                            class: theme::INPUT,
                            r#type: "number",
                            value: units_input(),
                            oninput: move |evt| {
                                let value = evt.value();
                                let parsed = parse_units(&value);
                                units_input.set(value);
                                state.with_mut(|st| st.draft.units_per_package = parsed);
                            },
                        }
                    }
                }

                div { class: "field",
                    div { class: "spread",
                        label { class: "field-label", "Indirect costs (per unit)" }
                        div { class: "row",
                            if has_presets {
                                button {
                                    class: theme::link_button(true),
                                    onclick: on_import,
                                    "Load configured"
                                }
                            }
                            button {
                                class: theme::link_button(false),
                                onclick: on_add_cost,
                                "+ Add cost"
                            }
                        }
                    }
                    div {
                        for cost in costs.iter() {
                            CostRow {
                                key: "{cost.id}",
                                cost: cost.clone(),
                                on_change: on_row_change,
                                on_remove: on_row_remove,
                            }
                        }
                    }
                }

                div { class: "field",
                    label { class: "field-label",
                        "Target profit margin: "
                        strong { "{margin_label}" }
                    }
                    input {
                        class: "range",
                        r#type: "range",
                        min: "{MARGIN_MIN_PCT}",
                        max: "{MARGIN_MAX_PCT}",
                        step: "{MARGIN_STEP_PCT}",
                        value: "{draft.profit_margin}",
                        oninput: move |evt| {
                            if let Ok(value) = evt.value().parse::<f64>() {
                                state.with_mut(|st| st.draft.set_margin(value));
                            }
                        },
                    }
                }

                button {
                    class: "btn-primary",
                    disabled: !can_save,
                    onclick: on_save,
                    "Save to history"
                }
            }

            section {
                class: "panel-muted",
                div {
                    h2 { class: "panel-title", "Cost analysis" }

                    KpiCard {
                        title: "Unit cost (direct)".to_string(),
                        value: money(result.unit_cost),
                    }

                    div { class: "metric",
                        p { class: "metric-label", "Indirect cost share" }
                        p { class: "metric-value", "{money(result.total_indirect_per_unit)}" }
                        div { class: "coverage",
                            p { class: "coverage-title", "Coverage" }
                            if draft.indirect_costs.is_empty() {
                                p { class: "coverage-empty", "No indirect costs applied" }
                            } else {
                                div { class: "spread",
                                    span { "Total listed costs:" }
                                    span { class: "coverage-value", "{money(coverage.total_listed)}" }
                                }
                                div { class: "spread",
                                    span { "Covered per sale:" }
                                    span { class: "coverage-value-accent", "{coverage_label}" }
                                }
                            }
                        }
                    }

                    KpiCard {
                        title: "Total cost per unit".to_string(),
                        value: money(result.total_unit_cost),
                        strong: true,
                    }

                    div { class: "highlight",
                        p { class: "highlight-label", "Suggested sale price" }
                        div { class: "row",
                            p { class: "highlight-price", "{money(result.suggested_price)}" }
                            span { class: "positive", "({margin_label} margin)" }
                        }
                        p { class: "highlight-note",
                            "Net profit per unit: "
                            strong { "{money(result.profit_per_unit)}" }
                        }
                    }
                }

                p {
                    class: "panel-note",
                    "* The suggested price adds the direct cost to each indirect cost's proportional share (amount / units to spread across). Fixed expenses are recovered gradually with every sale instead of being loaded onto a single product."
                }
            }
        }
    }
}
