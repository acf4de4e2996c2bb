use dioxus::prelude::*;

use crate::domain::{clamp_units, per_unit_indirect, ProductCalculation};
use crate::ui::theme;
use crate::util::format::{date_label, datetime_label, money, percent};

#[component]
pub fn CalculationCard(
    item: ProductCalculation,
    expanded: bool,
    on_toggle: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let toggle_id = item.id.clone();
    let delete_id = item.id.clone();
    let toggle_label = if expanded { "Close" } else { "Details" };
    let margin = percent(item.profit_margin, 1);

    let breakdown = item
        .indirect_costs
        .iter()
        .map(|cost| {
            let label = format!(
                "{} ({} / {}u)",
                cost.name,
                money(cost.amount),
                clamp_units(cost.distribution_units)
            );
            (cost.id.clone(), label, money(per_unit_indirect(cost)))
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "card",
            div {
                class: "card-head",
                div {
                    class: "grow",
                    div { class: "row",
                        h3 { class: "card-title", "{item.name}" }
                        span { class: "badge", "{date_label(item.timestamp)}" }
                    }
                    div { class: "card-meta",
                        span { "Direct cost: " strong { "{money(item.unit_cost)}" } }
                        span { "Margin: " strong { class: "positive", "{margin}" } }
                    }
                }
                div { class: "row",
                    div {
                        p { class: "card-price-label", "Suggested price" }
                        p { class: "card-price", "{money(item.suggested_price)}" }
                    }
                    button {
                        class: "btn-soft",
                        onclick: move |_| on_toggle.call(toggle_id.clone()),
                        "{toggle_label}"
                    }
                    button {
                        class: theme::BTN_ICON_DANGER,
                        title: "Delete record",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        "🗑"
                    }
                }
            }
            if expanded {
                div {
                    class: "card-details",
                    div {
                        h4 { class: "details-title", "Cost breakdown" }
                        div { class: "breakdown-row",
                            span { "Direct cost (purchase)" }
                            span { "{money(item.unit_cost)}" }
                        }
                        for (id, label, share) in breakdown {
                            div { key: "{id}", class: "breakdown-row",
                                span { "{label}" }
                                span { "{share}" }
                            }
                        }
                        div { class: "breakdown-total",
                            span { "Total unit cost" }
                            span { "{money(item.total_unit_cost)}" }
                        }
                    }
                    div {
                        h4 { class: "details-title", "Profit projection" }
                        div { class: "breakdown-row",
                            span { "Sale price" }
                            span { class: "positive", "{money(item.suggested_price)}" }
                        }
                        div { class: "breakdown-row",
                            span { "Applied margin" }
                            span { "{margin}" }
                        }
                        div { class: "breakdown-total",
                            span { "Net profit / unit" }
                            span { class: "positive", "+{money(item.profit_per_unit)}" }
                        }
                        p {
                            class: "frozen-note",
                            "* Calculated on {datetime_label(item.timestamp)}. Indirect costs reflect the values configured at that moment."
                        }
                    }
                }
            }
        }
    }
}
