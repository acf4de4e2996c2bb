use dioxus::prelude::*;

use crate::domain::{parse_amount, parse_units, CostField, IndirectCost};
use crate::ui::theme;

/// Editable row of the calculator's working cost list.
///
/// Keeps the raw text of each input locally so partially typed numbers
/// (`"12."`, `""`) survive re-renders; the parsed value goes to `on_change`.
#[component]
pub fn CostRow(
    cost: IndirectCost,
    on_change: EventHandler<(String, CostField)>,
    on_remove: EventHandler<String>,
) -> Element {
    let mut name = use_signal(|| cost.name.clone());
    let mut amount = use_signal(|| amount_text(cost.amount));
    let mut units = use_signal(|| cost.distribution_units.to_string());

    let id_name = cost.id.clone();
    let id_amount = cost.id.clone();
    let id_units = cost.id.clone();
    let id_remove = cost.id.clone();

    rsx! {
        div {
            class: "cost-row",
            input {
                class: theme::INPUT_NAME,
                r#type: "text",
                placeholder: "Name (e.g. Shipping)",
                value: name(),
                oninput: move |evt| {
                    let value = evt.value();
                    name.set(value.clone());
                    on_change.call((id_name.clone(), CostField::Name(value)));
                },
            }
            input {
                class: theme::INPUT_AMOUNT,
                r#type: "number",
                placeholder: "Total",
                value: amount(),
                oninput: move |evt| {
                    let value = evt.value();
                    let parsed = parse_amount(&value);
                    amount.set(value);
                    on_change.call((id_amount.clone(), CostField::Amount(parsed)));
                },
            }
            span { class: "slash", "/" }
            input {
                class: theme::INPUT_UNITS,
                r#type: "number",
                placeholder: "Units",
                title: "Units this cost is spread across",
                value: units(),
                oninput: move |evt| {
                    let value = evt.value();
                    let parsed = parse_units(&value);
                    units.set(value);
                    on_change.call((id_units.clone(), CostField::DistributionUnits(parsed)));
                },
            }
            button {
                class: theme::BTN_ICON_DANGER,
                title: "Remove cost",
                onclick: move |_| on_remove.call(id_remove.clone()),
                "✕"
            }
        }
    }
}

/// Zero shows as an empty field, like a fresh form.
pub fn amount_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}
