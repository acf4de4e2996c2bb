use dioxus::prelude::*;

use super::cost_row::amount_text;
use crate::domain::{clamp_units, parse_amount, parse_units, per_unit_indirect, IndirectCost};
use crate::ui::theme;
use crate::util::format::money;

/// Parsed values from the inline preset editor.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetEdit {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub units: f64,
}

#[component]
pub fn PresetRow(
    preset: IndirectCost,
    editing: bool,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
    on_commit: EventHandler<PresetEdit>,
    on_cancel: EventHandler<()>,
) -> Element {
    if editing {
        return rsx! {
            div { class: "preset-row",
                PresetEditor { preset, on_commit, on_cancel }
            }
        };
    }

    let edit_id = preset.id.clone();
    let delete_id = preset.id.clone();
    let per_unit = money(per_unit_indirect(&preset));

    rsx! {
        div {
            class: "preset-row",
            div {
                class: "grow",
                p { class: "preset-name", "{preset.name}" }
                div { class: "preset-meta",
                    span { "Total: {money(preset.amount)}" }
                    span { "Spread: {clamp_units(preset.distribution_units)}u" }
                    span { class: "positive", "Per unit: {per_unit}" }
                }
            }
            div { class: "row",
                button {
                    class: theme::BTN_ICON,
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    "✎"
                }
                button {
                    class: theme::BTN_ICON_DANGER,
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "🗑"
                }
            }
        }
    }
}

/// Mounted fresh each time editing starts, so the inputs start from the stored preset.
#[component]
fn PresetEditor(
    preset: IndirectCost,
    on_commit: EventHandler<PresetEdit>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut name = use_signal(|| preset.name.clone());
    let mut amount = use_signal(|| amount_text(preset.amount));
    let mut units = use_signal(|| clamp_units(preset.distribution_units).to_string());
    let id = preset.id.clone();

    rsx! {
        div {
            class: "preset-editor",
            input {
                class: theme::INPUT_NAME,
                r#type: "text",
                placeholder: "Name",
                autofocus: true,
                value: name(),
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                class: "input input-sm",
                r#type: "number",
                placeholder: "Total amount",
                value: amount(),
                oninput: move |evt| amount.set(evt.value()),
            }
            input {
                class: "input input-sm",
                r#type: "number",
                placeholder: "Units",
                title: "Estimated units that should cover this cost",
                value: units(),
                oninput: move |evt| units.set(evt.value()),
            }
        }
        div { class: "row",
            button {
                class: "btn-icon btn-icon-ok",
                title: "Save",
                onclick: move |_| {
                    on_commit.call(PresetEdit {
                        id: id.clone(),
                        name: name().trim().to_string(),
                        amount: parse_amount(&amount()),
                        units: parse_units(&units()),
                    });
                },
                "✓"
            }
            button {
                class: theme::BTN_ICON_DANGER,
                title: "Cancel",
                onclick: move |_| on_cancel.call(()),
                "✕"
            }
        }
    }
}
