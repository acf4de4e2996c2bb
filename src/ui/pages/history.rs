use dioxus::prelude::*;

use crate::{
    app::persist_inventory,
    domain::AppState,
    ui::components::{
        calculation_card::CalculationCard,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn HistoryPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut expanded = use_signal(|| None::<String>);

    let items = state.with(|st| st.inventory.clone());
    if items.is_empty() {
        return rsx! {
            div { class: "empty-state",
                p { class: "empty-title", "No saved calculations yet" }
                p { class: "empty-hint", "Use the calculator to create your first record." }
            }
        };
    }

    let open_id = expanded();
    let count = items.len();
    let cards = items
        .into_iter()
        .map(|item| {
            let is_open = open_id.as_deref() == Some(item.id.as_str());
            (item, is_open)
        })
        .collect::<Vec<_>>();

    let on_toggle = move |id: String| {
        let next = if expanded().as_deref() == Some(id.as_str()) {
            None
        } else {
            Some(id)
        };
        expanded.set(next);
    };

    let on_delete = move |id: String| {
        let removed = state.with_mut(|st| st.delete_calculation(&id));
        if !removed {
            return;
        }
        if expanded().as_deref() == Some(id.as_str()) {
            expanded.set(None);
        }
        persist_inventory(&state, toasts);
        push_toast(toasts, ToastKind::Info, "Calculation removed from history.");
    };

    rsx! {
        div { class: "stack",
            div { class: "section-head",
                h2 { class: "section-title", "Saved calculations" }
                span { class: "counter", "{count} records" }
            }
            for (item, is_open) in cards.iter() {
                CalculationCard {
                    key: "{item.id}",
                    item: item.clone(),
                    expanded: *is_open,
                    on_toggle,
                    on_delete,
                }
            }
        }
    }
}
