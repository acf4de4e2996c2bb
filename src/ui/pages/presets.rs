use dioxus::prelude::*;

use crate::{
    app::persist_presets,
    domain::{AppState, IndirectCost},
    ui::components::{
        preset_row::{PresetEdit, PresetRow},
        toast::{push_toast, ToastKind, ToastMessage},
    },
    util::generate_id,
};

const NEW_PRESET_NAME: &str = "New cost";

#[component]
pub fn PresetsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut editing = use_signal(|| None::<String>);
    // A freshly added row stays out of the saved presets until its first commit.
    let mut pending = use_signal(|| None::<IndirectCost>);

    let presets = state.with(|st| listed_presets(&st.presets, pending().as_ref()));
    let editing_id = editing();

    let on_add = move |_| {
        let placeholder = IndirectCost::new(generate_id(), NEW_PRESET_NAME, 0.0, 1.0);
        editing.set(Some(placeholder.id.clone()));
        pending.set(Some(placeholder));
    };

    let on_edit = move |id: String| editing.set(Some(id));

    let on_cancel = move |_: ()| {
        editing.set(None);
        pending.set(None);
    };

    let on_commit = move |edit: PresetEdit| {
        state.with_mut(|st| st.commit_preset(&edit.id, edit.name, edit.amount, edit.units));
        editing.set(None);
        pending.set(None);
        persist_presets(&state, toasts);
        push_toast(toasts, ToastKind::Success, "Indirect cost saved.");
    };

    let on_delete = move |id: String| {
        if pending().is_some_and(|draft| draft.id == id) {
            pending.set(None);
            editing.set(None);
            return;
        }
        let removed = state.with_mut(|st| st.delete_preset(&id));
        if removed {
            if editing().as_deref() == Some(id.as_str()) {
                editing.set(None);
            }
            persist_presets(&state, toasts);
            push_toast(toasts, ToastKind::Info, "Indirect cost deleted.");
        }
    };

    rsx! {
        div { class: "panel",
            div { class: "spread",
                div {
                    h2 { class: "panel-title", "Indirect cost settings" }
                    p { class: "panel-subtitle", "Define fixed costs to apply to your calculations." }
                }
                button { class: "btn-accent", onclick: on_add, "+ Add cost" }
            }

            div { class: "preset-list",
                if presets.is_empty() {
                    p { class: "empty-hint", "No indirect costs configured." }
                }
                for preset in presets.iter() {
                    PresetRow {
                        key: "{preset.id}",
                        preset: preset.clone(),
                        editing: editing_id.as_deref() == Some(preset.id.as_str()),
                        on_edit,
                        on_delete,
                        on_commit,
                        on_cancel,
                    }
                }
            }

            div { class: "panel-note-accent",
                strong { "Saving" }
                p { "Changes here are saved automatically and can be loaded into the cost calculator." }
            }
        }
    }
}

/// Saved presets followed by the not-yet-committed row, if any.
fn listed_presets(saved: &[IndirectCost], pending: Option<&IndirectCost>) -> Vec<IndirectCost> {
    saved.iter().chain(pending).cloned().collect()
}
