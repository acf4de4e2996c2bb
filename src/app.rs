use dioxus::{prelude::*, signals::Signal};
use tracing::error;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, HistoryPage, PresetsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_record, Record},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/history")]
    History {},
    #[route("/settings")]
    Presets {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| AppState::from_persisted(load_persisted_state()));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Writes the saved-calculation history; failures surface as an error toast.
pub fn persist_inventory(state: &Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let snapshot = state.with(|st| st.inventory.clone());
    if let Err(err) = save_persisted_record(Record::Inventory, &snapshot) {
        error!(error = %err, "failed to persist calculation history");
        push_toast(
            toasts,
            ToastKind::Error,
            format!("Could not save history: {err}"),
        );
    }
}

/// Writes the global indirect-cost presets; failures surface as an error toast.
pub fn persist_presets(state: &Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let snapshot = state.with(|st| st.presets.clone());
    if let Err(err) = save_persisted_record(Record::GlobalCosts, &snapshot) {
        error!(error = %err, "failed to persist indirect-cost presets");
        push_toast(
            toasts,
            ToastKind::Error,
            format!("Could not save presets: {err}"),
        );
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn History() -> Element {
    rsx! { Shell { HistoryPage {} } }
}

#[component]
pub fn Presets() -> Element {
    rsx! { Shell { PresetsPage {} } }
}
