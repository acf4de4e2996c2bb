use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::{components::kpi_card::KpiCard, theme};
use crate::util::{
    format::{money_grouped, percent},
    version::{version_label, APP_NAME, APP_TAGLINE},
};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let summary = state.with(|st| st.inventory_summary());
    let (title, subtitle) = hero_copy(&current_route);

    rsx! {
        div { class: "app",
            header {
                class: "app-header",
                div { class: "app-header-inner",
                    div { class: "brand",
                        span { class: "brand-mark", "$" }
                        div {
                            h1 { class: "brand-title", "{APP_NAME}" }
                            p { class: "brand-tag", "{APP_TAGLINE}" }
                        }
                    }

                    nav { class: "tabs",
                        NavButton { active: matches!(current_route, Route::Calculator {}), onclick: move |_| { nav.push(Route::Calculator {}); }, label: "Calculator" }
                        NavButton { active: matches!(current_route, Route::History {}), onclick: move |_| { nav.push(Route::History {}); }, label: "History" }
                        NavButton { active: matches!(current_route, Route::Presets {}), onclick: move |_| { nav.push(Route::Presets {}); }, label: "Settings" }
                    }

                    span { class: "version", "{version_label()}" }
                }
            }
            main { class: "content",
                section { class: "hero",
                    h2 { class: "hero-title", "{title}" }
                    p { class: "hero-subtitle", "{subtitle}" }
                }
                {children}
            }
            footer { class: "footer",
                div { class: "footer-inner",
                    KpiCard {
                        title: "Total products".to_string(),
                        value: summary.total_products.to_string(),
                    }
                    KpiCard {
                        title: "Average margin".to_string(),
                        value: percent(summary.average_margin, 1),
                    }
                    KpiCard {
                        title: "Inventory value (suggested)".to_string(),
                        value: money_grouped(summary.total_suggested_value),
                    }
                }
            }
        }
    }
}

fn hero_copy(route: &Route) -> (&'static str, &'static str) {
    match route {
        Route::Calculator {} => (
            "Cost Sheet Calculator",
            "Find the right sale price for your products from direct costs, indirect costs and a profit margin.",
        ),
        Route::History {} => (
            "Calculation History",
            "Review every calculation saved for your products.",
        ),
        Route::Presets {} => (
            "General Settings",
            "Set up the global indirect costs that recur across your business.",
        ),
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::tab(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
