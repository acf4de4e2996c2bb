use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    #[props(default)] strong: bool,
) -> Element {
    rsx! {
        div {
            class: "metric",
            p { class: "metric-label", "{title}" }
            p { class: "{theme::metric_value(strong)}", "{value}" }
            if let Some(desc) = description {
                p { class: "metric-desc", "{desc}" }
            }
        }
    }
}
