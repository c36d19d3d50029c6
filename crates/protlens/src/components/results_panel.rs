use dioxus::prelude::*;
use protlens_core::metrics::metric_rows;
use protlens_core::panel::PanelState;
use protlens_core::tabs::Tab;

use crate::components::{tab_class, use_results_panel, use_tabs, StatusBlock};

/// Results tab content: one `key: value` row per metric, in backend order.
#[component]
pub fn ResultsPanel() -> Element {
    let tabs = use_tabs();
    let results_panel = use_results_panel();

    let active = tabs.read().is_active(Tab::Results);
    let body = match &results_panel.read().state {
        PanelState::Empty => rsx! {
            p { class: "pl-empty", "Analyze a sequence to see its metrics here." }
        },
        PanelState::Loading => rsx! {
            StatusBlock { error: None }
        },
        PanelState::Error(message) => rsx! {
            StatusBlock { error: Some(message.clone()) }
        },
        PanelState::Ready(table) => {
            let rows = metric_rows(table);
            rsx! {
                for row in rows {
                    div { key: "{row.key}", class: "metric",
                        span { class: "metric-key", "{row.key}:" }
                        " "
                        span { class: "metric-value", "{row.value}" }
                    }
                }
            }
        }
    };

    rsx! {
        div { id: Tab::Results.id(), class: tab_class("tab-content", active),
            div { id: "results", class: "pl-results", {body} }
        }
    }
}
