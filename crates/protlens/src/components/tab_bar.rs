use dioxus::prelude::*;
use protlens_core::tabs::Tab;

use crate::components::{tab_class, use_tabs};
use crate::utils::SignalExt;

/// Tab buttons; each activates its own panel.
#[component]
pub fn TabBar() -> Element {
    let mut tabs = use_tabs();

    rsx! {
        nav { class: "pl-tabs",
            for tab in Tab::ALL {
                button {
                    key: "{tab.id()}",
                    class: tab_class("tab", tabs.read().is_active(tab)),
                    "data-tab": "{tab.id()}",
                    onclick: move |_| tabs.mutate(|t| t.activate(tab.id())),
                    "{tab.label()}"
                }
            }
        }
    }
}
