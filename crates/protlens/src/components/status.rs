use dioxus::prelude::*;
use protlens_core::config::LOADING_TEXT;

/// Single-line placeholder that fills a panel while loading or after a failure.
#[component]
pub fn StatusBlock(error: Option<String>) -> Element {
    match error {
        Some(message) => rsx! {
            div { class: "loading loading--error", role: "alert", "{message}" }
        },
        None => rsx! {
            div { class: "loading", "{LOADING_TEXT}" }
        },
    }
}
