use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use protlens_core::panel::PanelState;
use protlens_core::tabs::Tab;

use crate::components::{tab_class, use_tabs, use_viewer_panel, StatusBlock};
use crate::viewer::{self, VIEWER_ELEMENT_ID};

/// Viewer tab content: `#viewer` holds either a placeholder or the 3Dmol canvas.
///
/// The Ready branch renders `#viewer` with no children of its own, because
/// 3Dmol owns that subtree. Switching to any other state swaps the element
/// out, which drops the old canvas with it. A failed render turns the panel
/// into an error, so the area never shows more than one message.
#[component]
pub fn ViewerPanel() -> Element {
    let tabs = use_tabs();
    let mut viewer_panel = use_viewer_panel();

    use_effect(move || {
        let Some(payload) = viewer_panel.read().state.ready().cloned() else {
            return;
        };
        if let Err(e) = viewer::render_structure(VIEWER_ELEMENT_ID, &payload) {
            error!("Structure render failed: {}", e);
            viewer_panel.write().fail(e);
        }
    });

    let active = tabs.read().is_active(Tab::Viewer);
    let host = match &viewer_panel.read().state {
        PanelState::Ready(_) if viewer::is_supported() => rsx! {
            div { id: VIEWER_ELEMENT_ID, class: "pl-viewer" }
        },
        PanelState::Ready(payload) => rsx! {
            div { id: VIEWER_ELEMENT_ID, class: "pl-viewer pl-viewer--text",
                p { class: "pl-hint", "3D rendering is available in the web build." }
                pre { class: "pl-structure-text", "{payload.as_str()}" }
            }
        },
        PanelState::Loading => rsx! {
            div { id: VIEWER_ELEMENT_ID, class: "pl-viewer",
                StatusBlock { error: None }
            }
        },
        PanelState::Error(message) => rsx! {
            div { id: VIEWER_ELEMENT_ID, class: "pl-viewer",
                StatusBlock { error: Some(message.clone()) }
            }
        },
        PanelState::Empty => rsx! {
            div { id: VIEWER_ELEMENT_ID, class: "pl-viewer",
                p { class: "pl-empty", "Load a structure to view it here." }
            }
        },
    };

    rsx! {
        div { id: Tab::Viewer.id(), class: tab_class("tab-content", active),
            {host}
        }
    }
}
