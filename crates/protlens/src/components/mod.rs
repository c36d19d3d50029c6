//! UI components for the Protlens application.
//!
//! # Component Layout
//!
//! - `structure_card`: PDB id input and Load button
//! - `sequence_card`: sequence/FASTA input and Analyze button
//! - `tab_bar`: tab buttons for the viewer and results panels
//! - `viewer_panel`: 3D structure panel
//! - `results_panel`: metric list panel
//! - `status`: loading and error placeholders shared by both panels
//!
//! # Context Providers
//!
//! [`App`] owns all state and provides it as context:
//!
//! ```ignore
//! let tabs = use_tabs();            // Signal<TabSet>
//! let viewer = use_viewer_panel();  // Signal<Panel<StructurePayload>>
//! let results = use_results_panel(); // Signal<Panel<MetricTable>>
//! let backend = use_backend();      // HttpBackend
//! ```

mod results_panel;
mod sequence_card;
mod status;
mod structure_card;
mod tab_bar;
mod viewer_panel;

pub use results_panel::ResultsPanel;
pub use sequence_card::SequenceCard;
pub use status::StatusBlock;
pub use structure_card::StructureCard;
pub use tab_bar::TabBar;
pub use viewer_panel::ViewerPanel;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use protlens_core::panel::Panel;
use protlens_core::tabs::{Tab, TabSet};
use protlens_core::{HttpBackend, MetricTable, StructurePayload};

/// Tab state context.
pub fn use_tabs() -> Signal<TabSet> {
    use_context::<Signal<TabSet>>()
}

/// Viewer panel context.
pub fn use_viewer_panel() -> Signal<Panel<StructurePayload>> {
    use_context::<Signal<Panel<StructurePayload>>>()
}

/// Results panel context.
pub fn use_results_panel() -> Signal<Panel<MetricTable>> {
    use_context::<Signal<Panel<MetricTable>>>()
}

/// Backend client context.
pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>()
}

/// `class` value for a tab button or panel.
pub(crate) fn tab_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let backend = HttpBackend::default();
        info!("Using backend at {}", backend.base());
        backend
    });

    let tabs = use_signal(|| TabSet::new(Tab::Viewer));
    use_context_provider(|| tabs);

    let viewer = use_signal(Panel::<StructurePayload>::new);
    use_context_provider(|| viewer);

    let results = use_signal(Panel::<MetricTable>::new);
    use_context_provider(|| results);

    rsx! {
        div { class: "pl-app",
            header { class: "pl-appbar",
                div { class: "pl-logo",
                    span { class: "pl-logo-word", "Prot" }
                    span { class: "pl-logo-word pl-logo-word--accent", "lens" }
                }
            }

            section { class: "pl-inputs",
                StructureCard {}
                SequenceCard {}
            }

            TabBar {}

            main { class: "pl-panels",
                ViewerPanel {}
                ResultsPanel {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_class() {
        assert_eq!(tab_class("tab", true), "tab active");
        assert_eq!(tab_class("tab-content", false), "tab-content");
    }
}
