use dioxus::prelude::*;
use protlens_core::dispatch::load_structure;

use crate::components::{use_backend, use_tabs, use_viewer_panel};
use crate::platform::blocking_prompt;
use crate::utils::SignalSink;

/// PDB id field with its Load button.
#[component]
pub fn StructureCard() -> Element {
    let mut pdb_id = use_signal(String::new);
    let backend = use_backend();
    let viewer = use_viewer_panel();
    let tabs = use_tabs();

    let handle_load = use_callback(move |()| {
        let raw = pdb_id();
        let backend = backend.clone();
        spawn(async move {
            let mut viewer = SignalSink(viewer);
            let mut tabs = SignalSink(tabs);
            if let Err(e) = load_structure(&backend, &raw, &mut viewer, &mut tabs).await {
                blocking_prompt(&e.to_string()).await;
            }
        });
    });

    rsx! {
        section { class: "pl-card",
            label { class: "pl-card-label", r#for: "pdbid", "Structure" }
            div { class: "pl-card-row",
                input {
                    id: "pdbid",
                    r#type: "text",
                    class: "pl-input",
                    placeholder: "PDB ID, e.g. 1CRN",
                    value: "{pdb_id}",
                    oninput: move |evt| pdb_id.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            handle_load.call(());
                        }
                    }
                }
                button {
                    id: "loadPdb",
                    class: "pl-btn pl-btn--primary",
                    onclick: move |_| handle_load.call(()),
                    "Load"
                }
            }
        }
    }
}
