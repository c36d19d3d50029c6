use dioxus::prelude::*;
use protlens_core::dispatch::analyze_sequence;
use protlens_core::input::residue_count;

use crate::components::{use_backend, use_results_panel, use_tabs};
use crate::platform::blocking_prompt;
use crate::utils::SignalSink;

/// Sequence / FASTA text area with its Analyze button.
#[component]
pub fn SequenceCard() -> Element {
    let mut sequence = use_signal(String::new);
    let backend = use_backend();
    let results = use_results_panel();
    let tabs = use_tabs();

    let residues = residue_count(&sequence.read());
    let hint = match residues {
        0 => String::new(),
        1 => "1 residue".to_string(),
        n => format!("{n} residues"),
    };

    rsx! {
        section { class: "pl-card",
            label { class: "pl-card-label", r#for: "sequence", "Sequence" }
            textarea {
                id: "sequence",
                class: "pl-textarea",
                rows: "6",
                placeholder: ">header (optional)\nMVLSPADKTNVKAAWGKVGAHAGEYGAEALERMFLSFPTTKTYFPHF",
                value: "{sequence}",
                oninput: move |evt| sequence.set(evt.value()),
            }
            div { class: "pl-card-row pl-card-row--end",
                span { class: "pl-hint", "{hint}" }
                button {
                    id: "analyzeSeq",
                    class: "pl-btn pl-btn--primary",
                    onclick: move |_| {
                        let raw = sequence();
                        let backend = backend.clone();
                        spawn(async move {
                            let mut results = SignalSink(results);
                            let mut tabs = SignalSink(tabs);
                            if let Err(e) =
                                analyze_sequence(&backend, &raw, &mut results, &mut tabs).await
                            {
                                blocking_prompt(&e.to_string()).await;
                            }
                        });
                    },
                    "Analyze"
                }
            }
        }
    }
}
