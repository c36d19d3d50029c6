use dioxus::prelude::*;
use protlens::components::App as ProtlensApp;

const MAIN_CSS: Asset = asset!("/assets/protlens.css");

/// 3Dmol.js, which provides the `$3Dmol` global the viewer binds to.
const VIEWER_SCRIPT: &str = "https://3Dmol.org/build/3Dmol-min.js";

fn main() {
    // Cross-platform logger (web console + desktop stdout)
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Protlens")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1100.0, 850.0))
                .with_min_inner_size(LogicalSize::new(640.0, 520.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // asset! has issues on desktop, inline the stylesheet there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/protlens.css")} }
        }
        document::Script { src: VIEWER_SCRIPT }

        body { class: "pl-body",
            ProtlensApp {}
        }
    }
}
