//! Platform-specific user interaction.
//!
//! - **Web**: `window.alert()`, which blocks until dismissed
//! - **Desktop**: native warning dialog via rfd

/// Shows a blocking prompt with `message` and waits until it is dismissed.
#[cfg(target_arch = "wasm32")]
pub async fn blocking_prompt(message: &str) {
    use dioxus::logger::tracing::warn;

    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                warn!("alert() failed: {:?}", e);
            }
        }
        None => warn!("No window for prompt: {}", message),
    }
}

/// Shows a blocking prompt with `message` and waits until it is dismissed.
#[cfg(not(target_arch = "wasm32"))]
pub async fn blocking_prompt(message: &str) {
    use dioxus::logger::tracing::debug;
    use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

    debug!("Prompting: {}", message);
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Protlens")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
