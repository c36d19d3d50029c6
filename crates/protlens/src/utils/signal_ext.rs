//! Extension traits and adapters for Dioxus signals.
//!
//! # Mutation
//!
//! Updating a field through a signal otherwise takes a read/clone/set dance:
//!
//! ```ignore
//! let mut tabs = tabs_signal();
//! tabs.select(Tab::Results);
//! tabs_signal.set(tabs);
//! ```
//!
//! [`SignalExt::mutate`] folds that into one call:
//!
//! ```ignore
//! tabs_signal.mutate(|tabs| tabs.select(Tab::Results));
//! ```
//!
//! # Dispatch sinks
//!
//! The request flow in `protlens-core` writes panels and tabs through the
//! `PanelSink` / `TabSink` traits. [`SignalSink`] implements both for
//! signals so a spawned task can drive the UI directly.

use dioxus::prelude::*;
use protlens_core::dispatch::{PanelSink, TabSink};
use protlens_core::panel::Panel;
use protlens_core::tabs::TabSet;

/// Extension trait for Dioxus signals providing mutation helpers.
pub trait SignalExt<T: 'static> {
    /// Mutate the signal's value in place.
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T);
}

impl<T: 'static> SignalExt<T> for Signal<T> {
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut *self.write());
    }
}

/// Signal wrapper that the dispatch flow can write into.
pub struct SignalSink<T: 'static>(pub Signal<T>);

impl<T: 'static> PanelSink<T> for SignalSink<Panel<T>> {
    fn update_panel<R>(&mut self, f: impl FnOnce(&mut Panel<T>) -> R) -> R {
        f(&mut *self.0.write())
    }
}

impl TabSink for SignalSink<TabSet> {
    fn activate_tab(&mut self, id: &str) {
        self.0.mutate(|tabs| tabs.activate(id));
    }
}

