//! Request dispatch: the two user actions end to end.
//!
//! Both actions run the same sequence:
//!
//! 1. Trim and check the input. Empty input returns
//!    [`ClientError::EmptyInput`] without touching any panel or the network.
//! 2. Put the target panel in the loading state.
//! 3. Await the backend (one request, no retry, no timeout).
//! 4. Replace the loading state with the result or the error message.
//! 5. On success only, switch to the tab that shows the result.
//!
//! Panels and tabs are reached through [`PanelSink`] and [`TabSink`], which
//! the Dioxus app implements for its signals and tests implement for plain
//! values.

use tracing::{debug, warn};

use crate::backend::Backend;
use crate::error::ClientError;
use crate::input::{validate, InputKind};
use crate::panel::{Completion, Panel, RequestTicket};
use crate::protocol::{MetricTable, StructurePayload};
use crate::tabs::{Tab, TabSet};

/// Something holding a [`Panel`] that the dispatcher may update.
pub trait PanelSink<T> {
    fn update_panel<R>(&mut self, f: impl FnOnce(&mut Panel<T>) -> R) -> R;
}

impl<T> PanelSink<T> for Panel<T> {
    fn update_panel<R>(&mut self, f: impl FnOnce(&mut Panel<T>) -> R) -> R {
        f(self)
    }
}

/// Something holding the tab state.
pub trait TabSink {
    fn activate_tab(&mut self, id: &str);
}

impl TabSink for TabSet {
    fn activate_tab(&mut self, id: &str) {
        self.activate(id);
    }
}

/// Loads a structure by identifier into the viewer panel.
///
/// Returns `Err` only when the input is blank; backend failures end up in
/// the panel as [`PanelState::Error`](crate::panel::PanelState::Error).
pub async fn load_structure<B, P, S>(
    backend: &B,
    raw_id: &str,
    viewer: &mut P,
    tabs: &mut S,
) -> Result<(), ClientError>
where
    B: Backend + ?Sized,
    P: PanelSink<StructurePayload>,
    S: TabSink,
{
    let id = validate(raw_id, InputKind::Identifier)?;
    let ticket = viewer.update_panel(Panel::begin);
    debug!("Loading structure {} (request #{})", id, ticket.number());

    let result = backend.fetch_structure(&id).await;
    let succeeded = result.is_ok();
    let completion = viewer.update_panel(|panel| panel.finish(ticket, result.into()));
    note_completion("viewer", ticket, completion);

    if succeeded {
        tabs.activate_tab(Tab::Viewer.id());
    }
    Ok(())
}

/// Submits a sequence for analysis and fills the results panel.
///
/// Returns `Err` only when the input is blank; backend failures end up in
/// the panel as [`PanelState::Error`](crate::panel::PanelState::Error).
pub async fn analyze_sequence<B, P, S>(
    backend: &B,
    raw_seq: &str,
    results: &mut P,
    tabs: &mut S,
) -> Result<(), ClientError>
where
    B: Backend + ?Sized,
    P: PanelSink<MetricTable>,
    S: TabSink,
{
    let seq = validate(raw_seq, InputKind::Sequence)?;
    let ticket = results.update_panel(Panel::begin);
    debug!(
        "Analyzing sequence of {} chars (request #{})",
        seq.len(),
        ticket.number()
    );

    let result = backend.analyze_sequence(&seq).await;
    let succeeded = result.is_ok();
    let completion = results.update_panel(|panel| panel.finish(ticket, result.into()));
    note_completion("results", ticket, completion);

    if succeeded {
        tabs.activate_tab(Tab::Results.id());
    }
    Ok(())
}

fn note_completion(area: &str, ticket: RequestTicket, completion: Completion) {
    match completion {
        Completion::Latest => {}
        Completion::Superseded => debug!(
            "{} request #{} finished while a newer one is in flight",
            area,
            ticket.number()
        ),
        Completion::OutOfOrder => warn!(
            "{} request #{} finished after a newer one and replaced its output",
            area,
            ticket.number()
        ),
    }
}

