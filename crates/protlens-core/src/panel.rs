//! Display area state.
//!
//! Each display area (the viewer and the results list) shows exactly one of
//! nothing, a loading placeholder, an error, or a rendered value. Every
//! transition replaces the whole state.
//!
//! Requests are not cancelled or deduplicated: if two requests target the
//! same area, whichever response arrives last is what stays on screen. Each
//! request gets a [`RequestTicket`] so that case can at least be detected and
//! logged when a response lands on top of a newer one.

use crate::error::ClientError;

/// What a display area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    Empty,
    Loading,
    Error(String),
    Ready(T),
}

impl<T> PanelState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PanelState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PanelState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PanelState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        PanelState::Empty
    }
}

impl<T> From<Result<T, ClientError>> for PanelState<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => PanelState::Ready(value),
            Err(e) => PanelState::Error(e.to_string()),
        }
    }
}

/// Sequence number handed to a request when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn number(&self) -> u64 {
        self.0
    }
}

/// How a completed request relates to the others on the same area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Most recently started request.
    Latest,
    /// A newer request has started but has not rendered yet.
    Superseded,
    /// A newer request already rendered and this response replaced it.
    OutOfOrder,
}

/// Per-area request counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation {
    issued: u64,
    rendered: u64,
}

impl Generation {
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    pub fn complete(&mut self, ticket: RequestTicket) -> Completion {
        let completion = if ticket.0 < self.rendered {
            Completion::OutOfOrder
        } else if ticket.0 < self.issued {
            Completion::Superseded
        } else {
            Completion::Latest
        };
        self.rendered = self.rendered.max(ticket.0);
        completion
    }

    /// Requests started but not yet completed, ignoring out-of-order ones.
    pub fn pending(&self) -> u64 {
        self.issued - self.rendered
    }
}

/// A display area: its state plus its request counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel<T> {
    pub state: PanelState<T>,
    pub generation: Generation,
}

impl<T> Panel<T> {
    pub fn new() -> Self {
        Self {
            state: PanelState::Empty,
            generation: Generation::default(),
        }
    }

    /// Shows the loading placeholder and issues a ticket for the request.
    pub fn begin(&mut self) -> RequestTicket {
        self.state = PanelState::Loading;
        self.generation.issue()
    }

    /// Replaces the state with the request's outcome.
    pub fn finish(&mut self, ticket: RequestTicket, state: PanelState<T>) -> Completion {
        self.state = state;
        self.generation.complete(ticket)
    }

    /// Replaces a value that could not be displayed with an error.
    ///
    /// Leaves the request counter alone.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = PanelState::Error(message.into());
    }
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: PanelState<u32> = Ok(7).into();
        assert_eq!(ok.ready(), Some(&7));

        let err: PanelState<u32> = Err(ClientError::NotFound { id: "9xyz".into() }).into();
        assert_eq!(err.error(), Some("PDB 9xyz not found"));
    }

    #[test]
    fn test_begin_then_finish() {
        let mut panel = Panel::<&str>::new();
        let ticket = panel.begin();
        assert!(panel.state.is_loading());
        assert_eq!(panel.generation.pending(), 1);

        let completion = panel.finish(ticket, PanelState::Ready("done"));
        assert_eq!(completion, Completion::Latest);
        assert_eq!(panel.state, PanelState::Ready("done"));
        assert_eq!(panel.generation.pending(), 0);
    }

    #[test]
    fn test_in_order_overlap() {
        let mut generation = Generation::default();
        let first = generation.issue();
        let second = generation.issue();

        assert_eq!(generation.complete(first), Completion::Superseded);
        assert_eq!(generation.complete(second), Completion::Latest);
    }

    #[test]
    fn test_out_of_order_overlap() {
        let mut generation = Generation::default();
        let first = generation.issue();
        let second = generation.issue();

        assert_eq!(generation.complete(second), Completion::Latest);
        assert_eq!(generation.complete(first), Completion::OutOfOrder);
        assert_eq!(generation.pending(), 0);
    }

    #[test]
    fn test_display_failure_is_replaced_by_next_request() {
        let mut panel = Panel::<&str>::new();
        let ticket = panel.begin();
        panel.finish(ticket, PanelState::Ready("1crn"));
        panel.fail("3Dmol viewer unavailable");
        assert_eq!(panel.state.error(), Some("3Dmol viewer unavailable"));
        assert_eq!(panel.generation.pending(), 0);

        let ticket = panel.begin();
        assert_eq!(panel.state, PanelState::Loading);
        panel.finish(ticket, PanelState::Error("PDB 9zzz not found".into()));
        assert_eq!(panel.state.error(), Some("PDB 9zzz not found"));
    }

    #[test]
    fn test_late_response_still_replaces_state() {
        let mut panel = Panel::<u8>::new();
        let first = panel.begin();
        let second = panel.begin();
        panel.finish(second, PanelState::Ready(2));
        panel.finish(first, PanelState::Ready(1));
        assert_eq!(panel.state, PanelState::Ready(1));
    }
}
