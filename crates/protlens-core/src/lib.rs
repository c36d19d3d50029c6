//! # Protlens Core
//!
//! Platform-independent logic behind the protlens structure viewer and
//! sequence analyzer.
//!
//! This crate owns everything that does not touch a DOM: input validation,
//! the backend wire format, the HTTP client, tab and panel state, and the
//! request dispatch flow. Front ends (the Dioxus app and the CLI) supply the
//! rendering.
//!
//! ## Modules
//!
//! - [`config`] - Backend address, endpoint paths, viewer and UI constants
//! - [`error`] - Client error taxonomy
//! - [`input`] - Trimming and emptiness checks for user input
//! - [`protocol`] - Request URLs, payloads and response interpretation
//! - [`backend`] - `Backend` trait and the reqwest-based implementation
//! - [`metrics`] - Turning an analysis result into display rows
//! - [`tabs`] - Single-active-tab state
//! - [`panel`] - Display area state and request generations
//! - [`dispatch`] - Load-structure and analyze-sequence flows

#![forbid(unsafe_code)]

pub mod backend;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod metrics;
pub mod panel;
pub mod protocol;
pub mod tabs;

pub use backend::{Backend, HttpBackend};
pub use dispatch::{analyze_sequence, load_structure, PanelSink, TabSink};
pub use error::ClientError;
pub use input::InputKind;
pub use metrics::{metric_rows, MetricRow};
pub use panel::{Completion, Generation, Panel, PanelState, RequestTicket};
pub use protocol::{MetricTable, StructurePayload};
pub use tabs::{Tab, TabSet};
