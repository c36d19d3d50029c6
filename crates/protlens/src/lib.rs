//! Protlens - protein structure viewer and sequence analyzer.
//!
//! A Dioxus front end for an external structure/analysis backend:
//!
//! - **Structure**: enter a PDB id, fetch the structure text, and render it
//!   with 3Dmol.js as a spectrum-colored cartoon
//! - **Sequence**: paste a sequence or FASTA record and list the metrics the
//!   backend computes for it
//!
//! Request flow, wire format and view state live in `protlens-core`; this
//! crate only wires them to signals and markup.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: full functionality, 3Dmol.js loaded from its CDN
//! - **Desktop**: sequence analysis works; the 3D viewer is web-only

pub mod components;
pub mod platform;
pub mod utils;
pub mod viewer;
