//! Fixed configuration constants.
//!
//! The backend address is baked in at build time. Set `PROTLENS_API_BASE`
//! while compiling to point a build at a different backend; nothing reads it
//! at runtime.
//!
//! ```
//! use protlens_core::config::{API_BASE, STRUCTURE_PATH};
//!
//! let url = format!("{API_BASE}{STRUCTURE_PATH}");
//! assert!(url.ends_with("/fetch/pdb"));
//! ```

// =============================================================================
// Backend
// =============================================================================

/// Backend address used when no build-time override is given.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Backend address for this build.
pub const API_BASE: &str = match option_env!("PROTLENS_API_BASE") {
    Some(base) => base,
    None => DEFAULT_API_BASE,
};

/// Structure download endpoint (GET).
pub const STRUCTURE_PATH: &str = "/fetch/pdb";

/// Query parameter carrying the structure identifier.
pub const STRUCTURE_QUERY_KEY: &str = "pdbid";

/// Sequence analysis endpoint (POST, JSON body).
pub const ANALYZE_PATH: &str = "/analyze/sequence";

// =============================================================================
// Structure viewer
// =============================================================================

/// Height the viewer area is locked to before each render.
pub const VIEWER_HEIGHT: &str = "500px";

/// Viewer background color.
pub const VIEWER_BACKGROUND: &str = "white";

/// Format name handed to the viewer together with the structure text.
pub const STRUCTURE_FORMAT: &str = "pdb";

/// Color scheme applied to the cartoon representation.
pub const CARTOON_COLOR: &str = "spectrum";

// =============================================================================
// Tabs
// =============================================================================

/// Id of the structure viewer tab and its panel.
pub const VIEWER_TAB_ID: &str = "viewer-tab";

/// Id of the analysis results tab and its panel.
pub const RESULTS_TAB_ID: &str = "results-tab";

// =============================================================================
// UI text
// =============================================================================

/// Prompt shown when the identifier field is empty.
pub const IDENTIFIER_PROMPT: &str = "Enter PDB ID";

/// Prompt shown when the sequence box is empty.
pub const SEQUENCE_PROMPT: &str = "Paste sequence or FASTA";

/// Placeholder shown while a request is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Analysis error text used when the backend gives no `detail`.
pub const ANALYZE_FALLBACK_ERROR: &str = "Bad sequence";
