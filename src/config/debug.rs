//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` so debug
//! builds stay readable while working on a single subsystem.

/// Emit UI interaction logs (e.g., marker clicks, filter edits).
pub const PRINT_UI_INTERACTIONS: bool = true;

/// Emit per-resource payload summaries after each fetch resolves
/// (row counts, date coverage, dropped rows).
pub const PRINT_FETCH_DETAILS: bool = false;

/// Emit the join outcome for every change point when reconciling
/// change points against the event annotations.
pub const PRINT_CORRELATION: bool = false;

/// Emit chart projection cache hit/miss diagnostics while rendering the main chart.
pub const PRINT_PLOT_CACHE_STATS: bool = false;

/// Emit details of UI state serialization/deserialization logs.
pub const PRINT_STATE_SERDE: bool = false;

/// Emit shutdown app messages.
pub const PRINT_SHUTDOWN: bool = false;
