#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{DashboardSource, FetchError, ResourceKind, ResourceSlot};
pub use domain::DateRange;
pub use models::{ChangePoint, MarketEvent, PriceSeries};
pub use ui::BrentScopeApp;
pub use utils::app_time;

use std::sync::Arc;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Serve the embedded demo dataset instead of calling the backend
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Base URL of the analysis backend
    #[arg(long, default_value = config::API.default_base_url)]
    pub api_base: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    source: Arc<dyn DashboardSource>,
) -> Box<dyn eframe::App> {
    let app = ui::BrentScopeApp::new(cc, source);
    Box::new(app)
}
