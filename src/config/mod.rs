//! Configuration module for the dashboard application.

pub mod api;
pub mod debug;
pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use api::API;
pub use persistence::APP_STATE_PATH;
pub use plot::PLOT_CONFIG;
