// Data sources for the three dashboard resources
#[cfg(not(target_arch = "wasm32"))]
pub mod api_source;
pub mod demo;
pub mod source;

// Re-export commonly used types
#[cfg(not(target_arch = "wasm32"))]
pub use api_source::ApiSource;
pub use demo::DemoSource;
pub use source::{DashboardSource, FetchError, ResourceKind, ResourceSlot};
