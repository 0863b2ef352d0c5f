// Domain models for the price dashboard
// These modules contain pure data shapes independent of UI/visualization

pub mod change_point;
pub mod event;
pub mod projection;
pub mod series;

// Re-export key types for convenience
pub use change_point::ChangePoint;
pub use event::MarketEvent;
pub use projection::{ChartDataset, ChartProjection, DatasetKind};
pub use series::PriceSeries;
