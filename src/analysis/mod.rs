// Event filtering and change-point/event correlation
pub mod correlation;
pub mod event_filter;

// Re-export commonly used types
pub use correlation::{event_for_change_point, find_event_for_date};
pub use event_filter::{EVENT_TYPE_ALL, EventFilter, event_type_options};
