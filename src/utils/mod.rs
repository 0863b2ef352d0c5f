//! Small shared helpers with no domain knowledge of their own.

pub mod app_time;
pub mod maths_utils;
pub mod time_utils;

// Re-export commonly used items
pub use maths_utils::{get_max, get_min, get_min_max, normalize_abs_max};
pub use time_utils::TimeUtils;
