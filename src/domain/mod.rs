// Domain types and value objects
pub mod date_range;

// Re-export commonly used types
pub use date_range::DateRange;
