use serde::{Deserialize, Serialize};

/// Inclusive date window over backend date labels.
///
/// Bounds are kept as raw labels rather than parsed dates: labels are
/// zero-padded ISO dates, so comparing the strings compares the dates.
/// `None` on either side leaves that side open.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self { start, end }
    }

    /// Window covering an entire series, first label through last.
    pub fn full(first: &str, last: &str) -> Self {
        Self {
            start: Some(first.to_owned()),
            end: Some(last.to_owned()),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, date_label: &str) -> bool {
        if let Some(start) = &self.start {
            if date_label < start.as_str() {
                return false;
            }
        }
        if let Some(end) = &self.end {
            if date_label > end.as_str() {
                return false;
            }
        }
        true
    }
}
