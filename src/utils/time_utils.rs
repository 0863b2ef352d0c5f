use chrono::NaiveDate;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Parse a backend date label into a calendar date.
    /// Labels are zero-padded ISO dates, so lexicographic order on the
    /// raw strings matches chronological order.
    pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(label, Self::STANDARD_TIME_FORMAT).ok()
    }

    /// Format a calendar date back into the label form used across the app.
    pub fn format_date_label(date: NaiveDate) -> String {
        date.format(Self::STANDARD_TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_labels_symmetrically() {
        let date = TimeUtils::parse_date_label("2020-03-31").unwrap();
        assert_eq!(TimeUtils::format_date_label(date), "2020-03-31");
    }

    #[test]
    fn rejects_malformed_labels() {
        assert!(TimeUtils::parse_date_label("2020-13-01").is_none());
        assert!(TimeUtils::parse_date_label("not a date").is_none());
    }

    #[test]
    fn lexicographic_order_matches_date_order_for_padded_labels() {
        // The filter compares raw labels, so this property must hold.
        let labels = ["1998-12-31", "2008-09-30", "2020-04-30", "2020-11-30"];
        let mut sorted = labels.to_vec();
        sorted.sort();
        assert_eq!(sorted, labels.to_vec(), "labels should already be ordered");
    }
}
