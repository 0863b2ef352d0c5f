use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

// ============================================================================
// PriceSeries: full Brent price history as parallel arrays
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    /// Date labels, zero-padded ISO, ascending.
    pub dates: Vec<String>,
    /// Price per barrel in USD, row-aligned with `dates`.
    pub prices: Vec<f64>,
}

impl PriceSeries {
    /// Build a series from parallel arrays, rejecting mismatched lengths.
    /// Everything downstream indexes both arrays with the same row offset,
    /// so the invariant is enforced once here.
    pub fn from_parts(dates: Vec<String>, prices: Vec<f64>) -> Result<Self> {
        if dates.len() != prices.len() {
            return Err(anyhow!(
                "Price series arrays disagree: {} dates vs {} prices",
                dates.len(),
                prices.len()
            ));
        }
        Ok(Self { dates, prices })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn date_at(&self, index: usize) -> Option<&str> {
        self.dates.get(index).map(String::as_str)
    }

    pub fn price_at(&self, index: usize) -> Option<f64> {
        self.prices.get(index).copied()
    }

    pub fn first_date(&self) -> Option<&str> {
        self.dates.first().map(String::as_str)
    }

    pub fn last_date(&self) -> Option<&str> {
        self.dates.last().map(String::as_str)
    }

    /// First and last labels together, for seeding the date filter.
    pub fn full_range(&self) -> Option<(&str, &str)> {
        Some((self.first_date()?, self.last_date()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_rejects_mismatched_arrays() {
        let result = PriceSeries::from_parts(
            vec!["2020-01-31".into(), "2020-02-29".into()],
            vec![58.16],
        );
        let message = result.unwrap_err().to_string();
        assert!(
            message.contains("2 dates vs 1 prices"),
            "error should name both lengths, got: {message}"
        );
    }

    #[test]
    fn full_range_spans_first_to_last() {
        let series = PriceSeries::from_parts(
            vec!["2020-01-31".into(), "2020-02-29".into(), "2020-03-31".into()],
            vec![58.16, 50.52, 22.74],
        )
        .unwrap();
        assert_eq!(series.full_range(), Some(("2020-01-31", "2020-03-31")));
    }

    #[test]
    fn empty_series_has_no_range() {
        let series = PriceSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.full_range(), None);
        assert_eq!(series.price_at(0), None);
    }
}
