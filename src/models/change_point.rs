use serde::{Deserialize, Serialize};

use crate::models::series::PriceSeries;

/// One structural break detected in the price series.
///
/// `index` is a row offset into the series arrays, not a date. Keeping the
/// offset (rather than a date copy) means a change point and its price row
/// can never drift apart.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ChangePoint {
    pub index: usize,
    /// Signed mean price shift across the break, USD per barrel.
    pub impact: f64,
}

impl ChangePoint {
    pub fn in_bounds(&self, series: &PriceSeries) -> bool {
        self.index < series.len()
    }

    /// Date label of the row this break points at.
    pub fn date_in<'a>(&self, series: &'a PriceSeries) -> Option<&'a str> {
        series.date_at(self.index)
    }

    pub fn price_in(&self, series: &PriceSeries) -> Option<f64> {
        series.price_at(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> PriceSeries {
        PriceSeries::from_parts(
            vec!["2014-10-31".into(), "2014-11-28".into(), "2014-12-31".into()],
            vec![85.86, 70.15, 57.33],
        )
        .unwrap()
    }

    #[test]
    fn resolves_date_and_price_through_the_series() {
        let cp = ChangePoint {
            index: 1,
            impact: -15.7,
        };
        let series = series();
        assert!(cp.in_bounds(&series));
        assert_eq!(cp.date_in(&series), Some("2014-11-28"));
        assert_eq!(cp.price_in(&series), Some(70.15));
    }

    #[test]
    fn out_of_bounds_index_resolves_to_nothing() {
        let cp = ChangePoint {
            index: 3,
            impact: 4.2,
        };
        let series = series();
        assert!(!cp.in_bounds(&series));
        assert_eq!(cp.date_in(&series), None);
    }

    #[test]
    fn decode_ignores_unknown_payload_fields() {
        let cp: ChangePoint =
            serde_json::from_str(r#"{"index": 2, "impact": -12.5, "confidence": 0.97}"#).unwrap();
        assert_eq!(
            cp,
            ChangePoint {
                index: 2,
                impact: -12.5
            }
        );
    }
}
