use crate::models::{ChangePoint, MarketEvent, PriceSeries};

/// First event (in upstream order) whose date exactly equals `date_label`.
/// Earlier rows win ties; there is no fuzzy or nearest-date matching.
pub fn find_event_for_date<'a>(
    events: &'a [MarketEvent],
    date_label: &str,
) -> Option<&'a MarketEvent> {
    events.iter().find(|event| event.date == date_label)
}

/// Event associated with a change point, resolved through the series row the
/// change point addresses. An out-of-bounds change point has no date, so it
/// associates with nothing.
pub fn event_for_change_point<'a>(
    series: &PriceSeries,
    change_point: &ChangePoint,
    events: &'a [MarketEvent],
) -> Option<&'a MarketEvent> {
    let date = change_point.date_in(series)?;
    find_event_for_date(events, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: &str, description: &str) -> MarketEvent {
        MarketEvent {
            date: date.into(),
            description: description.into(),
            event_type: "Event".into(),
        }
    }

    #[test]
    fn exact_match_only_no_nearest_date() {
        let events = vec![event("2020-03-30", "Near miss"), event("2020-04-30", "Hit")];
        assert!(find_event_for_date(&events, "2020-03-31").is_none());
        assert_eq!(
            find_event_for_date(&events, "2020-04-30").map(|e| e.description.as_str()),
            Some("Hit")
        );
    }

    #[test]
    fn first_event_wins_when_dates_collide() {
        let events = vec![event("2022-02-28", "A"), event("2022-02-28", "B")];
        assert_eq!(
            find_event_for_date(&events, "2022-02-28").map(|e| e.description.as_str()),
            Some("A")
        );
    }

    #[test]
    fn change_point_resolves_through_its_series_row() {
        let series = PriceSeries::from_parts(
            vec!["2022-01-31".into(), "2022-02-28".into()],
            vec![89.26, 100.99],
        )
        .unwrap();
        let events = vec![event("2022-02-28", "Russia invades Ukraine")];

        let matched = ChangePoint {
            index: 1,
            impact: 11.7,
        };
        assert_eq!(
            event_for_change_point(&series, &matched, &events).map(|e| e.date.as_str()),
            Some("2022-02-28")
        );

        let unmatched = ChangePoint {
            index: 0,
            impact: 3.1,
        };
        assert!(event_for_change_point(&series, &unmatched, &events).is_none());

        let out_of_bounds = ChangePoint {
            index: 9,
            impact: 1.0,
        };
        assert!(event_for_change_point(&series, &out_of_bounds, &events).is_none());
    }
}
