//! Every user-facing string in one place.
//!
//! Keeping the copy out of the render code makes wording changes (and the
//! eventual pass for consistency of capitalisation) a one-file job.

use std::sync::LazyLock;

pub struct UiText {
    // Window / headings
    pub app_title: String,
    pub filters_heading: String,
    pub events_heading: String,

    // Filter controls
    pub date_range_label: String,
    pub full_range_label: String,
    pub full_range_hover: String,
    pub event_type_label: String,
    pub filters_waiting: String,

    // Legend / axes
    pub price_series_name: String,
    pub change_point_prefix: String,
    pub x_axis_label: String,
    pub y_axis_label: String,

    // Tooltips
    pub tooltip_price_prefix: String,
    pub tooltip_change_point_prefix: String,
    pub tooltip_event_prefix: String,

    // Change point detail window
    pub detail_title: String,
    pub detail_date_label: String,
    pub detail_impact_label: String,
    pub detail_event_label: String,
    pub detail_no_event: String,
    pub close_label: String,

    // Loading / error states
    pub loading_heading: String,
    pub loading_hint: String,
    pub price_error_heading: String,
    pub price_error_hint: String,
    pub notice_change_points_unavailable: String,
    pub notice_events_unavailable: String,
    pub no_events_match: String,

    // Status bar
    pub source_label: String,
    pub events_shown_label: String,

    // Help window
    pub help_title: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Brent Oil Price Analysis Dashboard".into(),
    filters_heading: "Filters".into(),
    events_heading: "Key Market Events".into(),

    date_range_label: "Date Range:".into(),
    full_range_label: "Full range".into(),
    full_range_hover: "Reset the date filter to cover the whole price history".into(),
    event_type_label: "Event Type:".into(),
    filters_waiting: "Waiting for price data...".into(),

    price_series_name: "Brent Oil Price".into(),
    change_point_prefix: "Change Point".into(),
    x_axis_label: "Date".into(),
    y_axis_label: "Price (USD per barrel)".into(),

    tooltip_price_prefix: "Price".into(),
    tooltip_change_point_prefix: "Change Point".into(),
    tooltip_event_prefix: "Event".into(),

    detail_title: "Change Point Details".into(),
    detail_date_label: "Date:".into(),
    detail_impact_label: "Quantitative Impact:".into(),
    detail_event_label: "Associated Event:".into(),
    detail_no_event: "None".into(),
    close_label: "Close".into(),

    loading_heading: "Preparing dashboard...".into(),
    loading_hint: "Fetching prices, change points and events".into(),
    price_error_heading: "⚠ Unable to Chart Prices".into(),
    price_error_hint: "Check that the analysis backend is running, or relaunch with --demo"
        .into(),
    notice_change_points_unavailable: "change point markers unavailable".into(),
    notice_events_unavailable: "event annotations unavailable".into(),
    no_events_match: "No events match the current filters".into(),

    source_label: "Source".into(),
    events_shown_label: "Events shown".into(),

    help_title: "⌨️ Keyboard Shortcuts".into(),
});
