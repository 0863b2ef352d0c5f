use chrono::NaiveDate;
use eframe::egui::{Color32, ComboBox, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::domain::DateRange;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};
use crate::utils::TimeUtils;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_UI_INTERACTIONS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Events emitted by the filter panel when the user changes a control
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEventChanged {
    StartDate(String),
    EndDate(String),
    RangeReset,
    EventType(String),
}

/// Panel holding the date window and event type filter controls.
///
/// The panel works on copies of the current filter values and reports
/// edits as events; the app owns the real filter state.
pub struct FilterPanel<'a> {
    date_range: &'a DateRange,
    event_type: String,
    type_options: &'a [String],
    /// First and last date labels of the loaded series, None until prices arrive.
    series_range: Option<(NaiveDate, NaiveDate)>,
}

impl<'a> FilterPanel<'a> {
    pub fn new(
        date_range: &'a DateRange,
        event_type: String,
        type_options: &'a [String],
        series_range: Option<(NaiveDate, NaiveDate)>,
    ) -> Self {
        Self {
            date_range,
            event_type,
            type_options,
            series_range,
        }
    }

    fn render_date_pickers(&mut self, ui: &mut Ui) -> Vec<FilterEventChanged> {
        let mut events = Vec::new();

        ui.label(colored_subsection_heading(&UI_TEXT.date_range_label));

        let Some((series_first, series_last)) = self.series_range else {
            ui.label(
                RichText::new(&UI_TEXT.filters_waiting)
                    .small()
                    .color(Color32::GRAY),
            );
            return events;
        };

        // Unbounded ends display as the series bounds.
        let mut start = self
            .date_range
            .start
            .as_deref()
            .and_then(TimeUtils::parse_date_label)
            .unwrap_or(series_first);
        let mut end = self
            .date_range
            .end
            .as_deref()
            .and_then(TimeUtils::parse_date_label)
            .unwrap_or(series_last);

        ui.horizontal(|ui| {
            if ui
                .add(DatePickerButton::new(&mut start).id_salt("start_date"))
                .changed()
            {
                events.push(FilterEventChanged::StartDate(TimeUtils::format_date_label(
                    start,
                )));
            }
            ui.label(RichText::new("to").small().color(Color32::GRAY));
            if ui
                .add(DatePickerButton::new(&mut end).id_salt("end_date"))
                .changed()
            {
                events.push(FilterEventChanged::EndDate(TimeUtils::format_date_label(
                    end,
                )));
            }
        });

        if ui
            .button(&UI_TEXT.full_range_label)
            .on_hover_text(&UI_TEXT.full_range_hover)
            .clicked()
        {
            events.push(FilterEventChanged::RangeReset);
        }

        events
    }

    fn render_type_selector(&mut self, ui: &mut Ui) -> Option<String> {
        let previously_selected = self.event_type.clone();
        let mut changed = None;

        ui.label(colored_subsection_heading(&UI_TEXT.event_type_label));
        ComboBox::from_id_salt("Event Type")
            .selected_text(self.event_type.clone())
            .show_ui(ui, |ui| {
                for option in self.type_options {
                    if ui
                        .selectable_value(&mut self.event_type, option.clone(), option)
                        .clicked()
                    {
                        changed = Some(self.event_type.clone());
                    }
                }
            });

        // Selection can also change without a click being reported.
        if changed.is_none() && self.event_type != previously_selected {
            changed = Some(self.event_type.clone());
        }

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            if let Some(selected) = &changed {
                log::info!("A new event type was selected: {selected:?}");
            }
        }

        changed
    }
}

impl<'a> Panel for FilterPanel<'a> {
    type Event = FilterEventChanged;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        section_heading(ui, &UI_TEXT.filters_heading);

        events.extend(self.render_date_pickers(ui));
        spaced_separator(ui);
        if let Some(event_type) = self.render_type_selector(ui) {
            events.push(FilterEventChanged::EventType(event_type));
        }
        ui.add_space(20.0);

        events
    }
}
