use crate::domain::DateRange;

use super::app::BrentScopeApp;
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_UI_INTERACTIONS;

impl BrentScopeApp {
    /// Opens the detail view for a change point. Indices that no longer
    /// exist (a click racing a reconcile) are ignored.
    pub(super) fn select_change_point(&mut self, cp_index: usize) {
        if cp_index >= self.data_state.change_points().len() {
            return;
        }

        self.selection.select(cp_index);

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[select] Opened details for change point {cp_index}");
        }
    }

    pub(super) fn dismiss_selection(&mut self) {
        if !self.selection.is_active() {
            return;
        }

        self.selection.dismiss();

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[select] Dismissed the change point details");
        }
    }

    pub(super) fn set_event_type(&mut self, event_type: String) {
        if self.filter.event_type == event_type {
            return;
        }

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[filter] Event type set to {event_type:?}");
        }

        self.filter.event_type = event_type;
    }

    pub(super) fn set_range_start(&mut self, date_label: String) {
        if self.filter.date_range.start.as_deref() == Some(date_label.as_str()) {
            return;
        }

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[filter] Range start set to {date_label}");
        }

        self.filter.date_range.start = Some(date_label);
    }

    pub(super) fn set_range_end(&mut self, date_label: String) {
        if self.filter.date_range.end.as_deref() == Some(date_label.as_str()) {
            return;
        }

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[filter] Range end set to {date_label}");
        }

        self.filter.date_range.end = Some(date_label);
    }

    /// Resets the date window to cover the whole loaded series.
    pub(super) fn reset_date_range(&mut self) {
        let full = match self.data_state.series().and_then(|s| s.full_range()) {
            Some((first, last)) => DateRange::full(first, last),
            None => DateRange::default(),
        };

        if self.filter.date_range == full {
            return;
        }

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("[filter] Date range reset to the full series");
        }

        self.filter.date_range = full;
    }

    pub(super) fn toggle_event_list(&mut self) {
        self.show_event_list = !self.show_event_list;

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!(
                "[view] Event list {}",
                if self.show_event_list { "shown" } else { "hidden" }
            );
        }
    }
}
