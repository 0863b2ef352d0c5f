use std::sync::Arc;

use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};

use crate::analysis::EventFilter;
use crate::data::{DashboardSource, ResourceSlot};
use crate::models::{ChangePoint, MarketEvent, PriceSeries};
use crate::ui::app_async::FetchOutcome;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::debug::{PRINT_SHUTDOWN, PRINT_STATE_SERDE};

/// Which chart element currently has a detail view open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    ChangePoint(usize),
}

impl Selection {
    pub fn select(&mut self, cp_index: usize) {
        *self = Selection::ChangePoint(cp_index);
    }

    pub fn dismiss(&mut self) {
        *self = Selection::None;
    }

    pub fn change_point(&self) -> Option<usize> {
        match self {
            Selection::ChangePoint(cp_index) => Some(*cp_index),
            Selection::None => None,
        }
    }

    pub fn is_active(&self) -> bool {
        *self != Selection::None
    }
}

/// Runtime data fetched from the active source. Each resource loads and
/// fails independently.
#[derive(Default)]
pub struct DataState {
    pub prices: ResourceSlot<PriceSeries>,
    pub change_points: ResourceSlot<Vec<ChangePoint>>,
    pub events: ResourceSlot<Vec<MarketEvent>>,
    /// Set once change points have been validated against the loaded series.
    pub reconciled: bool,
}

impl DataState {
    pub fn series(&self) -> Option<&PriceSeries> {
        self.prices.ready()
    }

    pub fn change_points(&self) -> &[ChangePoint] {
        self.change_points.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn events(&self) -> &[MarketEvent] {
        self.events.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn any_pending(&self) -> bool {
        self.prices.is_pending() || self.change_points.is_pending() || self.events.is_pending()
    }

    /// Drops change points whose index falls outside the loaded series.
    /// Runs once, after both the prices and change points slots settle.
    pub fn reconcile(&mut self) {
        if self.reconciled {
            return;
        }
        let Some(series_len) = self.prices.ready().map(PriceSeries::len) else {
            return;
        };
        let Some(points) = self.change_points.ready_mut() else {
            if self.change_points.failure().is_some() {
                self.reconciled = true;
            }
            return;
        };

        let before = points.len();
        points.retain(|cp| cp.index < series_len);
        let dropped = before - points.len();
        if dropped > 0 {
            log::warn!(
                "Dropped {dropped} change point(s) whose index falls outside the {series_len}-row price series"
            );
        }
        self.reconciled = true;
    }
}

#[derive(Deserialize, Serialize)]
pub struct BrentScopeApp {
    // UI preferences that survive restarts
    #[serde(default = "default_show_event_list")]
    pub(super) show_event_list: bool,

    // Data state - skip serialization since it contains runtime-only data
    #[serde(skip)]
    pub(super) data_state: DataState,
    #[serde(skip)]
    pub(super) filter: EventFilter,
    #[serde(skip)]
    pub(super) selection: Selection,
    #[serde(skip)]
    pub(super) plot_view: PlotView,

    // Help panel visibility (available in all builds for better UX)
    #[serde(skip)]
    pub(super) show_help: bool,

    // Where the three resources come from; injected at startup
    #[serde(skip)]
    pub(super) source: Option<Arc<dyn DashboardSource>>,

    // In-flight fetches, one promise per resource
    #[serde(skip)]
    pub(super) prices_promise: Option<Promise<FetchOutcome<PriceSeries>>>,
    #[serde(skip)]
    pub(super) change_points_promise: Option<Promise<FetchOutcome<Vec<ChangePoint>>>>,
    #[serde(skip)]
    pub(super) events_promise: Option<Promise<FetchOutcome<Vec<MarketEvent>>>>,
    #[serde(skip)]
    pub(super) fetches_started: bool,
}

/// Default for the event list visibility - used by serde and initialization
fn default_show_event_list() -> bool {
    true
}

impl BrentScopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, source: Arc<dyn DashboardSource>) -> Self {
        let mut app: BrentScopeApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if PRINT_STATE_SERDE {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if PRINT_STATE_SERDE {
                    log::info!("No usable persisted state in storage. Creating anew.");
                }
                app = BrentScopeApp::new_with_initial_state();
            }
        } else {
            app = BrentScopeApp::new_with_initial_state();
        }

        // Explicitly reinitialize everything skipped during serialization
        app.data_state = DataState::default();
        app.filter = EventFilter::default();
        app.selection = Selection::default();
        app.plot_view = PlotView::new();
        app.source = Some(source);

        app.start_initial_fetches();

        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            show_event_list: default_show_event_list(),
            data_state: DataState::default(),
            filter: EventFilter::default(),
            selection: Selection::default(),
            plot_view: PlotView::default(),
            show_help: false,
            source: None,
            prices_promise: None,
            change_points_promise: None,
            events_promise: None,
            fetches_started: false,
        }
    }
}

impl eframe::App for BrentScopeApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop in-flight fetches to prevent "Sender dropped" panic
        self.prices_promise = None;
        self.change_points_promise = None;
        self.events_promise = None;

        #[cfg(debug_assertions)]
        if PRINT_SHUTDOWN {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Poll in-flight fetches
        self.poll_fetches(ctx);

        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_status_panel(ctx);
        self.render_detail_window(ctx);
        if self.show_help {
            self.render_help_panel(ctx);
        }
    }
}
