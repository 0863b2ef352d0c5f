use eframe::egui;
use poll_promise::Promise;
use std::sync::Arc;
use std::time::Duration;

use crate::data::{DashboardSource, FetchError, ResourceKind};
use crate::domain::DateRange;
use crate::ui::app::BrentScopeApp;
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::analysis::event_for_change_point;
#[cfg(debug_assertions)]
use crate::config::debug::{PRINT_CORRELATION, PRINT_FETCH_DETAILS};

pub(super) struct FetchOutcome<T> {
    pub(super) result: Result<T, FetchError>,
    elapsed_time: Duration,
}

impl<T> FetchOutcome<T> {
    pub(super) fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }
}

impl BrentScopeApp {
    /// Kicks off the three resource fetches. Each resource travels on its own
    /// promise so one failing endpoint cannot hold the others back.
    pub(super) fn start_initial_fetches(&mut self) {
        if self.fetches_started {
            return;
        }
        let Some(source) = self.source.clone() else {
            return;
        };
        self.fetches_started = true;

        self.prices_promise = Some(spawn_fetch("fetch_prices", Arc::clone(&source), |s| {
            s.fetch_prices()
        }));
        self.change_points_promise = Some(spawn_fetch(
            "fetch_change_points",
            Arc::clone(&source),
            |s| s.fetch_change_points(),
        ));
        self.events_promise = Some(spawn_fetch("fetch_events", source, |s| s.fetch_events()));
    }

    pub(super) fn poll_fetches(&mut self, ctx: &egui::Context) {
        let mut resolved_any = false;

        if let Some((result, elapsed)) = take_outcome(&mut self.prices_promise) {
            resolved_any = true;
            if let Ok(series) = &result {
                // Seed the date filter with the loaded series bounds.
                if let Some((first, last)) = series.full_range() {
                    self.filter.date_range = DateRange::full(first, last);
                }

                #[cfg(debug_assertions)]
                if PRINT_FETCH_DETAILS {
                    log::info!(
                        "Loaded {} price rows ({} to {})",
                        series.len(),
                        series.first_date().unwrap_or("?"),
                        series.last_date().unwrap_or("?"),
                    );
                }
            }
            log_fetch_result(ResourceKind::Prices, &result, elapsed);
            self.data_state.prices.resolve(result);
            self.plot_view.clear_cache();
            self.data_state.reconcile();
        }

        if let Some((result, elapsed)) = take_outcome(&mut self.change_points_promise) {
            resolved_any = true;
            #[cfg(debug_assertions)]
            if PRINT_FETCH_DETAILS {
                if let Ok(points) = &result {
                    log::info!("Loaded {} change points", points.len());
                }
            }
            log_fetch_result(ResourceKind::ChangePoints, &result, elapsed);
            self.data_state.change_points.resolve(result);
            self.plot_view.clear_cache();
            self.data_state.reconcile();
        }

        if let Some((result, elapsed)) = take_outcome(&mut self.events_promise) {
            resolved_any = true;
            #[cfg(debug_assertions)]
            if PRINT_FETCH_DETAILS {
                if let Ok(events) = &result {
                    log::info!("Loaded {} events", events.len());
                }
            }
            log_fetch_result(ResourceKind::Events, &result, elapsed);
            self.data_state.events.resolve(result);
        }

        if resolved_any {
            self.log_correlation_outcomes();
        }

        if self.is_fetching() {
            ctx.request_repaint();
        }
    }

    /// Logs the event join outcome for every change point. Early-returns
    /// until all three resources have settled, so the pass runs once, on
    /// the frame the last fetch resolves.
    fn log_correlation_outcomes(&self) {
        #[cfg(debug_assertions)]
        if PRINT_CORRELATION {
            let Some(series) = self.data_state.series() else {
                return;
            };
            let Some(events) = self.data_state.events.ready() else {
                return;
            };
            for cp in self.data_state.change_points() {
                let date = cp.date_in(series).unwrap_or("?");
                match event_for_change_point(series, cp, events) {
                    Some(event) => log::info!(
                        "Change point {} ({date}) matches event: {}",
                        cp.index,
                        event.description
                    ),
                    None => {
                        log::info!("Change point {} ({date}) has no matching event", cp.index);
                    }
                }
            }
        }
    }

    pub(super) fn is_fetching(&self) -> bool {
        self.prices_promise.is_some()
            || self.change_points_promise.is_some()
            || self.events_promise.is_some()
    }
}

fn spawn_fetch<T, F>(
    thread_name: &str,
    source: Arc<dyn DashboardSource>,
    fetch: F,
) -> Promise<FetchOutcome<T>>
where
    T: Send + 'static,
    F: FnOnce(&dyn DashboardSource) -> Result<T, FetchError> + Send + 'static,
{
    #[cfg(not(target_arch = "wasm32"))]
    {
        Promise::spawn_thread(thread_name, move || run_fetch(source, fetch))
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = thread_name;
        Promise::from_ready(run_fetch(source, fetch))
    }
}

fn run_fetch<T, F>(source: Arc<dyn DashboardSource>, fetch: F) -> FetchOutcome<T>
where
    F: FnOnce(&dyn DashboardSource) -> Result<T, FetchError>,
{
    let fetch_start = now();
    let result = fetch(source.as_ref());

    FetchOutcome {
        result,
        elapsed_time: fetch_start.elapsed(),
    }
}

/// Clones a finished promise's outcome out and frees the slot. Returns None
/// while the fetch is still in flight.
fn take_outcome<T: Clone + Send + 'static>(
    slot: &mut Option<Promise<FetchOutcome<T>>>,
) -> Option<(Result<T, FetchError>, Duration)> {
    let outcome = slot.as_ref().and_then(|promise| {
        promise.ready().map(|fetched| {
            let result = match &fetched.result {
                Ok(value) => Ok(value.clone()),
                Err(error) => Err(error.clone()),
            };
            (result, fetched.elapsed_time())
        })
    });

    if outcome.is_some() {
        *slot = None;
    }
    outcome
}

fn log_fetch_result<T>(kind: ResourceKind, result: &Result<T, FetchError>, elapsed: Duration) {
    match result {
        Ok(_) => {
            if elapsed.as_millis() > 100 {
                #[cfg(debug_assertions)]
                log::info!("✅ {kind} fetch completed in {:.2}s", elapsed.as_secs_f32());
            }
        }
        Err(error) => {
            log::error!("❌ {kind} fetch failed: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceSeries;

    fn ready_outcome<T: Send + 'static>(result: Result<T, FetchError>) -> Promise<FetchOutcome<T>> {
        Promise::from_ready(FetchOutcome {
            result,
            elapsed_time: Duration::ZERO,
        })
    }

    #[test]
    fn price_arrival_seeds_the_full_date_range() {
        let ctx = egui::Context::default();
        let mut app = BrentScopeApp::new_with_initial_state();
        let series = PriceSeries::from_parts(
            vec!["2019-01-31".into(), "2019-02-28".into(), "2022-12-31".into()],
            vec![61.89, 64.49, 82.82],
        )
        .unwrap();
        app.prices_promise = Some(ready_outcome(Ok(series)));

        app.poll_fetches(&ctx);

        assert!(app.prices_promise.is_none(), "finished promise should be freed");
        assert_eq!(app.data_state.series().map(PriceSeries::len), Some(3));
        assert_eq!(
            app.filter.date_range,
            DateRange::full("2019-01-31", "2022-12-31"),
            "the date filter should start covering the whole series"
        );
    }

    #[test]
    fn one_failed_resource_does_not_block_the_others() {
        let ctx = egui::Context::default();
        let mut app = BrentScopeApp::new_with_initial_state();
        app.prices_promise = Some(ready_outcome(Ok(PriceSeries::from_parts(
            vec!["2020-01-31".into()],
            vec![58.16],
        )
        .unwrap())));
        app.events_promise = Some(ready_outcome(Err(FetchError::Network(
            "connection refused".into(),
        ))));

        app.poll_fetches(&ctx);

        assert!(app.data_state.series().is_some());
        assert_eq!(
            app.data_state.events.failure(),
            Some(&FetchError::Network("connection refused".into()))
        );
        assert!(app.data_state.change_points.is_pending());
    }

    #[test]
    fn a_failed_price_fetch_leaves_the_filter_unbounded() {
        let ctx = egui::Context::default();
        let mut app = BrentScopeApp::new_with_initial_state();
        app.prices_promise = Some(ready_outcome(Err::<PriceSeries, _>(FetchError::Empty)));

        app.poll_fetches(&ctx);

        assert!(app.data_state.prices.failure().is_some());
        assert!(app.filter.date_range.is_unbounded());
    }
}
