use colorgrad::Gradient;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use eframe::egui::{self, Color32};
use egui_plot::{AxisHints, Corner, GridMark, HPlacement, Legend, Plot};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_PLOT_CACHE_STATS;
use crate::config::plot::PLOT_CONFIG;
use crate::models::{ChangePoint, ChartProjection, MarketEvent, PriceSeries};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::maths_utils;

// Import the Layer System
use crate::ui::plot_layers::{
    ChangePointLayer, HoverTarget, LayerContext, PlotEvent, PlotLayer, PriceSeriesLayer,
    resolve_hover,
};

/// Everything derivable from the loaded data alone. The data is fetched once
/// and never mutated afterwards, so this rebuilds only when a fetch lands.
#[derive(Clone)]
pub struct PlotCache {
    pub data_hash: u64,
    pub projection: ChartProjection,
    /// One color per change point, graded by impact magnitude.
    pub marker_colors: Vec<Color32>,
    /// Shared with the x-axis formatter closure.
    pub dates: Arc<Vec<String>>,
    pub y_min: f64,
    pub y_max: f64,
    pub x_min: f64,
    pub x_max: f64,
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    pub fn show_price_plot(
        &mut self,
        ui: &mut egui::Ui,
        series: &PriceSeries,
        change_points: &[ChangePoint],
        events: &[MarketEvent],
    ) -> Option<PlotEvent> {
        let cache = self.calculate_plot_data(series, change_points);

        // Aim for a readable number of date labels however long the series is.
        let x_tick_step = (series.len() as f64 / PLOT_CONFIG.x_axis_tick_target as f64)
            .ceil()
            .max(1.0);

        let mut plot_event = None;

        Plot::new("price_plot")
            .legend(Legend::default().position(Corner::RightTop))
            .custom_x_axes(vec![create_x_axis(Arc::clone(&cache.dates))])
            .custom_y_axes(vec![create_y_axis()])
            // Suppress Defaults
            .label_formatter(|_, _| String::new())
            .x_grid_spacer(move |input| {
                let mut marks = Vec::new();
                let (min, max) = input.bounds;
                let start = (min / x_tick_step).ceil() as i64;
                let end = (max / x_tick_step).floor() as i64;
                for i in start..=end {
                    marks.push(GridMark {
                        value: i as f64 * x_tick_step,
                        step_size: x_tick_step,
                    });
                }
                marks
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_y(cache.y_min..=cache.y_max);
                plot_ui.set_plot_bounds_x(cache.x_min..=cache.x_max);

                let hover = resolve_hover(plot_ui, &cache, series);

                // --- LAYER RENDERING SYSTEM ---

                // 1. Create Context
                let ctx = LayerContext {
                    series,
                    change_points,
                    events,
                    cache: &cache,
                    hover,
                };

                // 2. Define Layer Stack (Back to Front)
                let layers: Vec<Box<dyn PlotLayer>> =
                    vec![Box::new(PriceSeriesLayer), Box::new(ChangePointLayer)];

                // 3. Render Loop
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }

                if plot_ui.response().clicked() {
                    if let Some(HoverTarget::ChangePointMarker(cp_index)) = hover {
                        plot_event = Some(PlotEvent::ChangePointClicked(cp_index));
                    }
                }
            });

        plot_event
    }

    fn calculate_plot_data(
        &mut self,
        series: &PriceSeries,
        change_points: &[ChangePoint],
    ) -> PlotCache {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        series.len().hash(&mut hasher);
        if let Some(date) = series.last_date() {
            date.hash(&mut hasher);
        }
        for cp in change_points {
            cp.index.hash(&mut hasher);
            cp.impact.to_bits().hash(&mut hasher);
        }
        let current_hash = hasher.finish();

        if let Some(cache) = &self.cache {
            if cache.data_hash == current_hash {
                #[cfg(debug_assertions)]
                if PRINT_PLOT_CACHE_STATS {
                    log::debug!("plot cache hit ({current_hash:#x})");
                }
                return cache.clone();
            }
        }
        #[cfg(debug_assertions)]
        if PRINT_PLOT_CACHE_STATS {
            log::debug!("plot cache miss, rebuilding projection");
        }

        let projection = ChartProjection::build(series, change_points);

        // Pad the y bounds so the line never touches the frame
        let (y_min, y_max) = if series.is_empty() {
            (0.0, 1.0)
        } else {
            maths_utils::get_min_max(&series.prices)
        };
        let margin = (y_max - y_min).max(1.0) * PLOT_CONFIG.y_bounds_margin_pct;

        let grad = colorgrad::GradientBuilder::new()
            .html_colors(PLOT_CONFIG.impact_gradient_colors)
            .build::<colorgrad::CatmullRomGradient>()
            .expect("Failed to create color gradient");

        let impacts: Vec<f64> = change_points.iter().map(|cp| cp.impact).collect();
        let weights = if impacts.is_empty() {
            Vec::new()
        } else {
            maths_utils::normalize_abs_max(&impacts)
        };
        let marker_colors: Vec<Color32> = weights
            .iter()
            .map(|&weight| to_egui_color(grad.at(weight as f32)))
            .collect();

        let x_max = if series.is_empty() {
            1.0
        } else {
            (series.len() - 1) as f64 + 0.5
        };

        let cache = PlotCache {
            data_hash: current_hash,
            projection,
            marker_colors,
            dates: Arc::new(series.dates.clone()),
            y_min: y_min - margin,
            y_max: y_max + margin,
            x_min: -0.5,
            x_max,
        };

        self.cache = Some(cache.clone());
        cache
    }
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

fn create_x_axis(dates: Arc<Vec<String>>) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.x_axis_label.clone())
        .formatter(move |grid_mark, _range| {
            // Ticks land on whole row indices; anything else gets no label.
            let index = grid_mark.value.round();
            if index < 0.0 || (grid_mark.value - index).abs() > f64::EPSILON {
                return String::new();
            }
            dates.get(index as usize).cloned().unwrap_or_default()
        })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.y_axis_label.clone())
        .formatter(|grid_mark, _range| format!("${:.0}", grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> PriceSeries {
        PriceSeries::from_parts(
            vec!["2020-01-31".into(), "2020-02-29".into(), "2020-03-31".into()],
            vec![58.16, 50.52, 22.74],
        )
        .unwrap()
    }

    #[test]
    fn cache_is_reused_until_the_data_changes() {
        let mut view = PlotView::new();
        let series = series();
        let change_points = vec![ChangePoint {
            index: 2,
            impact: -27.8,
        }];

        let first = view.calculate_plot_data(&series, &change_points);
        assert!(view.has_cache());
        let second = view.calculate_plot_data(&series, &change_points);
        assert_eq!(first.data_hash, second.data_hash);

        let more_points = vec![
            ChangePoint {
                index: 1,
                impact: -8.0,
            },
            ChangePoint {
                index: 2,
                impact: -27.8,
            },
        ];
        let third = view.calculate_plot_data(&series, &more_points);
        assert_ne!(first.data_hash, third.data_hash);
        assert_eq!(third.marker_colors.len(), 2);
        // The mild and the severe break should shade differently.
        assert_ne!(third.marker_colors[0], third.marker_colors[1]);
    }

    #[test]
    fn clear_cache_forces_a_rebuild() {
        let mut view = PlotView::new();
        view.calculate_plot_data(&series(), &[]);
        assert!(view.has_cache());

        view.clear_cache();
        assert!(!view.has_cache());
    }

    #[test]
    fn bounds_pad_the_price_extremes() {
        let mut view = PlotView::new();
        let cache = view.calculate_plot_data(&series(), &[]);

        assert!(cache.y_min < 22.74);
        assert!(cache.y_max > 58.16);
        assert_eq!(cache.x_min, -0.5);
        assert_eq!(cache.x_max, 2.5);
        assert_eq!(cache.projection.datasets.len(), 1);
    }
}
