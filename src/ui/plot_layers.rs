use eframe::egui::{Id, LayerId, Order::Tooltip, RichText, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{Line, MarkerShape, PlotPoint, PlotPoints, PlotUi, Points};

use crate::analysis::find_event_for_date;
use crate::config::plot::PLOT_CONFIG;
use crate::models::{ChangePoint, DatasetKind, MarketEvent, PriceSeries};
use crate::ui::ui_plot_view::PlotCache;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_price;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub series: &'a PriceSeries,
    pub change_points: &'a [ChangePoint],
    pub events: &'a [MarketEvent],
    pub cache: &'a PlotCache,
    pub hover: Option<HoverTarget>,
}

/// What the pointer is over, resolved once per frame so the marker and line
/// layers never fight over the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    /// Row index into the price series.
    PricePoint(usize),
    /// Index into the change point list.
    ChangePointMarker(usize),
}

/// Emitted by the plot when the user clicks something selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotEvent {
    ChangePointClicked(usize),
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

/// Resolve the pointer against markers first (they sit on top of the line),
/// then against the nearest price row. Distances are measured in screen px so
/// the feel does not change with data density.
pub fn resolve_hover(
    plot_ui: &PlotUi,
    cache: &PlotCache,
    series: &PriceSeries,
) -> Option<HoverTarget> {
    let pointer = plot_ui.response().hover_pos()?;

    let mut best: Option<(f32, HoverTarget)> = None;
    for dataset in cache.projection.marker_datasets() {
        let DatasetKind::ChangePointMarker { cp_index } = dataset.kind else {
            continue;
        };
        let Some(&[x, y]) = dataset.points.first() else {
            continue;
        };
        let screen = plot_ui.screen_from_plot(PlotPoint::new(x, y));
        let dist = screen.distance(pointer);
        let closer = best.map(|(d, _)| dist < d).unwrap_or(true);
        if dist <= PLOT_CONFIG.hit_radius_px && closer {
            best = Some((dist, HoverTarget::ChangePointMarker(cp_index)));
        }
    }
    if let Some((_, target)) = best {
        return Some(target);
    }

    if series.is_empty() {
        return None;
    }
    let coord = plot_ui.pointer_coordinate()?;
    let index = coord.x.round().clamp(0.0, (series.len() - 1) as f64) as usize;
    let price = series.price_at(index)?;
    let screen = plot_ui.screen_from_plot(PlotPoint::new(index as f64, price));
    (screen.distance(pointer) <= PLOT_CONFIG.hit_radius_px)
        .then_some(HoverTarget::PricePoint(index))
}

// ============================================================================
// 1. PRICE SERIES LAYER (The line itself)
// ============================================================================
pub struct PriceSeriesLayer;

impl PlotLayer for PriceSeriesLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(dataset) = ctx.cache.projection.price_dataset() else {
            return;
        };

        let mut line = Line::new(
            UI_TEXT.price_series_name.clone(),
            PlotPoints::new(dataset.points.clone()),
        )
        .color(PLOT_CONFIG.price_line_color)
        .width(PLOT_CONFIG.price_line_width);

        if PLOT_CONFIG.show_price_fill {
            line = line.fill(0.0);
        }
        plot_ui.line(line);

        if let Some(HoverTarget::PricePoint(index)) = ctx.hover {
            draw_price_tooltip(plot_ui, ctx.series, index);
        }
    }
}

// ============================================================================
// 2. CHANGE POINT LAYER (Markers + tooltips)
// ============================================================================
pub struct ChangePointLayer;

impl PlotLayer for ChangePointLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for dataset in ctx.cache.projection.marker_datasets() {
            let DatasetKind::ChangePointMarker { cp_index } = dataset.kind else {
                continue;
            };
            let color = ctx
                .cache
                .marker_colors
                .get(cp_index)
                .copied()
                .unwrap_or(PLOT_CONFIG.price_line_color);
            let name = format!("{} {}", UI_TEXT.change_point_prefix, cp_index + 1);

            plot_ui.points(
                Points::new(name, PlotPoints::new(dataset.points.clone()))
                    .shape(MarkerShape::Circle)
                    .radius(PLOT_CONFIG.marker_radius)
                    .filled(true)
                    .color(color),
            );
        }

        if let Some(HoverTarget::ChangePointMarker(cp_index)) = ctx.hover {
            draw_change_point_tooltip(plot_ui, ctx, cp_index);
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS (Private to this module)
// ============================================================================

/// Body line of the hover card for a price row.
pub fn price_hover_text(price: f64) -> String {
    format!("{}: {}", UI_TEXT.tooltip_price_prefix, format_price(price))
}

/// Body lines of the hover card for a change point. The second line only
/// exists when an event shares the break date.
pub fn change_point_hover_lines(date: &str, event: Option<&MarketEvent>) -> Vec<String> {
    let mut lines = vec![format!("{}: {}", UI_TEXT.tooltip_change_point_prefix, date)];
    if let Some(event) = event {
        lines.push(format!(
            "{}: {}",
            UI_TEXT.tooltip_event_prefix, event.description
        ));
    }
    lines
}

fn draw_price_tooltip(plot_ui: &PlotUi, series: &PriceSeries, index: usize) {
    let Some(price) = series.price_at(index) else {
        return;
    };
    let Some(date) = series.date_at(index) else {
        return;
    };

    let tooltip_layer = LayerId::new(Tooltip, Id::new("price_tooltips"));

    #[allow(deprecated)]
    show_tooltip_at_pointer(
        plot_ui.ctx(),
        tooltip_layer,
        Id::new("tooltip_price"),
        |ui: &mut Ui| {
            ui.label(
                RichText::new(date)
                    .strong()
                    .color(PLOT_CONFIG.price_line_color),
            );
            ui.separator();
            ui.label(price_hover_text(price));
        },
    );
}

fn draw_change_point_tooltip(plot_ui: &PlotUi, ctx: &LayerContext, cp_index: usize) {
    let Some(cp) = ctx.change_points.get(cp_index) else {
        return;
    };
    let Some(date) = cp.date_in(ctx.series) else {
        return;
    };
    let event = find_event_for_date(ctx.events, date);
    let color = ctx
        .cache
        .marker_colors
        .get(cp_index)
        .copied()
        .unwrap_or(PLOT_CONFIG.price_line_color);

    let tooltip_layer = LayerId::new(Tooltip, Id::new("change_point_tooltips"));

    #[allow(deprecated)]
    show_tooltip_at_pointer(
        plot_ui.ctx(),
        tooltip_layer,
        Id::new(format!("tooltip_cp_{cp_index}")),
        |ui: &mut Ui| {
            ui.label(RichText::new(date).strong().color(color));
            ui.separator();
            for line in change_point_hover_lines(date, event) {
                ui.label(line);
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_hover_line_matches_dashboard_wording() {
        assert_eq!(price_hover_text(68.421), "Price: $68.42");
    }

    #[test]
    fn change_point_hover_includes_event_only_when_matched() {
        let event = MarketEvent {
            date: "2020-03-31".into(),
            description: "COVID-19 lockdowns collapse global oil demand".into(),
            event_type: "Pandemic".into(),
        };

        let matched = change_point_hover_lines("2020-03-31", Some(&event));
        assert_eq!(
            matched,
            vec![
                "Change Point: 2020-03-31",
                "Event: COVID-19 lockdowns collapse global oil demand",
            ]
        );

        let unmatched = change_point_hover_lines("2016-01-31", None);
        assert_eq!(unmatched, vec!["Change Point: 2016-01-31"]);
    }
}
