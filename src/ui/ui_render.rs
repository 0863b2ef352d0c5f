use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Grid, Key, Margin, RichText, ScrollArea, SidePanel,
    TopBottomPanel, Ui, Window,
};
use strum::IntoEnumIterator;

use crate::analysis::{event_for_change_point, event_type_options};
use crate::data::{ResourceKind, ResourceSlot};
use crate::models::MarketEvent;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::plot_layers::PlotEvent;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{FilterEventChanged, FilterPanel, Panel};
use crate::ui::utils::{format_impact, section_heading};
use crate::utils::TimeUtils;

use super::app::BrentScopeApp;

impl BrentScopeApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(140.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let filter_events = self.filter_panel(ui);
                for event in filter_events {
                    match event {
                        FilterEventChanged::StartDate(date) => self.set_range_start(date),
                        FilterEventChanged::EndDate(date) => self.set_range_end(date),
                        FilterEventChanged::RangeReset => self.reset_date_range(),
                        FilterEventChanged::EventType(event_type) => {
                            self.set_event_type(event_type);
                        }
                    }
                }

                self.render_source_notices(ui);

                if self.show_event_list {
                    self.render_events_list(ui);
                }
            });
    }

    fn filter_panel(&mut self, ui: &mut Ui) -> Vec<FilterEventChanged> {
        let type_options = event_type_options(self.data_state.events());
        let series_range = self
            .data_state
            .series()
            .and_then(|series| series.full_range())
            .and_then(|(first, last)| {
                Some((
                    TimeUtils::parse_date_label(first)?,
                    TimeUtils::parse_date_label(last)?,
                ))
            });

        let mut panel = FilterPanel::new(
            &self.filter.date_range,
            self.filter.event_type.clone(),
            &type_options,
            series_range,
        );
        panel.render(ui)
    }

    /// Small warnings for the secondary resources; the chart stays useful
    /// without them.
    fn render_source_notices(&self, ui: &mut Ui) {
        if let Some(error) = self.data_state.change_points.failure() {
            ui.label_warning(format!(
                "⚠ {} ({error})",
                UI_TEXT.notice_change_points_unavailable
            ));
        }
        if let Some(error) = self.data_state.events.failure() {
            ui.label_warning(format!("⚠ {} ({error})", UI_TEXT.notice_events_unavailable));
        }
    }

    fn render_events_list(&mut self, ui: &mut Ui) {
        section_heading(ui, &UI_TEXT.events_heading);

        if self.data_state.events.failure().is_some() {
            // The notice above already carries the error detail.
            return;
        }
        if self.data_state.events.is_pending() {
            ui.label_subdued("loading...");
            return;
        }

        let events = self.data_state.events();
        let visible = self.filter.apply(events);

        ui.label_subdued(format!("{} of {} shown", visible.len(), events.len()));
        ui.add_space(4.0);

        if visible.is_empty() {
            ui.label(
                RichText::new(&UI_TEXT.no_events_match)
                    .small()
                    .color(Color32::GRAY),
            );
            return;
        }

        ScrollArea::vertical()
            .max_height(UI_CONFIG.event_list_max_height)
            .id_salt("event_list")
            .show(ui, |ui| {
                for event in visible {
                    Self::render_event_row(ui, event);
                }
            });
    }

    fn render_event_row(ui: &mut Ui, event: &MarketEvent) {
        ui.horizontal_wrapped(|ui| {
            ui.label(
                RichText::new(format!("{}:", event.date))
                    .strong()
                    .color(UI_CONFIG.colors.event_date),
            );
            ui.label(format!("{} ({})", event.description, event.event_type));
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                let mut plot_event = None;

                match &self.data_state.prices {
                    ResourceSlot::Pending => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.spinner();
                            ui.add_space(12.0);
                            ui.heading(&UI_TEXT.loading_heading);
                            ui.add_space(6.0);
                            ui.label(
                                RichText::new(&UI_TEXT.loading_hint)
                                    .color(Color32::from_gray(190)),
                            );
                        });
                    }
                    ResourceSlot::Failed(error) => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.heading(&UI_TEXT.price_error_heading);
                            ui.add_space(10.0);
                            ui.label(format!("Error: {error}"));
                            ui.add_space(20.0);
                            ui.label(&UI_TEXT.price_error_hint);
                        });
                    }
                    ResourceSlot::Ready(series) => {
                        plot_event = self.plot_view.show_price_plot(
                            ui,
                            series,
                            self.data_state.change_points(),
                            self.data_state.events(),
                        );
                    }
                }

                if let Some(PlotEvent::ChangePointClicked(cp_index)) = plot_event {
                    self.select_change_point(cp_index);
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Data source
                    if let Some(source) = &self.source {
                        ui.metric(
                            &format!("📡 {}", UI_TEXT.source_label),
                            source.signature(),
                            Color32::from_rgb(100, 200, 100),
                        );
                        ui.separator();
                    }

                    // 2. Per-resource fetch state
                    for kind in ResourceKind::iter() {
                        let (text, color) = self.resource_status(kind);
                        ui.metric(&kind.to_string(), &text, color);
                        ui.separator();
                    }

                    // 3. Events surviving the current filters
                    if let ResourceSlot::Ready(events) = &self.data_state.events {
                        let shown = self.filter.apply(events).len();
                        ui.label_subdued(format!(
                            "{}: {}/{}",
                            UI_TEXT.events_shown_label,
                            shown,
                            events.len()
                        ));
                    }
                });
            });
    }

    fn resource_status(&self, kind: ResourceKind) -> (String, Color32) {
        match kind {
            ResourceKind::Prices => slot_summary(&self.data_state.prices, |series| {
                format!("{} rows", series.len())
            }),
            ResourceKind::ChangePoints => {
                slot_summary(&self.data_state.change_points, |points| {
                    points.len().to_string()
                })
            }
            ResourceKind::Events => {
                slot_summary(&self.data_state.events, |events| events.len().to_string())
            }
        }
    }

    pub(super) fn render_detail_window(&mut self, ctx: &Context) {
        let Some(cp_index) = self.selection.change_point() else {
            return;
        };

        // The selection can outlive its change point when a reconcile trims
        // the list between frames.
        let Some(cp) = self.data_state.change_points().get(cp_index).copied() else {
            self.selection.dismiss();
            return;
        };
        let Some(series) = self.data_state.series() else {
            return;
        };

        let date = cp.date_in(series).unwrap_or("?").to_owned();
        let associated = event_for_change_point(series, &cp, self.data_state.events())
            .map(|event| format!("{} ({})", event.description, event.event_type));

        let mut open = true;
        let mut close_clicked = false;

        Window::new(&UI_TEXT.detail_title)
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                Grid::new("change_point_detail_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .show(ui, |ui| {
                        ui.label_subdued(&UI_TEXT.detail_date_label);
                        ui.label(RichText::new(&date).strong());
                        ui.end_row();

                        ui.label_subdued(&UI_TEXT.detail_impact_label);
                        let impact_color = if cp.impact >= 0.0 {
                            UI_CONFIG.colors.impact_up
                        } else {
                            UI_CONFIG.colors.impact_down
                        };
                        ui.label(
                            RichText::new(format_impact(cp.impact))
                                .strong()
                                .color(impact_color),
                        );
                        ui.end_row();

                        ui.label_subdued(&UI_TEXT.detail_event_label);
                        match &associated {
                            Some(text) => {
                                ui.label(text.as_str());
                            }
                            None => {
                                ui.label(
                                    RichText::new(&UI_TEXT.detail_no_event).color(Color32::GRAY),
                                );
                            }
                        }
                        ui.end_row();
                    });

                ui.add_space(10.0);
                if ui.button(&UI_TEXT.close_label).clicked() {
                    close_clicked = true;
                }
            });

        if !open || close_clicked {
            self.dismiss_selection();
        }
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new(&UI_TEXT.help_title)
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(400.0)
            .show(ctx, |ui| {
                ui.heading("Keyboard Shortcuts");
                ui.add_space(10.0);

                let general_shortcuts = [
                    ("H", "Toggle this help panel"),
                    ("E", "Toggle the event list"),
                    ("Escape", "Dismiss the change point details"),
                ];

                Grid::new("general_shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &general_shortcuts);
                    });

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);
            });
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }

            if i.key_pressed(Key::E) {
                self.toggle_event_list();
            }

            if i.key_pressed(Key::Escape) {
                if self.selection.is_active() {
                    self.dismiss_selection();
                } else if self.show_help {
                    self.show_help = false;
                }
            }
        });
    }
}

fn slot_summary<T>(
    slot: &ResourceSlot<T>,
    describe: impl FnOnce(&T) -> String,
) -> (String, Color32) {
    match slot {
        ResourceSlot::Pending => ("loading...".to_owned(), Color32::GRAY),
        ResourceSlot::Ready(value) => (describe(value), Color32::from_rgb(130, 200, 140)),
        ResourceSlot::Failed(_) => ("failed".to_owned(), Color32::from_rgb(230, 140, 140)),
    }
}
