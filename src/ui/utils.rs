use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase() + ":";
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Creates a colored sub-section heading using the configured color
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Customize the dark theme
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    // Set the custom visuals
    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Formats a barrel price in USD.
/// - Normal barrel prices (>= $1): cents are enough ($68.42)
/// - Sub-dollar values (degenerate inputs only): 4 decimals
pub fn format_price(price: f64) -> String {
    if price.abs() >= 1.0 {
        format!("${:.2}", price)
    } else {
        format!("${:.4}", price)
    }
}

/// Formats a change-point impact as a signed shift in USD per barrel.
pub fn format_impact(impact: f64) -> String {
    format!("{impact:+.1} USD/bbl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formatting_tiers() {
        assert_eq!(format_price(68.421), "$68.42");
        assert_eq!(format_price(122.8), "$122.80");
        assert_eq!(format_price(0.5), "$0.5000");
    }

    #[test]
    fn impact_formatting_keeps_the_sign() {
        assert_eq!(format_impact(-31.2), "-31.2 USD/bbl");
        assert_eq!(format_impact(14.9), "+14.9 USD/bbl");
    }
}
