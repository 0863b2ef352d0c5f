//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub price_line_color: Color32,
    /// Width of the price series line
    pub price_line_width: f32,
    /// Shade the area between the price line and the zero baseline
    pub show_price_fill: bool,
    /// Radius of change-point markers
    pub marker_radius: f32,
    /// Pointer distance (screen px) within which a marker or price point counts as hovered
    pub hit_radius_px: f32,
    // Gradient colors for change-point impact magnitude visualization
    pub impact_gradient_colors: &'static [&'static str],
    /// Approximate number of date labels along the x axis
    pub x_axis_tick_target: u32,
    /// Fraction of the price range added above and below the plotted data
    pub y_bounds_margin_pct: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(100, 149, 237), // Cornflower blue
    price_line_width: 2.0,
    show_price_fill: true,
    marker_radius: 6.0,
    hit_radius_px: 12.0,
    // From mild shifts (amber) to severe shifts (dark red)
    impact_gradient_colors: &[
        "#ffb703", // Amber
        "#ff8c00", // Dark orange
        "#ff4500", // Orange red
        "#b22222", // Firebrick
        "#8b0000", // Dark red
    ],
    x_axis_tick_target: 8,
    y_bounds_margin_pct: 0.05,
};
