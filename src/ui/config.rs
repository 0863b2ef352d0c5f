use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub event_date: Color32,
    pub impact_up: Color32,
    pub impact_down: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Height cap for the scrollable event list in the side panel
    pub event_list_max_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE, // Sets every subsection heading
        central_panel: Color32::from_rgb(30, 32, 40),
        side_panel: Color32::from_rgb(25, 25, 25),
        event_date: Color32::from_rgb(210, 210, 210),
        impact_up: Color32::from_rgb(130, 200, 140),
        impact_down: Color32::from_rgb(230, 140, 140),
    },
    event_list_max_height: 320.0,
};
