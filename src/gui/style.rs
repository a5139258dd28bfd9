use eframe::egui::{Color32, Stroke};

/// Look of the control panel and the field overlay.
pub struct Style;

impl Style {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 260.;
    pub const WIDGET_GAP: f32 = 20.;

    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const GRID_LINE: Stroke = Stroke {
        width: 1.,
        color: Color32::from_gray(200),
    };

    pub const OVERLAY_TEXT_SIZE: f32 = 14.;
    pub const OVERLAY_TEXT_COLOR: Color32 = Color32::BLACK;
    pub const OVERLAY_OFFSET: f32 = 4.;
}
