//! Canvas configuration: fixed drawing and interaction constants

use egui::Color32;

/// Drawing and interaction constants, constructed once at startup and
/// passed by reference to the render routine.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Fillet radius in pixels
    pub radius: f64,
    /// Handle marker radius in pixels
    pub marker_size: f32,
    /// Cursor distance within which a handle can be picked
    pub pick_radius: f64,
    /// Font size of the handle labels
    pub label_font_size: f32,
    /// Offset from a handle to the top-left anchor of its label
    pub label_offset: egui::Vec2,
    pub background: Color32,
    /// Marker fill when idle
    pub marker_idle: Color32,
    /// Marker fill under the cursor
    pub marker_hover: Color32,
    /// Marker fill while dragged
    pub marker_drag: Color32,
    /// Stroke of the rounded path
    pub path_color: Color32,
    /// Stroke of the construction geometry
    pub construction_color: Color32,
    pub label_color: Color32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            marker_size: 6.0,
            pick_radius: 8.0,
            label_font_size: 14.0,
            label_offset: egui::vec2(10.0, 30.0),
            background: Color32::from_rgb(30, 30, 35),
            marker_idle: Color32::from_rgb(0, 191, 255),
            marker_hover: Color32::from_rgb(30, 144, 255),
            marker_drag: Color32::from_rgb(25, 25, 112),
            path_color: Color32::from_rgb(255, 20, 147),
            construction_color: Color32::from_rgba_unmultiplied(200, 200, 210, 160),
            label_color: Color32::from_rgb(130, 115, 220),
        }
    }
}
