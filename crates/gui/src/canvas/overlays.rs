//! Canvas overlay drawing: rounded path, construction geometry, handles

use egui::Painter;
use fillet2d::CornerFillet;
use kurbo::Point;

use crate::state::{AppState, CanvasConfig};

use super::to_pos2;

const ARC_SEGMENTS: usize = 32;

/// Two raw segments for a degenerate corner.
pub fn draw_plain_corner(painter: &Painter, config: &CanvasConfig, a: Point, b: Point, c: Point) {
    let stroke = egui::Stroke::new(1.5, config.path_color);
    painter.line_segment([to_pos2(a), to_pos2(b)], stroke);
    painter.line_segment([to_pos2(b), to_pos2(c)], stroke);
}

/// Straight legs plus the fillet arc.
pub fn draw_rounded_path(
    painter: &Painter,
    config: &CanvasConfig,
    a: Point,
    c: Point,
    fillet: &CornerFillet,
) {
    let stroke = egui::Stroke::new(1.5, config.path_color);
    painter.line_segment([to_pos2(a), to_pos2(fillet.tangent_in)], stroke);
    painter.line_segment([to_pos2(fillet.tangent_out), to_pos2(c)], stroke);

    let screen_pts: Vec<_> = (0..=ARC_SEGMENTS)
        .map(|i| to_pos2(fillet.arc_point(i as f64 / ARC_SEGMENTS as f64)))
        .collect();
    for w in screen_pts.windows(2) {
        painter.line_segment([w[0], w[1]], stroke);
    }
}

/// Bisector, tangent rays, radii and the full fillet circle.
pub fn draw_construction(
    painter: &Painter,
    config: &CanvasConfig,
    b: Point,
    fillet: &CornerFillet,
) {
    let stroke = egui::Stroke::new(1.0, config.construction_color);
    let center = to_pos2(fillet.center);
    let t_in = to_pos2(fillet.tangent_in);
    let t_out = to_pos2(fillet.tangent_out);
    let corner = to_pos2(b);

    painter.line_segment([corner, center], stroke);
    painter.line_segment([corner, t_in], stroke);
    painter.line_segment([corner, t_out], stroke);
    painter.line_segment([center, t_in], stroke);
    painter.line_segment([center, t_out], stroke);
    painter.circle_stroke(center, fillet.radius() as f32, stroke);
}

/// Handle markers with labels, colored by interaction state.
pub fn draw_handles(painter: &Painter, state: &AppState) {
    let config = &state.config;
    for (id, p) in state.handles.iter() {
        let color = if state.drag == Some(id) {
            config.marker_drag
        } else if state.hover == Some(id) {
            config.marker_hover
        } else {
            config.marker_idle
        };

        let pos = to_pos2(p);
        painter.circle_filled(pos, config.marker_size, color);
        painter.text(
            pos - config.label_offset,
            egui::Align2::LEFT_TOP,
            id.label(),
            egui::FontId::proportional(config.label_font_size),
            config.label_color,
        );
    }
}
