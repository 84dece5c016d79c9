//! Interactive canvas: pointer routing and per-frame drawing

mod overlays;

use egui::Ui;
use fillet2d::fillet_corner;
use kurbo::Point;

use crate::state::AppState;

pub struct CanvasPanel;

impl CanvasPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );

        self.handle_pointer(ui, &response, state);

        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, state.config.background);

        let (a, b, c) = state.handles.corner();
        match fillet_corner(a, b, c, state.config.radius) {
            None => overlays::draw_plain_corner(&painter, &state.config, a, b, c),
            Some(ref fillet) => {
                if state.show_construction {
                    overlays::draw_construction(&painter, &state.config, b, fillet);
                }
                overlays::draw_rounded_path(&painter, &state.config, a, c, fillet);
            }
        }

        overlays::draw_handles(&painter, state);
    }

    fn handle_pointer(&mut self, ui: &Ui, response: &egui::Response, state: &mut AppState) {
        if response.drag_started_by(egui::PointerButton::Primary) {
            // Refresh hover from the press position before grabbing.
            if let Some(pos) = response.interact_pointer_pos() {
                state.pointer_moved(to_point(pos));
            }
            state.begin_drag();
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                state.pointer_moved(to_point(pos));
            }
        } else if let Some(pos) = response.hover_pos() {
            state.pointer_moved(to_point(pos));
        }

        if response.drag_stopped() {
            state.end_drag();
        }

        if state.drag.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if state.hover.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }
}

pub(crate) fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x as f64, pos.y as f64)
}

pub(crate) fn to_pos2(p: Point) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}
