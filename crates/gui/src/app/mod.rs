//! Main application module

mod styles;

use eframe::egui;

use crate::canvas::CanvasPanel;
use crate::state::AppState;

/// Main application
pub struct FilletApp {
    state: AppState,
    canvas: CanvasPanel,
}

impl FilletApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        styles::configure_styles(&cc.egui_ctx);
        tracing::info!("started with default corner layout");

        Self {
            state: AppState::default(),
            canvas: CanvasPanel::new(),
        }
    }
}

impl eframe::App for FilletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::R)) {
            self.state.reset();
        }

        // ── Controls ─────────────────────────────────────────
        egui::TopBottomPanel::top("controls")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.checkbox(&mut self.state.show_construction, "Construction geometry");
                    ui.separator();
                    if ui.button("Reset points").clicked() {
                        self.state.reset();
                    }
                    ui.separator();
                    ui.weak(format!("fillet radius: {:.0} px", self.state.config.radius));
                });
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar(ui, &self.state);
            });

        // ── Central panel: canvas ────────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.canvas.show(ui, &mut self.state);
            });
    }
}

fn status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        for (id, p) in state.handles.iter() {
            ui.weak(format!("{} ({:.0}, {:.0})", id.label(), p.x, p.y));
        }

        ui.separator();

        let (a, b, c) = state.handles.corner();
        match fillet2d::fillet_corner(a, b, c, state.config.radius) {
            Some(fillet) => {
                let interior = 180.0 - fillet.sweep_angle;
                ui.label(format!("corner {interior:.1}°, arc {:.1}°", fillet.sweep_angle));
            }
            None => {
                ui.colored_label(egui::Color32::YELLOW, "collinear corner, no fillet");
            }
        }

        if let Some(id) = state.drag {
            ui.separator();
            ui.label(format!("dragging {}", id.label()));
        } else if let Some(id) = state.hover {
            ui.separator();
            ui.weak(format!("over {}", id.label()));
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("fillet2d v0.1");
        });
    });
}
