use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchBoardApp {
    pub state: AppState,
}

impl LaunchBoardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl Default for LaunchBoardApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for LaunchBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("controls_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie on top, scatter below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::success_pie(ui, &self.state);
            if self.state.dataset.is_some() {
                ui.separator();
                plot::payload_scatter(ui, &self.state);
            }
        });
    }
}
