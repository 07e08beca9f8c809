use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::SiteSelection;
use crate::state::AppState;

/// Fixed slider scale: 0–10000 kg with 1000 kg steps, independent of the
/// actual data range.
pub const PAYLOAD_SCALE_MAX: f64 = 10_000.0;
pub const PAYLOAD_STEP: f64 = 1_000.0;

// ---------------------------------------------------------------------------
// Left side panel – input controls
// ---------------------------------------------------------------------------

/// Render the left controls panel: site dropdown, payload range, legend.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };
    let sites = dataset.sites.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Launch site dropdown ----
            ui.strong("Launch site");
            let current = state.site_selection.clone();
            egui::ComboBox::from_id_salt("site_dropdown")
                .selected_text(current.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(current == SiteSelection::AllSites, "All Sites")
                        .clicked()
                    {
                        state.set_site_selection(SiteSelection::AllSites);
                    }
                    for site in &sites {
                        let selected = current == SiteSelection::Site(site.clone());
                        if ui.selectable_label(selected, site).clicked() {
                            state.set_site_selection(SiteSelection::Site(site.clone()));
                        }
                    }
                });
            ui.separator();

            // ---- Payload range ----
            ui.strong("Payload range (kg)");
            let (mut low, mut high) = state.payload_range;
            let mut changed = false;
            changed |= ui
                .add(
                    egui::Slider::new(&mut low, 0.0..=PAYLOAD_SCALE_MAX)
                        .step_by(PAYLOAD_STEP)
                        .suffix(" kg")
                        .text("min"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut high, 0.0..=PAYLOAD_SCALE_MAX)
                        .step_by(PAYLOAD_STEP)
                        .suffix(" kg")
                        .text("max"),
                )
                .changed();
            if changed {
                state.set_payload_range(low, high);
            }
            ui.separator();

            // ---- Booster category legend ----
            if let Some(cm) = &state.color_map {
                ui.strong("Booster version category");
                for (category, color) in cm.legend_entries() {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.label(RichText::new("●").color(color));
                        ui.label(category);
                    });
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} launches loaded, {} in view",
                ds.len(),
                state.visible_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from {} sites",
                    dataset.len(),
                    dataset.sites.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
