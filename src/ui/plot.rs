use std::collections::BTreeSet;
use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Pos2, Sense, Stroke, Ui, Vec2};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::color::generate_palette;
use crate::state::AppState;

use super::panels::PAYLOAD_SCALE_MAX;

// ---------------------------------------------------------------------------
// Success pie chart
// ---------------------------------------------------------------------------

const PIE_DIAMETER: f32 = 200.0;
/// Angular step for sector tessellation, in radians.
const PIE_ARC_STEP: f32 = 0.05;

/// Render the success-distribution pie chart with its legend.
pub fn success_pie(ui: &mut Ui, state: &AppState) {
    let Some(dist) = &state.distribution else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a launch records file  (File → Open…)");
        });
        return;
    };

    ui.strong(&dist.title);
    ui.add_space(4.0);

    let total: usize = dist.slices.iter().map(|(_, n)| n).sum();
    let colors = generate_palette(dist.slices.len());

    ui.horizontal(|ui: &mut Ui| {
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(PIE_DIAMETER), Sense::hover());
        let center = response.rect.center();
        let radius = PIE_DIAMETER / 2.0 - 4.0;

        if total == 0 {
            // Degenerate filter: no slices, draw the empty outline.
            painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::DARK_GRAY));
        } else {
            let mut start = -TAU / 4.0; // 12 o'clock
            for ((_, count), color) in dist.slices.iter().zip(colors.iter()) {
                let sweep = (*count as f32 / total as f32) * TAU;
                painter.add(sector_shape(center, radius, start, start + sweep, *color));
                start += sweep;
            }
        }

        // Legend with counts and percentages.
        ui.vertical(|ui: &mut Ui| {
            for ((label, count), color) in dist.slices.iter().zip(colors.iter()) {
                let pct = 100.0 * *count as f64 / total.max(1) as f64;
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(egui::RichText::new("■").color(*color));
                    ui.label(format!("{label}: {count} ({pct:.1}%)"));
                });
            }
            if total == 0 {
                ui.label("No launches match the current selection.");
            }
        });
    });
}

/// Filled circular sector as a triangle fan around the center.
fn sector_shape(
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    color: Color32,
) -> egui::Shape {
    let mut points = vec![center];
    let steps = (((end_angle - start_angle) / PIE_ARC_STEP).ceil() as usize).max(2);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let angle = start_angle + t * (end_angle - start_angle);
        points.push(center + radius * Vec2::new(angle.cos(), angle.sin()));
    }
    egui::Shape::convex_polygon(points, color, Stroke::NONE)
}

// ---------------------------------------------------------------------------
// Payload / outcome scatter chart
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter chart in the remaining space.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let (Some(dataset), Some(view)) = (&state.dataset, &state.correlation) else {
        return;
    };

    ui.strong(&view.title);

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch Outcome (class)")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One Points item per record so the marker radius can scale with
            // payload mass; only the first record of each booster category is
            // named, so the legend shows each category once.
            let mut named: BTreeSet<&str> = BTreeSet::new();

            for &idx in &view.indices {
                let rec = &dataset.records[idx];
                let color = state
                    .color_map
                    .as_ref()
                    .map_or(Color32::LIGHT_BLUE, |cm| cm.color_for(&rec.booster_category));

                let radius =
                    2.0 + 6.0 * (rec.payload_mass_kg / PAYLOAD_SCALE_MAX).clamp(0.0, 1.0) as f32;

                let points: PlotPoints =
                    vec![[rec.payload_mass_kg, rec.outcome.as_f64()]].into();
                let mut item = Points::new(points)
                    .color(color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(radius);

                if named.insert(rec.booster_category.as_str()) {
                    item = item.name(&rec.booster_category);
                }
                plot_ui.points(item);
            }
        });
}
