use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::color::bar_gradient;
use crate::importance::FeatureImportance;

// ---------------------------------------------------------------------------
// Feature importance bar chart
// ---------------------------------------------------------------------------

/// Horizontal bars, most important feature on top.
pub fn importance_chart(ui: &mut Ui, importance: &[FeatureImportance]) {
    let n = importance.len();
    let colors = bar_gradient(n);

    let bars: Vec<Bar> = importance
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(rank, (imp, color))| {
            Bar::new((n - 1 - rank) as f64, imp.mean)
                .name(format!("{}: {:.4} ± {:.4}", imp.feature, imp.mean, imp.std))
                .fill(color)
        })
        .collect();

    // Axis labels: y position → feature name.
    let names: Vec<String> = importance.iter().rev().map(|i| i.feature.clone()).collect();

    Plot::new("importance_plot")
        .height(ui.available_height().max(320.0))
        .x_axis_label("Importance (mean R² drop)")
        .y_axis_formatter(move |mark, _range| {
            let pos = mark.value.round();
            if (mark.value - pos).abs() > 1e-6 || pos < 0.0 {
                return String::new();
            }
            names.get(pos as usize).cloned().unwrap_or_default()
        })
        .y_axis_min_width(120.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).width(0.6).horizontal());
        });
}
