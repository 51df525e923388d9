use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use super::{plot, widgets};
use crate::color;
use crate::metrics::{MetricsSummary, format_metric};
use crate::recommend::Outlook;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let Some(artifacts) = &state.artifacts else {
        return;
    };
    widgets::section_title(ui, "Dashboard Overview", None);

    let entries = artifacts.metrics.summary.entries();
    ui.columns(entries.len(), |cols| {
        for (col, (label, value)) in cols.iter_mut().zip(entries) {
            widgets::metric_card(col, label, &format_metric(value));
        }
    });
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

pub fn evaluation(ui: &mut Ui, state: &AppState) {
    let Some(artifacts) = &state.artifacts else {
        return;
    };
    widgets::section_title(ui, "Model Evaluation", None);

    let table = &artifacts.metrics;
    widgets::card(ui, "metrics_table", |ui| {
        let header: Vec<&str> = std::iter::once("")
            .chain(table.headers.iter().map(String::as_str))
            .collect();
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| std::iter::once(i.to_string()).chain(row.iter().cloned()).collect())
            .collect();
        grid(ui, "metrics_file", &header, &rows);
    });

    let live = artifacts.evaluate_on_dataset();
    widgets::card(ui, "metrics_live", |ui| {
        ui.label(RichText::new("Loaded model on the full dataset").strong().color(color::TITLE));
        ui.label(
            RichText::new("Reference scores recomputed from the dataset file.")
                .size(13.0)
                .color(color::MUTED),
        );
        ui.add_space(8.0);
        let row: Vec<Vec<String>> = vec![live.entries().iter().map(|(_, v)| format_metric(*v)).collect()];
        grid(ui, "metrics_live", &MetricsSummary::LABELS, &row);
    });
}

fn grid(ui: &mut Ui, id: &str, header: &[&str], rows: &[Vec<String>]) {
    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::remainder().at_least(60.0), header.len())
            .header(22.0, |mut row| {
                for h in header {
                    row.col(|ui| {
                        ui.strong(*h);
                    });
                }
            })
            .body(|mut body| {
                for cells in rows {
                    body.row(20.0, |mut row| {
                        for cell in cells {
                            row.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Feature importance
// ---------------------------------------------------------------------------

pub fn feature_importance(ui: &mut Ui, state: &AppState) {
    widgets::section_title(
        ui,
        "Feature Importance",
        Some("Drop in R² when each feature is randomly shuffled."),
    );
    match &state.importance {
        Some(importance) => widgets::card(ui, "importance", |ui| {
            plot::importance_chart(ui, importance);
        }),
        None => {
            ui.label(RichText::new("No importance computed.").color(color::MUTED));
        }
    }
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

pub fn prediction(ui: &mut Ui, state: &mut AppState) {
    widgets::section_title(ui, "Admission Prediction", None);

    if let Some(inputs) = state.prediction_inputs.as_mut() {
        widgets::feature_sliders(ui, inputs);
    }
    if let Some(pred) = state.predict_from_prediction_view() {
        widgets::prediction_card(ui, pred);
    }
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

pub fn recommendation(ui: &mut Ui, state: &mut AppState) {
    widgets::section_title(ui, "Admission Recommendation", None);

    if state.recommendation_needs_input() {
        widgets::info(ui, "Fill in your profile first to get a recommendation.");
        if let Some(inputs) = state.recommendation_inputs.as_mut() {
            widgets::feature_sliders(ui, inputs);
        }
    }

    if let Some(pred) = state.recommendation_prediction() {
        widgets::prediction_card(ui, pred);
        widgets::recommendation_card(ui, Outlook::from_prediction(pred));
    }
}
