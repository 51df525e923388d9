use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the dark navigation sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.visuals_mut().override_text_color = Some(Color32::WHITE);

    ui.add_space(8.0);
    ui.label(RichText::new("🎓 Admission Predict").size(20.0).strong());
    ui.add_space(16.0);

    ui.label(RichText::new("Navigation").size(13.0));
    ui.add_space(4.0);

    let mut selected = state.page;
    for page in Page::ALL {
        ui.radio_value(&mut selected, page, page.label());
    }
    state.navigate(selected);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the File menu.
pub fn menu_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload artifacts").clicked() {
                state.reload();
                ui.close_menu();
            }
            if ui.button("Open data directory…").clicked() {
                open_directory_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(artifacts) = &state.artifacts {
            ui.label(format!(
                "{} records, {} features",
                artifacts.dataset.len(),
                artifacts.feature_stats.len()
            ));
        }
    });
}

/// Blue title banner above every view.
pub fn banner(ui: &mut Ui) {
    egui::Frame::new()
        .fill(color::PRIMARY)
        .corner_radius(14.0)
        .inner_margin(egui::Margin::symmetric(20, 14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Admission Prediction Dashboard")
                    .size(18.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
    ui.add_space(20.0);
}

pub fn footer(ui: &mut Ui) {
    ui.label(
        RichText::new("© 2025 Admission Predict • Professional Decision Support Dashboard")
            .size(12.0)
            .color(color::MUTED),
    );
}

/// Shown instead of any view when the artifacts failed to load.
pub fn error_view(ui: &mut Ui, message: &str) {
    ui.label(
        RichText::new("Failed to load the dashboard")
            .size(22.0)
            .strong()
            .color(color::ERROR),
    );
    ui.add_space(8.0);
    ui.label(RichText::new(message).monospace().color(color::TITLE));
    ui.add_space(8.0);
    ui.label(RichText::new("Use File → Reload artifacts to retry.").color(color::MUTED));
}

// ---------------------------------------------------------------------------
// Directory dialog
// ---------------------------------------------------------------------------

pub fn open_directory_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Open data directory")
        .pick_folder();

    if let Some(dir) = dir {
        log::info!("Loading artifacts from {}", dir.display());
        state.config.artifacts = state.config.artifacts.within(&dir);
        state.reload();
    }
}
