use eframe::egui;

use crate::color;
use crate::config::AppConfig;
use crate::state::{AppState, Page};
use crate::ui::{panels, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AdmissionApp {
    pub state: AppState,
}

impl AdmissionApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let mut state = AppState::new(config);
        state.reload();
        Self { state }
    }
}

impl eframe::App for AdmissionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            panels::menu_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(220.0)
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(color::SIDEBAR)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: footer ----
        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::new()
                    .fill(color::BACKGROUND)
                    .inner_margin(egui::Margin::symmetric(24, 8)),
            )
            .show(ctx, |ui| {
                panels::footer(ui);
            });

        // ---- Central panel: current view ----
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(color::BACKGROUND)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                panels::banner(ui);

                if let Some(message) = self.state.status_message.clone() {
                    panels::error_view(ui, &message);
                    return;
                }

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.state.page {
                        Page::Dashboard => views::dashboard(ui, &self.state),
                        Page::Evaluation => views::evaluation(ui, &self.state),
                        Page::FeatureImportance => views::feature_importance(ui, &self.state),
                        Page::Prediction => views::prediction(ui, &mut self.state),
                        Page::Recommendation => views::recommendation(ui, &mut self.state),
                    });
            });
    }
}
