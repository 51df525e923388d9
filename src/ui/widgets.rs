use eframe::egui::{self, Color32, RichText, Sense, Shadow, Ui};

use crate::color;
use crate::data::inputs::FeatureInputs;
use crate::metrics::format_percent;
use crate::recommend::{DISCLAIMER, Outlook};

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// White rounded card whose shadow lifts while hovered.
pub fn card<R>(ui: &mut Ui, id_salt: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let id = ui.id().with(("card", id_salt));
    let hovered = ui.ctx().data(|d| d.get_temp::<bool>(id)).unwrap_or(false);
    let lift = ui.ctx().animate_bool(id, hovered);

    let shadow = Shadow {
        offset: [0, (10.0 + 10.0 * lift) as i8],
        blur: (24.0 + 16.0 * lift) as u8,
        spread: 0,
        color: if lift > 0.5 {
            color::SHADOW_HOVER
        } else {
            color::SHADOW
        },
    };

    let inner = egui::Frame::new()
        .fill(color::CARD)
        .corner_radius(16.0)
        .inner_margin(egui::Margin::same(22))
        .outer_margin(egui::Margin {
            bottom: 20,
            ..Default::default()
        })
        .shadow(shadow)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        });

    let now_hovered = inner.response.contains_pointer();
    ui.ctx().data_mut(|d| d.insert_temp(id, now_hovered));
    inner.inner
}

pub fn section_title(ui: &mut Ui, title: &str, description: Option<&str>) {
    ui.label(RichText::new(title).size(22.0).strong().color(color::TITLE));
    if let Some(desc) = description {
        ui.label(RichText::new(desc).size(14.0).color(color::MUTED));
    }
    ui.add_space(16.0);
}

pub fn metric_value(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(32.0).strong().color(color::PRIMARY));
}

/// One dashboard tile: big value over its label.
pub fn metric_card(ui: &mut Ui, label: &str, value: &str) {
    card(ui, label, |ui| {
        metric_value(ui, value);
        ui.label(RichText::new(label).color(color::TITLE));
    });
}

/// Thin rounded progress track; `fraction` is clamped for display.
pub fn progress(ui: &mut Ui, fraction: f64) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 8.0), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, color::TRACK);

    let fill = fraction.clamp(0.0, 1.0) as f32;
    if fill > 0.0 {
        let mut filled = rect;
        filled.set_width(rect.width() * fill);
        painter.rect_filled(filled, 4.0, color::PRIMARY);
    }
}

pub fn prediction_card(ui: &mut Ui, predicted: f64) {
    card(ui, "prediction", |ui| {
        ui.label(RichText::new("Predicted Chance of Admit").strong().color(color::TITLE));
        metric_value(ui, &format_percent(predicted));
        progress(ui, predicted);
    });
}

pub fn recommendation_card(ui: &mut Ui, outlook: Outlook) {
    card(ui, "recommendation", |ui| {
        ui.label(
            RichText::new("Recommendation")
                .size(20.0)
                .strong()
                .color(color::PRIMARY),
        );
        ui.add_space(6.0);
        ui.label(
            RichText::new(outlook.message())
                .size(16.0)
                .strong()
                .color(color::PRIMARY),
        );
        ui.label(RichText::new(outlook.advice()).size(15.0).color(color::PRIMARY));
        ui.add_space(6.0);
        ui.label(
            RichText::new(DISCLAIMER)
                .size(13.0)
                .italics()
                .color(color::PRIMARY),
        );
    });
}

// ---------------------------------------------------------------------------
// Input collector
// ---------------------------------------------------------------------------

/// One slider per feature. Returns true when any value changed.
pub fn feature_sliders(ui: &mut Ui, inputs: &mut FeatureInputs) -> bool {
    let mut changed = false;
    let key = inputs.key;
    card(ui, key, |ui| {
        for (idx, input) in inputs.inputs.iter_mut().enumerate() {
            ui.push_id((key, idx), |ui| {
                ui.label(RichText::new(input.name.as_str()).color(color::TITLE));
                let slider = egui::Slider::new(&mut input.value, input.min..=input.max)
                    .clamping(egui::SliderClamping::Always);
                changed |= ui.add(slider).changed();
            });
            ui.add_space(4.0);
        }
    });
    if changed {
        inputs.clamp_all();
    }
    changed
}

pub fn info(ui: &mut Ui, text: &str) {
    egui::Frame::new()
        .fill(Color32::from_rgb(0xDB, 0xEA, 0xFE))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(color::PRIMARY));
        });
    ui.add_space(12.0);
}
