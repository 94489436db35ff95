//! Navbar Component
//!
//! Top panel with the application title and a home button.

use crate::events::UiCommand;
use crate::i18n::Translator;
use egui::{Color32, FontId, RichText};

/// Renders the navbar and returns a command if the home button was clicked
pub fn render_navbar(ctx: &egui::Context, translator: &Translator) -> Option<UiCommand> {
    egui::TopBottomPanel::top("navbar")
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(translator.t("appTitle"))
                        .font(FontId::proportional(22.0))
                        .strong()
                        .color(Color32::WHITE),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(12.0);
                    ui.button(RichText::new(translator.t("home")).size(16.0))
                        .clicked()
                        .then_some(UiCommand::GoHome)
                })
                .inner
            })
            .inner
        })
        .inner
}
