//! Spotlight overlay for the active onboarding step.

use super::ActiveStep;
use crate::components::{Button, ButtonVariant, Dialog};
use crate::events::Action;
use crate::i18n::Translator;
use egui::{Align2, Color32, Id, LayerId, Order, Rect, RichText, Stroke, StrokeKind};

const HIGHLIGHT: Color32 = Color32::from_rgb(214, 158, 46);

fn target_id(target: &str) -> Id {
    Id::new(("spotlight_target", target))
}

/// Records where `target` was drawn this frame so the spotlight can frame it.
pub fn set_spotlight_target(ctx: &egui::Context, target: &str, rect: Rect) {
    ctx.data_mut(|data| data.insert_temp(target_id(target), rect));
}

/// Draws the active step and returns the user's choice, if any.
pub fn render_spotlight(
    ctx: &egui::Context,
    active: ActiveStep<'_>,
    translator: &Translator,
) -> Option<Action> {
    let target_rect = ctx.data_mut(|data| data.get_temp::<Rect>(target_id(active.step.target)));

    if let Some(rect) = target_rect {
        ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("spotlight_highlight")))
            .rect_stroke(
                rect.expand(6.0),
                12.0,
                Stroke::new(3.0, HIGHLIGHT),
                StrokeKind::Outside,
            );
    }

    Dialog::new("onboarding_spotlight")
        .width(360.0)
        .height(150.0)
        .anchor(Align2::CENTER_BOTTOM, [0.0, -40.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new(translator.t(active.step.title_key))
                    .size(20.0)
                    .strong()
                    .color(HIGHLIGHT),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(translator.t(active.step.body_key))
                    .size(15.0)
                    .color(Color32::from_rgb(226, 232, 240)),
            );
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{}/{}", active.index + 1, active.total))
                        .color(Color32::from_rgb(148, 163, 184)),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut action = None;
                    if Button::new(translator.t("onboardingNext"))
                        .variant(ButtonVariant::Accent)
                        .show(ui)
                        .clicked()
                    {
                        action = Some(Action::AdvanceOnboarding);
                    }
                    if !active.is_last()
                        && Button::new(translator.t("onboardingSkip"))
                            .variant(ButtonVariant::Secondary)
                            .show(ui)
                            .clicked()
                    {
                        action = Some(Action::SkipOnboarding);
                    }
                    action
                })
                .inner
            })
            .inner
        })
        .flatten()
}
