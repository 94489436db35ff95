//! egui rendering for the welcome screen.

use super::WelcomeScreen;
use crate::components::{Button, ButtonVariant, Card, TextField};
use crate::i18n::Translator;
use crate::onboarding::{CONFERENCE_URL_TARGET, set_spotlight_target};
use egui::{Color32, RichText};

impl WelcomeScreen {
    /// Renders the form. State changes go through the screen's handlers.
    pub fn show(&mut self, ui: &mut egui::Ui, translator: &Translator) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);

            let card = Card::new()
                .max_width(420.0)
                .inner_margin(20.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(translator.t("appTitle"))
                                .size(36.0)
                                .strong()
                                .color(Color32::from_rgb(45, 55, 72)),
                        );
                    });
                    ui.add_space(20.0);
                    self.render_form(ui, translator);
                });

            set_spotlight_target(ui.ctx(), CONFERENCE_URL_TARGET, card.response.rect);
        });
    }

    fn render_form(&mut self, ui: &mut egui::Ui, translator: &Translator) {
        let invalid = self.state().location_error;

        let mut url = self.state().url.clone();
        let url_response = TextField::new("Meetingname", &mut url)
            .hint("standup / https://meet.jit.si/standup")
            .invalid(invalid)
            .show(ui);
        if self.focus_pending {
            url_response.request_focus();
            self.focus_pending = false;
        }
        if url_response.changed() {
            self.on_url_change(url);
        }

        ui.add_space(20.0);

        let mut password = self.state().password.clone();
        let password_response = TextField::new("Passwort", &mut password)
            .invalid(invalid)
            .show(ui);
        if password_response.changed() {
            self.on_password_change(password);
        }

        ui.add_space(20.0);

        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        let submitted =
            enter_pressed && (url_response.lost_focus() || password_response.lost_focus());

        let clicked = Button::new(translator.t("go"))
            .variant(ButtonVariant::Accent)
            .text_size(18.0)
            .min_size(egui::vec2(340.0, 44.0))
            .show(ui)
            .clicked();

        if submitted {
            self.on_form_submit();
        } else if clicked {
            self.on_join();
        }
    }
}
