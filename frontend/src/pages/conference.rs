//! Conference Page
//!
//! Shows the joined meeting. The media view itself lives elsewhere; this page
//! only confirms where the user is and offers a way back.

use crate::components::{Button, ButtonVariant, Card};
use crate::events::UiCommand;
use crate::i18n::Translator;
use crate::models::ConferenceDescriptor;
use crate::navigation::LocationState;
use egui::{Color32, FontId, RichText};

pub struct ConferencePage {
    conference: ConferenceDescriptor,
}

impl ConferencePage {
    pub fn new(conference: ConferenceDescriptor) -> Self {
        Self { conference }
    }

    pub fn conference(&self) -> &ConferenceDescriptor {
        &self.conference
    }

    /// Welcome payload that prefills the form with this meeting.
    pub fn leave_location(&self) -> LocationState {
        LocationState {
            room: Some(self.conference.room.clone()),
            server_url: Some(self.conference.server_url.clone()),
            error: false,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, translator: &Translator) -> Option<UiCommand> {
        let mut command = None;

        ui.vertical_centered(|ui| {
            ui.add_space(120.0);

            Card::new()
                .fill(Color32::from_rgb(30, 41, 59))
                .max_width(480.0)
                .inner_margin(25.0)
                .show(ui, |ui| {
                    Self::render_row(ui, translator.t("conferenceRoom"), &self.conference.room);
                    ui.add_space(10.0);
                    Self::render_row(
                        ui,
                        translator.t("conferenceServer"),
                        &self.conference.server_url,
                    );
                    ui.add_space(25.0);

                    if Button::new(translator.t("leave"))
                        .variant(ButtonVariant::Secondary)
                        .min_size(egui::vec2(200.0, 40.0))
                        .show(ui)
                        .clicked()
                    {
                        command = Some(UiCommand::LeaveConference);
                    }
                });
        });

        command
    }

    fn render_row(ui: &mut egui::Ui, label: &str, value: &str) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{}:", label))
                    .font(FontId::proportional(18.0))
                    .color(Color32::from_rgb(148, 163, 184)),
            );
            ui.label(
                RichText::new(value)
                    .font(FontId::proportional(18.0))
                    .strong()
                    .color(Color32::WHITE),
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_location_round_trips_url() {
        let page = ConferencePage::new(ConferenceDescriptor {
            room: "abc".to_string(),
            server_url: "https://host".to_string(),
            password: Some("pw".to_string()),
        });

        let location = page.leave_location();
        assert_eq!(location.url().as_deref(), Some("https://host/abc"));
        assert!(!location.error);
        assert_eq!(location.url().unwrap(), page.conference().url());
    }
}
