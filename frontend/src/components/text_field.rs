//! Labeled single-line text input.

use egui::{Color32, FontId, RichText, Stroke};

const LABEL: Color32 = Color32::from_rgb(45, 55, 72);
const INVALID: Color32 = Color32::from_rgb(239, 68, 68);
const WIDTH: f32 = 340.0;

/// A label above a single-line input, optionally marked invalid.
pub struct TextField<'a> {
    label: &'a str,
    value: &'a mut String,
    hint: Option<&'a str>,
    invalid: bool,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a mut String) -> Self {
        Self {
            label,
            value,
            hint: None,
            invalid: false,
        }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Renders the field; the response is the text edit's.
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        ui.label(
            RichText::new(self.label)
                .font(FontId::proportional(16.0))
                .strong()
                .color(LABEL),
        );
        ui.add_space(8.0);

        let mut text_edit = egui::TextEdit::singleline(self.value)
            .font(FontId::proportional(16.0))
            .margin(egui::Margin::same(10));
        if let Some(hint) = self.hint {
            text_edit = text_edit.hint_text(hint);
        }

        let stroke = if self.invalid {
            Stroke::new(1.5, INVALID)
        } else {
            Stroke::NONE
        };

        egui::Frame::new()
            .stroke(stroke)
            .corner_radius(4.0)
            .show(ui, |ui| ui.add_sized(egui::vec2(WIDTH, 40.0), text_edit))
            .inner
    }
}
