//! Card Component
//!
//! White form container used by the welcome screen.

use egui::Color32;

/// A rounded, lightly shadowed container
pub struct Card {
    max_width: Option<f32>,
    inner_margin: f32,
    fill: Color32,
}

impl Card {
    pub fn new() -> Self {
        Self {
            max_width: None,
            inner_margin: 10.0,
            fill: Color32::WHITE,
        }
    }

    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn inner_margin(mut self, margin: f32) -> Self {
        self.inner_margin = margin;
        self
    }

    pub fn fill(mut self, fill: Color32) -> Self {
        self.fill = fill;
        self
    }

    /// Renders the card with custom content
    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        egui::Frame::new()
            .fill(self.fill)
            .corner_radius(6.0)
            .inner_margin(self.inner_margin)
            .shadow(egui::epaint::Shadow {
                offset: [0, 4],
                blur: 24,
                spread: 0,
                color: Color32::from_black_alpha(60),
            })
            .show(ui, |ui| {
                if let Some(width) = self.max_width {
                    ui.set_max_width(width);
                }
                add_contents(ui)
            })
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}
