//! Dialog Component
//!
//! Floating, title-less window with consistent styling.

use egui::{Align2, Color32, Margin, Vec2};

/// Floating window builder
pub struct Dialog {
    id: String,
    width: f32,
    height: f32,
    anchor: (Align2, Vec2),
}

impl Dialog {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width: 400.0,
            height: 220.0,
            anchor: (Align2::CENTER_CENTER, Vec2::ZERO),
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Pins the dialog to a screen corner or edge, offset by `offset`.
    pub fn anchor(mut self, align: Align2, offset: impl Into<Vec2>) -> Self {
        self.anchor = (align, offset.into());
        self
    }

    /// Shows the dialog and runs the content closure
    pub fn show<R>(
        self,
        ctx: &egui::Context,
        content: impl FnOnce(&mut egui::Ui) -> R,
    ) -> Option<R> {
        let mut result = None;

        egui::Window::new(&self.id)
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(self.anchor.0, self.anchor.1)
            .fixed_size([self.width, self.height])
            .frame(
                egui::Frame::new()
                    .fill(Color32::from_rgb(30, 41, 59))
                    .stroke(egui::Stroke::new(1.0, Color32::from_rgb(51, 65, 85)))
                    .corner_radius(12.0)
                    .inner_margin(Margin::same(24)),
            )
            .show(ctx, |ui| {
                result = Some(content(ui));
            });

        result
    }
}
