//! Meeting client entry point.

// Application modules
mod app;
mod components;
mod config;
mod events;
mod i18n;
mod models;
mod navigation;
mod onboarding;
mod pages;

use app::App;

fn main() {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Meet"),
        ..Default::default()
    };

    let _ = eframe::run_native(
        "Meet",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Light);
            Ok(Box::new(App::new()))
        }),
    );
}
