//! Application State
//!
//! The `eframe::App::update()` implementation follows this flow:
//! 1. Drain events queued since the last frame
//! 2. Render navbar, current page and onboarding overlay
//! 3. Handle commands returned by the views
//! 4. Drain events queued while rendering

use crate::components::render_navbar;
use crate::config::AppConfig;
use crate::events::{AppEvent, EventSender};
use crate::i18n::Translator;
use crate::onboarding::{OnboardingController, render_spotlight};
use crate::pages::{ConferencePage, Page, WelcomeScreen};
use logging::Logger;
use std::sync::mpsc::{Receiver, channel};

/// Main application state
pub struct App {
    pub(super) config: AppConfig,
    pub(super) logger: Logger,
    pub(super) translator: Translator,
    pub(super) onboarding: OnboardingController,

    // Navigation
    pub(super) current_page: Page,
    pub(super) welcome: Option<WelcomeScreen>,
    pub(super) conference: Option<ConferencePage>,

    // Screens -> App
    pub(super) events: EventSender,
    pub(super) event_rx: Receiver<AppEvent>,
}

impl App {
    /// Loads configuration, starts the logger and opens the welcome page
    pub fn new() -> Self {
        let (config, notes) = AppConfig::load();

        let logger = match Logger::with_component(
            &config.log_path,
            config.log_level,
            "Frontend",
            false,
        ) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("Failed to initialize logger: {}", e);
                std::process::exit(1);
            }
        };

        for note in &notes {
            logger.warn(&format!("[APP] {}", note));
        }

        Self::with_config(config, logger)
    }

    /// Builds the app around an already loaded configuration
    pub fn with_config(config: AppConfig, logger: Logger) -> Self {
        logger.info("[APP] Initializing application...");
        logger.info(&format!(
            "[APP] Configuration loaded - default server: {}, language: {:?}, log_level: {}",
            config.default_server_url, config.language, config.log_level
        ));

        let (tx, event_rx) = channel();
        let onboarding = OnboardingController::new(
            config.onboarding_enabled,
            config.onboarding_state_path.clone(),
            logger.for_component("Onboarding"),
        );

        let mut app = Self {
            translator: Translator::new(config.language),
            config,
            logger,
            onboarding,
            current_page: Page::Welcome,
            welcome: None,
            conference: None,
            events: EventSender::new(tx),
            event_rx,
        };

        app.enter_welcome(None);
        app.logger.info("[APP] Application initialized successfully");
        app
    }

    /// Handles everything screens queued since the last call
    pub(super) fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_app_event(event);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        let navbar_command = render_navbar(ctx, &self.translator);
        let page_command = self.render_view(ctx);
        self.render_onboarding(ctx);

        if let Some(command) = page_command.or(navbar_command) {
            self.handle_ui_command(command);
        }

        self.process_events();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.logger.info("[APP] Application shutting down...");
        if let Some(mut welcome) = self.welcome.take() {
            welcome.unmount();
        }
        self.logger.info("[APP] Cleanup complete, goodbye!");
    }
}

impl App {
    /// Renders the current page and returns any command it produced
    fn render_view(&mut self, ctx: &egui::Context) -> Option<crate::events::UiCommand> {
        let mut command = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::from_rgb(113, 128, 150)))
            .show(ctx, |ui| match self.current_page {
                Page::Welcome => {
                    if let Some(welcome) = self.welcome.as_mut() {
                        welcome.show(ui, &self.translator);
                    }
                }
                Page::Conference => {
                    if let Some(conference) = self.conference.as_ref() {
                        command = conference.show(ui, &self.translator);
                    }
                }
            });

        command
    }

    /// Renders the spotlight when the active tour belongs to this page
    fn render_onboarding(&mut self, ctx: &egui::Context) {
        let Some(section) = self.current_page.onboarding_section() else {
            return;
        };

        let action = match self.onboarding.active_step() {
            Some(active) if active.section == section => {
                render_spotlight(ctx, active, &self.translator)
            }
            _ => None,
        };

        if let Some(action) = action {
            self.handle_action(action);
        }
    }
}
