//! App Event Handler
//!
//! Applies navigation requests and actions queued by screens, and owns the
//! page transitions (mount/unmount) they trigger.

use super::state::App;
use crate::events::{Action, AppEvent};
use crate::models::{ConferenceDescriptor, DefaultServerBuilder};
use crate::navigation::{LocationState, NavigationRequest, Route, RoutePayload};
use crate::pages::{ConferencePage, Page, WelcomeDeps, WelcomeScreen};

impl App {
    pub(super) fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Navigate(request) => self.handle_navigate(request),
            AppEvent::Dispatch(action) => self.handle_action(action),
        }
    }

    pub(super) fn handle_action(&mut self, action: Action) {
        self.logger
            .debug(&format!("[APP] Handling action: {:?}", action));
        match action {
            Action::StartOnboarding(section) => {
                self.onboarding.start(&section);
            }
            Action::AdvanceOnboarding => self.onboarding.advance(),
            Action::SkipOnboarding => self.onboarding.skip(),
        }
    }

    fn handle_navigate(&mut self, request: NavigationRequest) {
        let Some(route) = Route::from_path(&request.path) else {
            self.logger
                .warn(&format!("[NAV] Unknown route '{}' ignored", request.path));
            return;
        };

        match (route, request.payload) {
            (Route::Conference, RoutePayload::Conference(conference)) => {
                self.enter_conference(conference)
            }
            (Route::Conference, _) => {
                self.logger
                    .warn("[NAV] Conference route requested without a conference");
            }
            (Route::Welcome, RoutePayload::Location(location)) => {
                self.enter_welcome(Some(location))
            }
            (Route::Welcome, _) => self.enter_welcome(None),
        }
    }

    /// Replaces the current page with a freshly mounted welcome screen
    pub(super) fn enter_welcome(&mut self, location: Option<LocationState>) {
        self.leave_current_page();

        let deps = WelcomeDeps {
            navigator: Box::new(self.events.clone()),
            dispatcher: Box::new(self.events.clone()),
            conference_builder: Box::new(DefaultServerBuilder::new(
                self.config.default_server_url.clone(),
            )),
            logger: self.logger.for_component("Welcome"),
        };

        let mut welcome = WelcomeScreen::new(location.as_ref(), deps)
            .reject_empty_details(self.config.reject_empty_details);
        welcome.mount();

        self.welcome = Some(welcome);
        self.current_page = Page::Welcome;
        self.logger.info("[NAV] Entered welcome page");
    }

    pub(super) fn enter_conference(&mut self, conference: ConferenceDescriptor) {
        self.leave_current_page();

        self.logger.info(&format!(
            "[NAV] Entered conference '{}' on {}",
            conference.room, conference.server_url
        ));
        self.conference = Some(ConferencePage::new(conference));
        self.current_page = Page::Conference;
    }

    fn leave_current_page(&mut self) {
        if let Some(mut welcome) = self.welcome.take() {
            welcome.unmount();
        }
        self.conference = None;
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::AppConfig;
    use crate::events::Action;
    use crate::navigation::{LocationState, Route, RoutePayload};
    use crate::onboarding::WELCOME_PAGE;
    use crate::pages::Page;
    use logging::Logger;

    fn app_with(config: AppConfig) -> App {
        App::with_config(config, Logger::null())
    }

    fn app() -> App {
        app_with(AppConfig {
            default_server_url: "https://meet.example.org".to_string(),
            onboarding_state_path: None,
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_startup_mounts_welcome_and_requests_tour() {
        let mut app = app();
        assert_eq!(app.current_page, Page::Welcome);
        assert!(app.onboarding.active_step().is_none());

        app.process_events();

        let active = app.onboarding.active_step().unwrap();
        assert_eq!(active.section, WELCOME_PAGE);
    }

    #[test]
    fn test_disabled_onboarding_stays_hidden() {
        let mut app = app_with(AppConfig {
            onboarding_enabled: false,
            onboarding_state_path: None,
            ..AppConfig::default()
        });

        app.process_events();

        assert!(app.onboarding.active_step().is_none());
    }

    #[test]
    fn test_join_switches_to_conference() {
        let mut app = app();
        app.process_events();

        let welcome = app.welcome.as_mut().unwrap();
        welcome.on_url_change("standup");
        welcome.on_password_change("pw");
        assert!(welcome.on_join());

        app.process_events();

        assert_eq!(app.current_page, Page::Conference);
        assert!(app.welcome.is_none());
        let conference = app.conference.as_ref().unwrap().conference();
        assert_eq!(conference.room, "standup");
        assert_eq!(conference.server_url, "https://meet.example.org");
        assert_eq!(conference.password.as_deref(), Some("pw"));
    }

    #[test]
    fn test_unparseable_input_stays_on_welcome() {
        let mut app = app();
        app.welcome.as_mut().unwrap().on_url_change("https://");
        assert!(!app.welcome.as_mut().unwrap().on_join());

        app.process_events();

        assert_eq!(app.current_page, Page::Welcome);
        assert_eq!(app.welcome.as_ref().unwrap().state().url, "https://");
    }

    #[test]
    fn test_unknown_route_is_ignored() {
        let mut app = app();
        app.events.navigate("/settings", RoutePayload::None);
        app.process_events();

        assert_eq!(app.current_page, Page::Welcome);
        assert!(app.welcome.is_some());
    }

    #[test]
    fn test_conference_route_without_descriptor_is_ignored() {
        let mut app = app();
        app.events
            .navigate(Route::Conference.path(), RoutePayload::None);
        app.process_events();

        assert_eq!(app.current_page, Page::Welcome);
    }

    #[test]
    fn test_welcome_route_with_error_location() {
        let mut app = app();
        app.events.navigate(
            Route::Welcome.path(),
            RoutePayload::Location(LocationState {
                room: Some("abc".to_string()),
                server_url: Some("https://host".to_string()),
                error: true,
            }),
        );
        app.process_events();

        let state = app.welcome.as_ref().unwrap().state();
        assert_eq!(state.url, "https://host/abc");
        assert!(state.location_error);
    }

    #[test]
    fn test_skip_completes_tour() {
        let mut app = app();
        app.process_events();

        app.handle_action(Action::SkipOnboarding);

        assert!(app.onboarding.active_step().is_none());
        assert!(app.onboarding.is_completed(WELCOME_PAGE));

        // Remounting the welcome page does not bring the tour back.
        app.enter_welcome(None);
        app.process_events();
        assert!(app.onboarding.active_step().is_none());
    }
}
