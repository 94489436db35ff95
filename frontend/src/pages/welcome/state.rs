use super::timeout::{Timeout, clear_timeout};
use crate::events::{Action, Dispatcher};
use crate::models::ConferenceBuilder;
use crate::navigation::{LocationState, Navigator, Route};
use crate::onboarding::WELCOME_PAGE;
use logging::Logger;

/// Local state of the welcome form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WelcomeState {
    /// Meeting URL, or a bare room name for the default server
    pub url: String,
    pub password: String,
    /// Set when the screen was opened because of a failed join
    pub location_error: bool,
    /// Room-name animation timer
    pub animate_timeout: Option<Timeout>,
    /// Room-name regeneration timer
    pub update_timeout: Option<Timeout>,
}

impl WelcomeState {
    /// Prefills `url` with `serverURL/room` when the incoming payload has both.
    pub fn from_location(location: Option<&LocationState>) -> Self {
        Self {
            url: location.and_then(LocationState::url).unwrap_or_default(),
            location_error: location.is_some_and(|l| l.error),
            ..Self::default()
        }
    }
}

/// Collaborators the welcome screen talks to.
pub struct WelcomeDeps {
    pub navigator: Box<dyn Navigator>,
    pub dispatcher: Box<dyn Dispatcher>,
    pub conference_builder: Box<dyn ConferenceBuilder>,
    pub logger: Logger,
}

pub struct WelcomeScreen {
    pub(super) state: WelcomeState,
    navigator: Box<dyn Navigator>,
    dispatcher: Box<dyn Dispatcher>,
    conference_builder: Box<dyn ConferenceBuilder>,
    logger: Logger,
    reject_empty_details: bool,
    pub(super) focus_pending: bool,
}

impl WelcomeScreen {
    pub fn new(location: Option<&LocationState>, deps: WelcomeDeps) -> Self {
        Self {
            state: WelcomeState::from_location(location),
            navigator: deps.navigator,
            dispatcher: deps.dispatcher,
            conference_builder: deps.conference_builder,
            logger: deps.logger,
            reject_empty_details: false,
            focus_pending: false,
        }
    }

    /// Refuse to join when both fields are empty.
    pub fn reject_empty_details(mut self, reject: bool) -> Self {
        self.reject_empty_details = reject;
        self
    }

    pub fn state(&self) -> &WelcomeState {
        &self.state
    }

    /// Requests the welcome tour and focuses the URL field.
    pub fn mount(&mut self) {
        self.logger.debug("[WELCOME] Mounted");
        self.focus_pending = true;
        self.dispatcher
            .dispatch(Action::StartOnboarding(WELCOME_PAGE.to_string()));
    }

    pub fn unmount(&mut self) {
        self.clear_timeouts();
        self.logger.debug("[WELCOME] Unmounted");
    }

    fn clear_timeouts(&mut self) {
        clear_timeout(&mut self.state.animate_timeout);
        clear_timeout(&mut self.state.update_timeout);
    }

    pub fn on_url_change(&mut self, text: impl Into<String>) {
        self.state.url = text.into();
    }

    pub fn on_password_change(&mut self, text: impl Into<String>) {
        self.state.password = text.into();
    }

    /// Enter pressed inside the form.
    pub fn on_form_submit(&mut self) {
        self.on_join();
    }

    /// Builds a descriptor from the form and navigates to it.
    ///
    /// Returns whether navigation was requested. Unparseable input is
    /// dropped silently and leaves the state untouched.
    pub fn on_join(&mut self) -> bool {
        let url = self.state.url.as_str();
        let password = self.state.password.as_str();

        if self.reject_empty_details && url.is_empty() && password.is_empty() {
            self.logger.warn("[WELCOME] Provide room details");
            return false;
        }

        let Some(conference) = self.conference_builder.build(url, password) else {
            self.logger
                .debug(&format!("[WELCOME] No conference for input '{}'", url));
            return false;
        };

        self.logger.info(&format!(
            "[WELCOME] Joining '{}' on {}",
            conference.room, conference.server_url
        ));
        self.navigator.push(Route::Conference.path(), conference);
        true
    }
}
