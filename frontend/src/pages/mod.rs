pub mod conference;
pub mod welcome;

pub use conference::ConferencePage;
pub use welcome::{WelcomeDeps, WelcomeScreen};

use crate::onboarding::WELCOME_PAGE;

/// Page enum to represent different views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Welcome,
    Conference,
}

impl Page {
    /// Onboarding section rendered on top of this page, if any.
    pub fn onboarding_section(&self) -> Option<&'static str> {
        match self {
            Page::Welcome => Some(WELCOME_PAGE),
            Page::Conference => None,
        }
    }
}
