/// Section id of the welcome screen's tour.
pub const WELCOME_PAGE: &str = "welcome-page";

/// Spotlight target wrapping the meeting form.
pub const CONFERENCE_URL_TARGET: &str = "conference-url";

/// One spotlight of a tour. Title and body are i18n keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingStep {
    pub target: &'static str,
    pub title_key: &'static str,
    pub body_key: &'static str,
}

const WELCOME_PAGE_STEPS: &[OnboardingStep] = &[OnboardingStep {
    target: CONFERENCE_URL_TARGET,
    title_key: "onboardingConferenceUrlTitle",
    body_key: "onboardingConferenceUrlBody",
}];

/// Steps of a section's tour; empty for unknown sections.
pub fn steps_for(section: &str) -> &'static [OnboardingStep] {
    match section {
        WELCOME_PAGE => WELCOME_PAGE_STEPS,
        _ => &[],
    }
}
