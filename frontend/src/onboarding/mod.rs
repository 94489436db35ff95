//! Onboarding
//!
//! Guided tours shown at most once per section. Screens request a tour with
//! [`Action::StartOnboarding`](crate::events::Action::StartOnboarding); the
//! [`OnboardingController`] decides whether anything is actually shown.

mod controller;
mod spotlight;
mod steps;

pub use controller::{ActiveStep, OnboardingController};
pub use spotlight::{render_spotlight, set_spotlight_target};
pub use steps::{CONFERENCE_URL_TARGET, WELCOME_PAGE};
