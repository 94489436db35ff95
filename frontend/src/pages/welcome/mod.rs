//! Welcome Page
//!
//! Meeting name/URL and password form. Submitting builds a conference
//! descriptor and, if one comes back, pushes the conference route.

mod state;
mod timeout;
mod view;

pub use state::{WelcomeDeps, WelcomeScreen};
