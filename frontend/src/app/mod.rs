//! Application Module - Controller
//!
//! Owns the current page, the onboarding controller and the event queue that
//! screens write into.
//!
//! # Structure
//!
//! - `state.rs`: App state, construction and the per-frame update loop
//! - `event_handler.rs`: navigation and action events queued by screens
//! - `ui_handler.rs`: commands returned by shell views (navbar, conference)
//!
//! # Communication Flow
//!
//! ```text
//! WelcomeScreen --Navigator/Dispatcher--> EventSender --AppEvent--> event_handler
//! Navbar / ConferencePage --UiCommand--> ui_handler
//! Spotlight --Action--> event_handler
//! ```

mod event_handler;
mod state;
mod ui_handler;

pub use state::App;
