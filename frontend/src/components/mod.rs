//! Reusable egui widgets shared by the pages.

mod button;
mod card;
mod dialog;
mod navbar;
mod text_field;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use dialog::Dialog;
pub use navbar::render_navbar;
pub use text_field::TextField;
