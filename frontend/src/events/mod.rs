mod action;
mod app_event;
mod event_sender;
mod ui_command;

pub use action::{Action, Dispatcher};
pub use app_event::AppEvent;
pub use event_sender::EventSender;
pub use ui_command::UiCommand;
