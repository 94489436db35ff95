//! UI Command Handler
//!
//! Turns commands returned by the navbar and the conference page into
//! navigation requests, so every page change goes through the router.

use super::state::App;
use crate::events::UiCommand;
use crate::navigation::{Route, RoutePayload};
use crate::pages::Page;

impl App {
    pub(super) fn handle_ui_command(&mut self, command: UiCommand) {
        self.logger
            .debug(&format!("[UI] Handling command: {:?}", command));
        match command {
            UiCommand::GoHome => self.handle_go_home(),
            UiCommand::LeaveConference => self.handle_leave_conference(),
        }
    }

    fn handle_go_home(&mut self) {
        if self.current_page == Page::Welcome {
            return;
        }
        self.events
            .navigate(Route::Welcome.path(), RoutePayload::None);
    }

    fn handle_leave_conference(&mut self) {
        let Some(page) = self.conference.as_ref() else {
            self.logger
                .warn("[CONFERENCE] Leave requested but no conference is open");
            return;
        };

        self.logger.info(&format!(
            "[CONFERENCE] Leaving '{}'",
            page.conference().room
        ));
        self.events.navigate(
            Route::Welcome.path(),
            RoutePayload::Location(page.leave_location()),
        );
    }
}
