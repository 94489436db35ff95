//! Channel-backed [`Navigator`] and [`Dispatcher`] handed to screens.

use super::{Action, AppEvent, Dispatcher};
use crate::models::ConferenceDescriptor;
use crate::navigation::{NavigationRequest, Navigator, RoutePayload};
use std::sync::mpsc::Sender;

/// Queues [`AppEvent`]s for the App's update loop.
#[derive(Clone)]
pub struct EventSender {
    tx: Sender<AppEvent>,
}

impl EventSender {
    pub fn new(tx: Sender<AppEvent>) -> Self {
        Self { tx }
    }

    pub fn navigate(&self, path: &str, payload: RoutePayload) {
        // The receiver lives as long as the App; a send can only fail at shutdown.
        let _ = self.tx.send(AppEvent::Navigate(NavigationRequest {
            path: path.to_string(),
            payload,
        }));
    }
}

impl Navigator for EventSender {
    fn push(&self, path: &str, conference: ConferenceDescriptor) {
        self.navigate(path, RoutePayload::Conference(conference));
    }
}

impl Dispatcher for EventSender {
    fn dispatch(&self, action: Action) {
        let _ = self.tx.send(AppEvent::Dispatch(action));
    }
}
