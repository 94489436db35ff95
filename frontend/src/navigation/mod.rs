//! Navigation
//!
//! Routes, route payloads and the [`Navigator`] seam screens use to leave.

use crate::models::ConferenceDescriptor;

/// Screens reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Conference,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Welcome => "/",
            Route::Conference => "/conference",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "" => Some(Route::Welcome),
            "/conference" => Some(Route::Conference),
            _ => None,
        }
    }
}

/// Payload handed to the welcome route, e.g. when coming back from a meeting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationState {
    pub room: Option<String>,
    pub server_url: Option<String>,
    /// Marks the form fields invalid.
    pub error: bool,
}

impl LocationState {
    /// `serverURL/room` when both parts are present.
    pub fn url(&self) -> Option<String> {
        match (self.room.as_deref(), self.server_url.as_deref()) {
            (Some(room), Some(server_url)) if !room.is_empty() && !server_url.is_empty() => {
                Some(format!("{}/{}", server_url, room))
            }
            _ => None,
        }
    }
}

/// Data travelling with a navigation request.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutePayload {
    None,
    Conference(ConferenceDescriptor),
    Location(LocationState),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    pub path: String,
    pub payload: RoutePayload,
}

/// Pushes a conference onto the router.
pub trait Navigator {
    fn push(&self, path: &str, conference: ConferenceDescriptor);
}

impl<F> Navigator for F
where
    F: Fn(&str, ConferenceDescriptor),
{
    fn push(&self, path: &str, conference: ConferenceDescriptor) {
        self(path, conference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_round_trip() {
        for route in [Route::Welcome, Route::Conference] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/settings"), None);
    }

    #[test]
    fn test_location_url_needs_both_parts() {
        let full = LocationState {
            room: Some("abc".to_string()),
            server_url: Some("https://host".to_string()),
            error: false,
        };
        assert_eq!(full.url().as_deref(), Some("https://host/abc"));

        let partial = LocationState {
            room: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(partial.url(), None);

        let empty_room = LocationState {
            room: Some(String::new()),
            server_url: Some("https://host".to_string()),
            error: false,
        };
        assert_eq!(empty_room.url(), None);
    }
}
