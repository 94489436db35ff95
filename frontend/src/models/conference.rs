//! Conference Descriptor
//!
//! The joinable-meeting value handed to the conference route, and the parser
//! that turns whatever the user typed into one.

/// A meeting the client can join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceDescriptor {
    pub room: String,
    pub server_url: String,
    pub password: Option<String>,
}

impl ConferenceDescriptor {
    /// `serverURL/room`
    pub fn url(&self) -> String {
        format!("{}/{}", self.server_url, self.room)
    }
}

/// Turns a meeting name or URL plus a password into a descriptor.
///
/// Accepted forms:
/// - `https://host[/path]/room`
/// - `host[/path]/room` (served over https)
/// - `room` (on `default_server_url`)
///
/// Query strings and fragments are ignored. Returns `None` for empty input,
/// a missing host, or a room name containing whitespace.
pub fn conference_from_url(
    input: &str,
    password: &str,
    default_server_url: &str,
) -> Option<ConferenceDescriptor> {
    let input = input.trim().split(['?', '#']).next().unwrap_or_default();

    let (server_url, room) = if let Some(scheme_end) = input.find("://") {
        let host_start = scheme_end + 3;
        let input = input.trim_end_matches('/');
        if scheme_end == 0 || input.len() <= host_start {
            return None;
        }
        let (host, _) = input[host_start..].split_once('/')?;
        if host.is_empty() {
            return None;
        }
        let (server, room) = input.rsplit_once('/')?;
        (server.trim_end_matches('/').to_string(), room)
    } else {
        let input = input.trim_end_matches('/');
        match input.rsplit_once('/') {
            Some((host, room)) => {
                let host = host.trim_matches('/');
                if host.is_empty() {
                    return None;
                }
                (format!("https://{}", host), room)
            }
            None => (default_server_url.trim_end_matches('/').to_string(), input),
        }
    };

    if room.is_empty() || room.chars().any(char::is_whitespace) {
        return None;
    }

    Some(ConferenceDescriptor {
        room: room.to_string(),
        server_url,
        password: (!password.is_empty()).then(|| password.to_string()),
    })
}

/// Anything that can build a descriptor from the welcome form's two fields.
pub trait ConferenceBuilder {
    fn build(&self, url: &str, password: &str) -> Option<ConferenceDescriptor>;
}

impl<F> ConferenceBuilder for F
where
    F: Fn(&str, &str) -> Option<ConferenceDescriptor>,
{
    fn build(&self, url: &str, password: &str) -> Option<ConferenceDescriptor> {
        self(url, password)
    }
}

/// [`conference_from_url`] bound to the configured default server.
#[derive(Debug, Clone)]
pub struct DefaultServerBuilder {
    default_server_url: String,
}

impl DefaultServerBuilder {
    pub fn new(default_server_url: impl Into<String>) -> Self {
        Self {
            default_server_url: default_server_url.into(),
        }
    }
}

impl ConferenceBuilder for DefaultServerBuilder {
    fn build(&self, url: &str, password: &str) -> Option<ConferenceDescriptor> {
        conference_from_url(url, password, &self.default_server_url)
    }
}
