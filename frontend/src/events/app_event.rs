use super::Action;
use crate::navigation::NavigationRequest;

/// Events queued by screens and drained by the App once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Navigate(NavigationRequest),
    Dispatch(Action),
}
