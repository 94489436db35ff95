/// Application-wide actions screens may request without owning the state
/// they affect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the guided tour for a section unless it was already seen.
    StartOnboarding(String),
    /// Move the active tour to its next step.
    AdvanceOnboarding,
    /// Dismiss the active tour for good.
    SkipOnboarding,
}

/// Sink for [`Action`]s.
pub trait Dispatcher {
    fn dispatch(&self, action: Action);
}

impl<F> Dispatcher for F
where
    F: Fn(Action),
{
    fn dispatch(&self, action: Action) {
        self(action)
    }
}
