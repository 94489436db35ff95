/// Commands returned by shell views (View -> Controller).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    // --- Navbar ---
    GoHome,

    // --- Conference ---
    LeaveConference,
}
