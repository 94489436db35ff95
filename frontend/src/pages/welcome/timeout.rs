use std::time::{Duration, Instant};

/// Handle to a deferred callback owned by a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    #[allow(dead_code)]
    deadline: Instant,
}

impl Timeout {
    // Nothing on the welcome screen schedules one yet.
    #[allow(dead_code)]
    pub fn after(delay: Duration) -> Self {
        Self {
            deadline: Instant::now() + delay,
        }
    }
}

/// Cancels whatever is in `slot`; empty slots are fine.
pub fn clear_timeout(slot: &mut Option<Timeout>) -> Option<Timeout> {
    slot.take()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_timeout_empties_slot() {
        let mut slot = Some(Timeout::after(Duration::from_secs(5)));
        assert!(clear_timeout(&mut slot).is_some());
        assert!(slot.is_none());
        assert!(clear_timeout(&mut slot).is_none());
    }
}
