//! Short-lived notifications.
//!
//! This module contains the toast shown to the player once a maze is solved. A toast remembers
//! when it was raised and expires on its own after a fixed delay.

use std::time::{Duration, Instant};

/// How long a toast stays on screen, in milliseconds.
pub(crate) const DISPLAY_DURATION_MS: u64 = 2000;

/// Message shown when the player reaches the exit.
pub(crate) const SOLVED_MESSAGE: &str = "Congratulations, be ready for a new one!";

/// A notification with a limited lifetime.
#[derive(Debug, Clone)]
pub(crate) struct Toast {
    /// Text shown to the player.
    message: &'static str,
    /// Moment the toast was raised.
    shown_at: Instant,
    /// Time after which the toast is dropped.
    lifetime: Duration,
}

impl Toast {
    /// Raises a toast with the default lifetime.
    pub(crate) fn new(message: &'static str) -> Self {
        Self::with_lifetime(message, Duration::from_millis(DISPLAY_DURATION_MS))
    }

    /// Raises a toast that expires after `lifetime`.
    pub(crate) fn with_lifetime(message: &'static str, lifetime: Duration) -> Self {
        Self {
            message,
            shown_at: Instant::now(),
            lifetime,
        }
    }

    /// Text shown to the player.
    pub(crate) const fn message(&self) -> &'static str {
        self.message
    }

    /// Whether the toast has outlived its lifetime.
    pub(crate) fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_is_visible() {
        let toast = Toast::new(SOLVED_MESSAGE);

        assert!(!toast.is_expired(), "a fresh toast should still be shown");
        assert_eq!(toast.message(), SOLVED_MESSAGE);
    }

    #[test]
    fn test_zero_lifetime_expires_immediately() {
        let toast = Toast::with_lifetime("gone", Duration::ZERO);

        assert!(toast.is_expired(), "a zero lifetime toast is expired at once");
    }
}
