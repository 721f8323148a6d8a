//! Transient user notifications.
//!
//! Only the latest notification is shown; each carries its own dismissal
//! deadline, independent of the polling timer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
    pub dismiss_after: Duration,
}

impl Notification {
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.raised_at
            .checked_add_signed(self.dismiss_after)
            .is_none_or(|deadline| now < deadline)
    }
}

/// Auto-dismiss delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationDelays {
    pub fetch_error_ms: u64,
    pub booking_ms: u64,
    pub release_ms: u64,
    pub assign_ms: u64,
}

impl Default for NotificationDelays {
    fn default() -> Self {
        Self {
            fetch_error_ms: 3000,
            booking_ms: 4000,
            release_ms: 3000,
            assign_ms: 3000,
        }
    }
}

pub(crate) fn millis(ms: u64) -> Duration {
    Duration::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX))
}

/// Holder for the notification currently on screen.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    current: Option<Notification>,
}

impl Notifications {
    /// Show a notification, replacing whatever was there.
    pub fn raise(&mut self, kind: NotificationKind, message: impl Into<String>, now: DateTime<Utc>, dismiss_after: Duration) {
        self.current = Some(Notification {
            kind,
            message: message.into(),
            raised_at: now,
            dismiss_after,
        });
    }

    /// The notification still visible at `now`, if any.
    pub fn current(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.is_visible(now))
    }
}
