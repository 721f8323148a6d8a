//! Auto-checkout countdown.

use chrono::{DateTime, Duration, Utc};

/// How long a booking lasts before auto-checkout.
pub const DEFAULT_BOOKING_MINUTES: i64 = 45;

/// Remaining time on a booking, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLeft {
    /// No booking time known: the whole booking window.
    Full(Duration),
    /// Whole minutes until auto-checkout (truncated).
    Minutes(i64),
    /// Deadline reached; the server will check the seat out.
    Expiring,
}

impl std::fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeLeft::Full(duration) => {
                let secs = duration.num_seconds();
                write!(f, "{}m {:02}s", secs / 60, secs % 60)
            }
            TimeLeft::Minutes(m) => write!(f, "{}m left", m),
            TimeLeft::Expiring => f.write_str("Expiring..."),
        }
    }
}

/// Time until `booking_time + duration`, measured at `now`.
pub fn time_left(booking_time: Option<DateTime<Utc>>, now: DateTime<Utc>, duration: Duration) -> TimeLeft {
    let Some(booked_at) = booking_time else {
        return TimeLeft::Full(duration);
    };

    let remaining = booked_at + duration - now;
    if remaining <= Duration::zero() {
        TimeLeft::Expiring
    } else {
        TimeLeft::Minutes(remaining.num_minutes())
    }
}
