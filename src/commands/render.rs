//! Plain-text rendering shared by the commands.

use crate::engine::{Notification, NotificationKind, TimeLeft};
use crate::floor::Zone;
use crate::types::{Seat, SeatStatus};

/// One-character marker for a seat on the text map.
pub fn marker(seat: &Seat) -> char {
    match seat.status {
        SeatStatus::Available => '.',
        SeatStatus::Occupied => 'x',
        SeatStatus::Unknown => '?',
    }
}

/// `#12  orange  occupied  Ann Lee (ann@example.com)  31m left`
pub fn seat_line(seat: &Seat, zone: Zone, time_left: Option<TimeLeft>) -> String {
    let mut line = format!("#{:<3} {:<7} {:<9}", seat.id, zone.as_str(), seat.status.as_str());

    if seat.is_occupied() {
        match (seat.holder_name(), seat.booked_by.as_deref()) {
            (Some(name), Some(by)) => line.push_str(&format!(" {} ({})", name, by)),
            (Some(name), None) => line.push_str(&format!(" {}", name)),
            (None, Some(by)) => line.push_str(&format!(" {}", by)),
            (None, None) => {}
        }
        if let Some(left) = time_left {
            line.push_str(&format!("  {}", left));
        }
    }

    line
}

pub fn notification_line(notice: &Notification) -> String {
    match notice.kind {
        NotificationKind::Success => format!("✓ {}", notice.message),
        NotificationKind::Error => format!("✗ {}", notice.message),
    }
}
