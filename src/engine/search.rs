//! Colleague search over booked seats.

use crate::types::Seat;

/// Whether `seat` is booked by someone matching `query`.
///
/// Case-insensitive substring match on the holder's display name or raw
/// `booked_by` identifier. A blank query matches nothing, and neither does a
/// seat that isn't occupied.
pub fn matches(seat: &Seat, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() || !seat.is_occupied() {
        return false;
    }

    let needle = query.to_lowercase();
    let hit = |hay: &str| hay.to_lowercase().contains(&needle);

    seat.holder_name().is_some_and(hit) || seat.booked_by.as_deref().is_some_and(hit)
}
