//! Which action the selected seat offers to the current user.

use crate::types::{CurrentUser, SeatStatus};

use super::reconcile::Selection;

/// Actions available on a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatAccess {
    /// Free: can be booked.
    Bookable,
    /// Booked by the current user: can be released.
    Releasable,
    /// Booked by someone else: read-only.
    ReservedByOther,
    /// Status unknown or seat missing from the latest snapshot.
    Unresolved,
}

impl SeatAccess {
    pub fn can_book(&self) -> bool {
        *self == SeatAccess::Bookable
    }

    pub fn can_release(&self) -> bool {
        *self == SeatAccess::Releasable
    }
}

impl std::fmt::Display for SeatAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SeatAccess::Bookable => "available to book",
            SeatAccess::Releasable => "booked by you",
            SeatAccess::ReservedByOther => "reserved by another colleague",
            SeatAccess::Unresolved => "not confirmed by the latest snapshot",
        };
        f.write_str(label)
    }
}

/// Resolve what `me` may do with `selection`.
///
/// Without a known current user an occupied seat is never releasable.
pub fn seat_access(selection: &Selection, me: Option<&CurrentUser>) -> SeatAccess {
    if selection.is_stale() {
        return SeatAccess::Unresolved;
    }

    let seat = selection.seat();
    match seat.status {
        SeatStatus::Available => SeatAccess::Bookable,
        SeatStatus::Occupied => {
            if me.is_some_and(|me| me.owns(seat.booked_by.as_deref())) {
                SeatAccess::Releasable
            } else {
                SeatAccess::ReservedByOther
            }
        }
        SeatStatus::Unknown => SeatAccess::Unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reconcile::{SnapshotReconciler, StaleSelectionPolicy};
    use crate::types::{Seat, SeatRecord};

    fn me() -> CurrentUser {
        CurrentUser {
            w3_id: "ann@example.com".to_string(),
            name: Some("Ann Lee".to_string()),
        }
    }

    fn reconciler_with(seat: Seat) -> SnapshotReconciler {
        let mut reconciler = SnapshotReconciler::new(StaleSelectionPolicy::Keep);
        let id = seat.id;
        reconciler.ingest(vec![SeatRecord::from(seat)]);
        reconciler.select(id).unwrap();
        reconciler
    }

    fn occupied_by(by: &str) -> Seat {
        Seat {
            status: SeatStatus::Occupied,
            booked_by: Some(by.to_string()),
            ..Seat::placeholder(7)
        }
    }

    #[test]
    fn test_available_is_bookable() {
        let reconciler = reconciler_with(Seat {
            status: SeatStatus::Available,
            ..Seat::placeholder(7)
        });
        let access = seat_access(reconciler.selection().unwrap(), Some(&me()));
        assert!(access.can_book());
        assert!(!access.can_release());
    }

    #[test]
    fn test_own_booking_is_releasable() {
        let reconciler = reconciler_with(occupied_by("ann@example.com"));
        let access = seat_access(reconciler.selection().unwrap(), Some(&me()));
        assert_eq!(access, SeatAccess::Releasable);
    }

    #[test]
    fn test_other_booking_is_read_only() {
        let reconciler = reconciler_with(occupied_by("bob@example.com"));
        let access = seat_access(reconciler.selection().unwrap(), Some(&me()));
        assert_eq!(access, SeatAccess::ReservedByOther);
        assert!(!access.can_release());

        // nobody signed in: nothing to release either
        let access = seat_access(reconciler.selection().unwrap(), None);
        assert_eq!(access, SeatAccess::ReservedByOther);
    }

    #[test]
    fn test_stale_and_unknown_are_unresolved() {
        let mut reconciler = reconciler_with(Seat {
            status: SeatStatus::Available,
            ..Seat::placeholder(7)
        });
        reconciler.ingest(vec![]);
        let access = seat_access(reconciler.selection().unwrap(), Some(&me()));
        assert_eq!(access, SeatAccess::Unresolved);

        let mut fresh = SnapshotReconciler::default();
        let selection = fresh.select(3).unwrap();
        assert_eq!(seat_access(selection, Some(&me())), SeatAccess::Unresolved);
    }
}
